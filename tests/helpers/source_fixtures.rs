//! Common command-file fixtures for tests.

/// One complete command per line.
pub const TWO_ADJACENT_COMMANDS: &str = "\
A = FOO(X=1)
B = BAR(Y=2)";

/// A typical small study: comment, two multi-line commands, a blank line.
pub const SMALL_STUDY: &str = "\
# static analysis
MAIL = LIRE_MAILLAGE(FORMAT='MED',
                     UNITE=20)

MODE = AFFE_MODELE(MAILLAGE=MAIL,
                   AFFE=_F(TOUT='OUI',
                           PHENOMENE='MECANIQUE',
                           MODELISATION='3D'))";

/// The user started a second command before closing the first.
pub const INTERRUPTED_COMMAND: &str = "\
CH = AFFE_CHAR_MECA(MODELE=MO,
                    DDL_IMPO=_F(GROUP_MA='BASE',
MESH = LIRE_MAILLAGE(FORMAT='MED')";

/// Unclosed command running to the document end.
pub const UNCLOSED_AT_EOF: &str = "\
R = CALC_CHAMP(RESULTAT=RES,
# still typing";

/// Complete command followed by trailing non-command lines.
pub const TRAILING_FILLER: &str = "\
FOO(A=1)
# trailing comment
";

/// Document with no commands at all.
pub const COMMENTS_ONLY: &str = "\
# just a header
# and another comment
";
