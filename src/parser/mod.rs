//! Structural parsing of command files.
//!
//! Three passes, each building on the scanner:
//! - [`boundary`] — does this line start a top-level command?
//! - [`resolver`] — where does a started command end?
//! - [`params`] — which top-level `key=value` pairs does a span contain?
//!
//! All of it is error-tolerant by construction: these functions are total over
//! arbitrary input and classify rather than fail (an unclosed command is
//! *incomplete*, not an error).

pub mod boundary;
pub mod params;
pub mod resolver;

pub use boundary::{CommandStart, detect_command_start};
pub use params::extract_parameters;
pub use resolver::{ResolvedSpan, resolve_span};
