//! Application layer: input parsing, pattern service and audit
//!
//! This layer drives the domain logic and owns all file and stream I/O.

pub mod audit;
pub mod error;
pub mod error_ext;
pub mod input;
pub mod service;

pub use audit::{audit, AuditReport};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use input::ProblemInput;
pub use service::{render_output, PatternService, PATTERN_KEYWORD};
