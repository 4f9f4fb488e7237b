//! Derive a compact pattern from accepted words, guarded by rejected words.
//!
//! The accepted words are stored in a prefix tree, the tree is turned into a
//! pattern that shares prefixes, groups characters with identical continuations
//! into classes and may generalize with suffix wildcards. If a rejected word is
//! recognized by the tree, the pattern falls back to a literal alternation.
//!
//! ```
//! use patsyn::domain::{derive_pattern, SynthesisOptions};
//!
//! let d = derive_pattern(&["ab", "ac"], &["ab"], SynthesisOptions::default());
//! assert_eq!(d.pattern, "(ab|ac)");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
