//! Domain layer: prefix tree and pattern synthesis
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading)
//! and has no error type: every input is handled by a policy branch.

pub mod conflict;
pub mod display;
pub mod pattern;
pub mod policy;
pub mod reachability;
pub mod synthesizer;
pub mod trie;

pub use conflict::{find_conflict, has_conflict};
pub use display::TrieDisplay;
pub use pattern::{Fragment, Grammar};
pub use policy::{derive_pattern, literal_alternation, Derivation, DerivationKind};
pub use reachability::Reachability;
pub use synthesizer::{synthesize, SynthesisOptions, Synthesizer, WildcardPolicy};
pub use trie::{Trie, TrieNode};
