//! Dependency tree model
//!
//! Sentences own their words in a flat arena; dependents are looked up
//! through precomputed child lists instead of parent/child pointers.

pub mod attributes;
pub mod node;
pub mod sentence;

pub use attributes::{AttributeMap, Features, Misc};
pub use node::{NodeRef, TreeNode};
pub use sentence::{Sentence, SentenceBuilder, Word};
