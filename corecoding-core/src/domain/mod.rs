//! Classification of clause heads
//!
//! [`ClauseClassifier`] is the entry point. It relies on
//! [`ArgumentDescriptor`] for each argument it finds, which in turn uses
//! [`resolve_lemma`] for adpositions, and on [`RoleMap`] for order tags.

pub mod agreement;
pub mod argument;
pub mod clause;
pub mod lemma;
pub mod order;
pub mod report;

pub use agreement::AgreementMatcher;
pub use argument::{describe_argument, ArgumentDescriptor, WordClass};
pub use clause::{ClauseClassifier, ClauseType, CLAUSE_RELATIONS};
pub use lemma::resolve_lemma;
pub use order::{order_tag, Role, RoleMap};
pub use report::{ArgumentReport, Report};
