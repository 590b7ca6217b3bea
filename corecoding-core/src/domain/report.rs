//! Report lines emitted per clause head

use super::agreement::BLOCK_SEPARATOR;
use super::argument::ArgumentDescriptor;
use super::clause::ClauseType;
use crate::config::ArgCategory;
use std::fmt;

/// Literal used in SUBJECT lines when the clause has no subject
pub const EMPTY_SUBJECT: &str = "emptysubj";

/// Relation, descriptor and order tag of one argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentReport {
    /// Dependency relation of the argument
    pub relation: String,
    /// Word class, adpositions and case
    pub descriptor: ArgumentDescriptor,
    /// Order of the roles known when the argument was reported
    pub order: String,
}

impl fmt::Display for ArgumentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.relation, self.descriptor, self.order)
    }
}

/// One tagged output line
///
/// `Display` renders the exact line format consumed by downstream counting:
///
/// ```text
/// SUBJECT <clausetype> <relation> <descriptor> <order>
/// SUBJECT <clausetype> emptysubj
/// OBJECT <relation> <descriptor> <order>
/// IOBJECT <relation> <descriptor> <order>
/// AGREEMENT <clausetype> <blocks>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Subject of the clause, or its absence
    Subject {
        /// Finiteness of the clause
        clause_type: ClauseType,
        /// The subject, if one was found
        argument: Option<ArgumentReport>,
    },
    /// Object of the clause
    Object(ArgumentReport),
    /// Indirect object of the clause
    IndirectObject(ArgumentReport),
    /// Agreement features on the predicate and its auxiliaries
    Agreement {
        /// Finiteness of the clause
        clause_type: ClauseType,
        /// One block per verbal node that carries agreement features
        blocks: Vec<String>,
    },
}

impl Report {
    /// Category this line belongs to
    pub fn category(&self) -> ArgCategory {
        match self {
            Report::Subject { .. } => ArgCategory::Subj,
            Report::Object(_) => ArgCategory::Obj,
            Report::IndirectObject(_) => ArgCategory::Iobj,
            Report::Agreement { .. } => ArgCategory::Agreement,
        }
    }

    /// Leading keyword of the line
    pub fn keyword(&self) -> &'static str {
        match self {
            Report::Subject { .. } => "SUBJECT",
            Report::Object(_) => "OBJECT",
            Report::IndirectObject(_) => "IOBJECT",
            Report::Agreement { .. } => "AGREEMENT",
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = self.keyword();
        match self {
            Report::Subject {
                clause_type,
                argument: Some(argument),
            } => write!(f, "{keyword} {clause_type} {argument}"),
            Report::Subject {
                clause_type,
                argument: None,
            } => write!(f, "{keyword} {clause_type} {EMPTY_SUBJECT}"),
            Report::Object(argument) | Report::IndirectObject(argument) => {
                write!(f, "{keyword} {argument}")
            }
            Report::Agreement {
                clause_type,
                blocks,
            } => write!(
                f,
                "{keyword} {clause_type} {}",
                blocks.join(BLOCK_SEPARATOR)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::argument::WordClass;

    fn argument(relation: &str, order: &str) -> ArgumentReport {
        ArgumentReport {
            relation: relation.to_string(),
            descriptor: ArgumentDescriptor {
                word_class: WordClass::Noun,
                adpositions: vec!["of".to_string()],
                case: "Gen".to_string(),
            },
            order: order.to_string(),
        }
    }

    #[test]
    fn test_subject_line() {
        let report = Report::Subject {
            clause_type: ClauseType::Finite,
            argument: Some(argument("nsubj", "SV")),
        };
        assert_eq!(report.to_string(), "SUBJECT finite nsubj NOUN+of+Gen SV");
        assert_eq!(report.category(), ArgCategory::Subj);
    }

    #[test]
    fn test_empty_subject_with_unmarked_clause_keeps_both_spaces() {
        let report = Report::Subject {
            clause_type: ClauseType::Unmarked,
            argument: None,
        };
        assert_eq!(report.to_string(), "SUBJECT  emptysubj");
    }

    #[test]
    fn test_object_lines() {
        assert_eq!(
            Report::Object(argument("obj", "VO")).to_string(),
            "OBJECT obj NOUN+of+Gen VO"
        );
        assert_eq!(
            Report::IndirectObject(argument("iobj", "VIO")).to_string(),
            "IOBJECT iobj NOUN+of+Gen VIO"
        );
    }

    #[test]
    fn test_agreement_blocks_joined() {
        let report = Report::Agreement {
            clause_type: ClauseType::Finite,
            blocks: vec!["Number=Sing|Person=3".to_string(), "Gender=Fem".to_string()],
        };
        assert_eq!(
            report.to_string(),
            "AGREEMENT finite Number=Sing|Person=3|||Gender=Fem"
        );
    }

    #[test]
    fn test_agreement_without_blocks_has_trailing_space() {
        let report = Report::Agreement {
            clause_type: ClauseType::NonFinite,
            blocks: Vec::new(),
        };
        assert_eq!(report.to_string(), "AGREEMENT nonfin ");
    }
}
