//! Clause head classification

use super::agreement::AgreementMatcher;
use super::argument::ArgumentDescriptor;
use super::order::{Role, RoleMap};
use super::report::{ArgumentReport, Report};
use crate::config::{ArgCategory, ClassifierConfig};
use crate::error::ConfigError;
use crate::tree::TreeNode;
use std::fmt;

/// Relations that introduce a clause
pub const CLAUSE_RELATIONS: &[&str] = &["root", "csubj", "ccomp", "xcomp", "advcl", "acl"];

const AUXILIARY_RELATIONS: &[&str] = &["aux", "cop"];
const SUBJECT_RELATIONS: &[&str] = &["nsubj", "csubj"];
const OBJECT_RELATIONS: &[&str] = &["obj", "ccomp"];
const INDIRECT_OBJECT_RELATION: &str = "iobj";

// Participles count as finite.
const FINITE_VERB_FORMS: &[&str] = &["Fin", "Part"];
const VERBAL_UPOS: &[&str] = &["VERB", "AUX"];

/// Finiteness of a clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseType {
    /// Finite or participial predicate, or such an auxiliary
    Finite,
    /// Infinitives, converbs, verbal nouns
    NonFinite,
    /// Finiteness not determined (`VerbForm` test disabled)
    Unmarked,
}

impl ClauseType {
    /// Label used in report lines
    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseType::Finite => "finite",
            ClauseType::NonFinite => "nonfin",
            ClauseType::Unmarked => "",
        }
    }
}

impl fmt::Display for ClauseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies clause heads and reports their core arguments
///
/// Stateless between calls: the same classifier can be shared across
/// threads and applied to any node of any sentence.
#[derive(Debug, Clone)]
pub struct ClauseClassifier {
    config: ClassifierConfig,
    agreement: AgreementMatcher,
}

impl ClauseClassifier {
    /// Create a classifier from a configuration
    pub fn new(config: ClassifierConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let agreement = AgreementMatcher::new(&config.agreement_features)?;
        Ok(Self { config, agreement })
    }

    /// The active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Whether `node` stands in a clause-introducing relation
    pub fn is_clause_head<N: TreeNode>(node: &N) -> bool {
        CLAUSE_RELATIONS.contains(&node.udeprel())
    }

    /// Finiteness of the clause headed by `node`
    pub fn clause_type<N: TreeNode>(&self, node: &N, auxiliaries: &[&N]) -> ClauseType {
        if !self.config.verbform {
            return ClauseType::Unmarked;
        }

        if has_finite_form(node) || auxiliaries.iter().any(|aux| has_finite_form(*aux)) {
            ClauseType::Finite
        } else {
            ClauseType::NonFinite
        }
    }

    /// Report lines for `node`, empty unless it heads a clause
    ///
    /// Lines come in the order SUBJECT, OBJECT, IOBJECT, AGREEMENT. Each
    /// order tag covers the roles registered up to that point: the verb and
    /// subject first, then the object, then the indirect object.
    pub fn classify<N: TreeNode>(&self, node: &N) -> Vec<Report> {
        let mut reports = Vec::new();
        if !Self::is_clause_head(node) {
            return reports;
        }

        let children = node.children();
        let auxiliaries: Vec<&N> = children
            .iter()
            .filter(|child| AUXILIARY_RELATIONS.contains(&child.udeprel()))
            .collect();
        let clause_type = self.clause_type(node, &auxiliaries);
        let arg = self.config.arg;

        let mut roles = RoleMap::new();
        roles.register(Role::Verb, node);

        let subject = first(&children, SUBJECT_RELATIONS);
        if let Some(subject) = subject {
            roles.register(Role::Subject, subject);
        }
        if arg.includes(ArgCategory::Subj) {
            reports.push(Report::Subject {
                clause_type,
                argument: subject.map(|subject| self.argument_report(subject, &roles)),
            });
        }

        let object = first(&children, OBJECT_RELATIONS);
        if let Some(object) = object {
            roles.register(Role::Object, object);
            if arg.includes(ArgCategory::Obj) {
                reports.push(Report::Object(self.argument_report(object, &roles)));
            }
        }

        if arg.includes(ArgCategory::Iobj) {
            if let Some(iobject) = first(&children, &[INDIRECT_OBJECT_RELATION]) {
                roles.register(Role::IndirectObject, iobject);
                reports.push(Report::IndirectObject(
                    self.argument_report(iobject, &roles),
                ));
            }
        }

        if arg.includes(ArgCategory::Agreement) {
            let verbal = VERBAL_UPOS.contains(&node.upos()).then_some(node);
            let blocks = verbal
                .into_iter()
                .chain(auxiliaries.iter().copied())
                .filter_map(|n| self.agreement.block(n))
                .collect();
            reports.push(Report::Agreement {
                clause_type,
                blocks,
            });
        }

        reports
    }

    fn argument_report<N: TreeNode>(&self, argument: &N, roles: &RoleMap) -> ArgumentReport {
        let relation = if self.config.full_deprel {
            argument.deprel()
        } else {
            argument.udeprel()
        };
        ArgumentReport {
            relation: relation.to_string(),
            descriptor: ArgumentDescriptor::of(argument),
            order: roles.order_tag(),
        }
    }
}

fn first<'c, N: TreeNode>(children: &'c [N], relations: &[&str]) -> Option<&'c N> {
    children
        .iter()
        .find(|child| relations.contains(&child.udeprel()))
}

fn has_finite_form<N: TreeNode>(node: &N) -> bool {
    FINITE_VERB_FORMS.contains(&node.feats().get("VerbForm"))
}
