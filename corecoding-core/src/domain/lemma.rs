//! Citation form lookup

use crate::tree::TreeNode;

/// Canonical citation form of a node
///
/// Unannotated lemmas (empty or `_`) fall back to the lower-cased `Translit`
/// value, then to the lower-cased surface form. Annotated lemmas prefer
/// `LTranslit` and are otherwise returned verbatim. Only the fallback branch
/// is lower-cased.
pub fn resolve_lemma<N: TreeNode>(node: &N) -> String {
    let lemma = node.lemma();
    if lemma.is_empty() || lemma == "_" {
        let translit = node.misc().get("Translit").to_lowercase();
        if translit.is_empty() {
            node.form().to_lowercase()
        } else {
            translit
        }
    } else {
        let translit = node.misc().get("LTranslit");
        if translit.is_empty() {
            lemma.to_string()
        } else {
            translit.to_string()
        }
    }
}
