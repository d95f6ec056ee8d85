//! Global literal text-node substitution.

use ego_tree::NodeId;

use crate::markup::Document;
use crate::utils::NOT_DETECTED;

/// Whether `search`/`replacement` describe a substitution worth attempting
#[must_use]
pub fn is_substitutable(search: &str, replacement: &str) -> bool {
    let search = search.trim();
    !search.is_empty() && !replacement.is_empty() && search != NOT_DETECTED && search != replacement
}

/// Replace every literal occurrence of `search` (trimmed) with `replacement`
/// in the text nodes below `root`. Raw-text subtrees are skipped.
///
/// All matching handles are collected before the first write. Returns the
/// number of text nodes changed.
pub fn substitute_below(doc: &mut Document, root: NodeId, search: &str, replacement: &str) -> usize {
    if !is_substitutable(search, replacement) {
        return 0;
    }
    let search = search.trim();

    let targets: Vec<(NodeId, String)> = doc
        .text_nodes(root)
        .filter_map(|id| {
            let value = doc.text_value(id)?;
            value
                .contains(search)
                .then(|| (id, value.split(search).collect::<Vec<_>>().join(replacement)))
        })
        .collect();

    for (id, value) in &targets {
        doc.set_text_node(*id, value);
    }
    targets.len()
}

/// `substitute_below` over the whole body
pub fn substitute_text(doc: &mut Document, search: &str, replacement: &str) -> usize {
    match doc.body() {
        Some(body) => substitute_below(doc, body, search, replacement),
        None => 0,
    }
}

/// Literal replacement inside the raw source of every inline script.
/// Returns the number of script text nodes changed.
pub fn substitute_in_scripts(doc: &mut Document, pairs: &[(String, String)]) -> usize {
    let pairs: Vec<&(String, String)> = pairs
        .iter()
        .filter(|(search, replacement)| is_substitutable(search, replacement))
        .collect();
    if pairs.is_empty() {
        return 0;
    }

    let targets: Vec<(NodeId, String)> = doc
        .inline_scripts()
        .into_iter()
        .flat_map(|script| doc.child_text_nodes(script))
        .filter_map(|id| {
            let source = doc.text_value(id)?;
            let rewritten = pairs.iter().fold(source.to_string(), |acc, (search, replacement)| {
                acc.replace(search.trim(), replacement)
            });
            (rewritten != source).then_some((id, rewritten))
        })
        .collect();

    for (id, source) in &targets {
        doc.set_text_node(*id, source);
    }
    targets.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_occurrence_replaced() {
        let mut doc = Document::parse("<p>Acme and Acme</p><div><span>Acme</span> ok</div>");
        assert_eq!(substitute_text(&mut doc, " Acme ", "Nova"), 2);
        let out = doc.serialize();
        assert!(out.contains("<p>Nova and Nova</p>"));
        assert!(out.contains("<span>Nova</span>"));
        assert!(!out.contains("Acme"));
    }

    #[test]
    fn test_raw_text_subtrees_untouched() {
        let mut doc = Document::parse(
            "<p>Acme</p><pre>Acme</pre><code>Acme</code><textarea>Acme</textarea>\
             <script>var n = 'Acme';</script><style>.Acme{}</style>",
        );
        assert_eq!(substitute_text(&mut doc, "Acme", "Nova"), 1);
        assert_eq!(doc.serialize().matches("Acme").count(), 5);
    }

    #[test]
    fn test_noop_guards() {
        let mut doc = Document::parse("<p>Not detected Acme</p>");
        assert_eq!(substitute_text(&mut doc, "", "Nova"), 0);
        assert_eq!(substitute_text(&mut doc, "  ", "Nova"), 0);
        assert_eq!(substitute_text(&mut doc, "Acme", ""), 0);
        assert_eq!(substitute_text(&mut doc, NOT_DETECTED, "Nova"), 0);
        assert_eq!(substitute_text(&mut doc, "Acme", "Acme"), 0);
        assert!(doc.serialize().contains("Not detected Acme"));
    }

    #[test]
    fn test_replacement_containing_search_is_single_pass() {
        let mut doc = Document::parse("<p>Acme</p>");
        substitute_text(&mut doc, "Acme", "Acme Acme");
        assert!(doc.serialize().contains("<p>Acme Acme</p>"));
    }

    #[test]
    fn test_script_literals() {
        let mut doc = Document::parse(
            "<script>document.title = 'Acme';</script><script src=x.js></script><p>Acme</p>",
        );
        let pairs = vec![("Acme".to_string(), "Nova".to_string())];
        assert_eq!(substitute_in_scripts(&mut doc, &pairs), 1);
        let out = doc.serialize();
        assert!(out.contains("document.title = 'Nova';"));
        assert!(out.contains("<p>Acme</p>"));
    }
}
