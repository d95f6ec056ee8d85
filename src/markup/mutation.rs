//! In-place mutation of a `Document` by node handle.
//!
//! Callers collect handles first and mutate afterwards. New nodes are produced
//! by running markup through the fragment parser and deep-copying the result
//! into the arena, so attribute storage and raw-text handling stay exactly as
//! scraper builds them.

use ego_tree::{NodeId, NodeMut, NodeRef};
use scraper::node::Text;
use scraper::{Html, Node};
use tracing::debug;

use super::document::Document;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn text_node(value: &str) -> Node {
    Node::Text(Text {
        text: value.into(),
    })
}

/// Copy the children of `source` (from another tree) below `target`
fn copy_children(target: &mut NodeMut<'_, Node>, source: NodeRef<'_, Node>) {
    for child in source.children() {
        let mut copied = target.append(child.value().clone());
        copy_children(&mut copied, child);
    }
}

/// Build a detached element carrying exactly `attrs`
fn build_element(name: &str, attrs: &[(String, String)]) -> Option<Node> {
    let mut markup = format!("<{name}");
    for (key, value) in attrs {
        markup.push_str(&format!(
            " {key}=\"{}\"",
            html_escape::encode_double_quoted_attribute(value)
        ));
    }
    markup.push('>');
    if !VOID_ELEMENTS.contains(&name) {
        markup.push_str(&format!("</{name}>"));
    }

    let fragment = Html::parse_fragment(&markup);
    fragment
        .root_element()
        .descendants()
        .find(|node| {
            node.value()
                .as_element()
                .is_some_and(|el| el.name() == name)
        })
        .map(|node| node.value().clone())
}

impl Document {
    /// Replace the value of a text node. Returns `false` if `id` is not a text node.
    pub fn set_text_node(&mut self, id: NodeId, value: &str) -> bool {
        let Some(mut node) = self.html.tree.get_mut(id) else {
            return false;
        };
        match node.value() {
            Node::Text(text) => {
                text.text = value.into();
                true
            }
            _ => false,
        }
    }

    /// Detach every child of `id`
    pub fn clear_children(&mut self, id: NodeId) {
        let children: Vec<NodeId> = match self.html.tree.get(id) {
            Some(node) => node.children().map(|child| child.id()).collect(),
            None => return,
        };
        for child in children {
            if let Some(mut node) = self.html.tree.get_mut(child) {
                node.detach();
            }
        }
    }

    /// Detach every element carrying `id="value"`. Returns how many were removed.
    pub fn remove_elements_with_id(&mut self, value: &str) -> usize {
        let targets = self.elements_with_id(value);
        for id in &targets {
            if let Some(mut node) = self.html.tree.get_mut(*id) {
                node.detach();
            }
        }
        targets.len()
    }

    /// Replace the rendered text of an element.
    ///
    /// Without element children the element's children become a single text
    /// node. With element children only the first non-blank descendant text
    /// node (walk order, raw-text subtrees skipped) receives `value`, keeping
    /// icons and wrappers intact; if there is none a text node is appended.
    pub fn set_text(&mut self, id: NodeId, value: &str) {
        if self.html.tree.get(id).is_none() {
            return;
        }

        if !self.has_element_children(id) {
            self.clear_children(id);
            if let Some(mut node) = self.html.tree.get_mut(id) {
                node.append(text_node(value));
            }
            return;
        }

        let first_label = self
            .text_nodes(id)
            .find(|text_id| self.text_value(*text_id).is_some_and(|t| !t.trim().is_empty()));

        match first_label {
            Some(text_id) => {
                self.set_text_node(text_id, value);
            }
            None => {
                if let Some(mut node) = self.html.tree.get_mut(id) {
                    node.append(text_node(value));
                }
            }
        }
    }

    /// Current attributes of an element, in scraper's storage order
    #[must_use]
    pub fn attrs(&self, id: NodeId) -> Vec<(String, String)> {
        self.html
            .tree
            .get(id)
            .and_then(|node| node.value().as_element())
            .map(|el| {
                el.attrs()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Swap an element's attribute set, keeping its children.
    ///
    /// Returns `false` when the element cannot be rebuilt in body context
    /// (document-structure elements such as `html`, `head` or table parts).
    fn replace_attrs(&mut self, id: NodeId, attrs: &[(String, String)]) -> bool {
        let Some(name) = self.tag_name(id).map(str::to_string) else {
            return false;
        };
        let Some(rebuilt) = build_element(&name, attrs) else {
            debug!("Cannot rebuild <{}> in fragment context, attribute change skipped", name);
            return false;
        };
        match self.html.tree.get_mut(id) {
            Some(mut node) => {
                *node.value() = rebuilt;
                true
            }
            None => false,
        }
    }

    /// Set (or add) an attribute. Returns `true` when the element changed.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> bool {
        let mut attrs = self.attrs(id);
        match attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, existing)) if existing == value => return false,
            Some((_, existing)) => *existing = value.to_string(),
            None => attrs.push((name.to_string(), value.to_string())),
        }
        self.replace_attrs(id, &attrs)
    }

    /// Remove an attribute. Returns `true` when the element changed.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> bool {
        let mut attrs = self.attrs(id);
        let before = attrs.len();
        attrs.retain(|(k, _)| k != name);
        if attrs.len() == before {
            return false;
        }
        self.replace_attrs(id, &attrs)
    }

    /// Parse `markup` as a fragment and append its nodes as the last children
    /// of `parent`. Returns the number of top-level nodes appended.
    pub fn append_markup(&mut self, parent: NodeId, markup: &str) -> usize {
        let fragment = Html::parse_fragment(markup);
        let source = *fragment.root_element();
        let Some(mut target) = self.html.tree.get_mut(parent) else {
            return 0;
        };

        let mut appended = 0;
        for child in source.children() {
            let mut copied = target.append(child.value().clone());
            copy_children(&mut copied, child);
            appended += 1;
        }
        appended
    }

    /// Set the document title, creating `<title>` inside head when missing.
    pub fn set_title(&mut self, value: &str) {
        if let Some(title) = self.title_element() {
            self.set_text(title, value);
            return;
        }
        if let Some(head) = self.head() {
            let markup = format!("<title>{}</title>", html_escape::encode_text(value));
            self.append_markup(head, &markup);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(doc: &Document, selector: &str) -> NodeId {
        doc.query_first(selector).unwrap().unwrap()
    }

    #[test]
    fn test_set_text_on_leaf_element() {
        let mut doc = Document::parse("<div class=brand>Acme</div>");
        let brand = only(&doc, ".brand");
        doc.set_text(brand, "Nova & Co");
        assert!(doc.serialize().contains("<div class=\"brand\">Nova &amp; Co</div>"));
    }

    #[test]
    fn test_set_text_preserves_icon_structure() {
        let mut doc = Document::parse("<a id=l><i class=\"fa fa-home\"></i> Home</a>");
        let link = only(&doc, "#l");
        doc.set_text(link, "Start");
        let out = doc.serialize();
        assert!(out.contains("<i class=\"fa fa-home\"></i>Start</a>"));
    }

    #[test]
    fn test_set_attr_and_remove_attr() {
        let mut doc =
            Document::parse("<img id=logo src=\"old.png\" srcset=\"old@2x.png 2x\" alt=\"Logo\">");
        let img = only(&doc, "#logo");
        assert!(doc.set_attr(img, "src", "new.png"));
        assert!(doc.remove_attr(img, "srcset"));
        assert!(!doc.remove_attr(img, "srcset"));

        let img = only(&doc, "#logo");
        assert_eq!(doc.attr(img, "src"), Some("new.png"));
        assert_eq!(doc.attr(img, "alt"), Some("Logo"));
        assert_eq!(doc.attr(img, "srcset"), None);
    }

    #[test]
    fn test_set_attr_keeps_children() {
        let mut doc = Document::parse("<a id=x href=\"/a\"><span>Label</span></a>");
        let link = only(&doc, "#x");
        assert!(doc.set_attr(link, "href", "/b"));
        assert!(!doc.set_attr(link, "href", "/b"));

        let link = only(&doc, "#x");
        assert_eq!(doc.attr(link, "href"), Some("/b"));
        assert!(doc.serialize().contains("><span>Label</span></a>"));
    }

    #[test]
    fn test_set_attr_escapes_quotes() {
        let mut doc = Document::parse("<img id=i src=a.png>");
        let img = only(&doc, "#i");
        doc.set_attr(img, "alt", "say \"hi\"");
        assert_eq!(doc.attr(only(&doc, "#i"), "alt"), Some("say \"hi\""));
    }

    #[test]
    fn test_append_markup_style() {
        let mut doc = Document::parse("<head></head><body></body>");
        let head = doc.head().unwrap();
        let appended = doc.append_markup(head, "<style id=\"t\">body > p { color: red; }</style>");
        assert_eq!(appended, 1);
        assert!(
            doc.serialize()
                .contains("<style id=\"t\">body > p { color: red; }</style></head>")
        );
    }

    #[test]
    fn test_remove_elements_with_id() {
        let mut doc = Document::parse(
            "<head><style id=t>a{}</style></head><body><p id=t>x</p><p>y</p></body>",
        );
        assert_eq!(doc.remove_elements_with_id("t"), 2);
        assert_eq!(doc.remove_elements_with_id("t"), 0);
        let out = doc.serialize();
        assert!(!out.contains("id=\"t\""));
        assert!(out.contains("<p>y</p>"));
    }

    #[test]
    fn test_set_title_creates_missing_title() {
        let mut doc = Document::parse("<p>x</p>");
        doc.set_title("NovaCorp");
        assert_eq!(doc.title().as_deref(), Some("NovaCorp"));

        doc.set_title("Other");
        assert_eq!(doc.title().as_deref(), Some("Other"));
        assert_eq!(doc.serialize().matches("<title>").count(), 1);
    }
}
