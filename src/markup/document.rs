//! Parsed document: parsing, queries, text extraction and serialization.

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Node, Selector};

use crate::errors::RebrandResult;
use crate::utils::collapse_whitespace;

use super::selectors::{
    BODY_SELECTOR, HEAD_SELECTOR, INLINE_SCRIPT_SELECTOR, TITLE_SELECTOR, parse_selector,
};
use super::text_nodes::TextNodes;

/// Doctype emitted in front of every serialized document
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// A parsed HTML document addressed by node handles
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) html: Html,
}

impl Document {
    /// Parse a full document.
    ///
    /// Never fails: html5ever applies the standard error recovery, so
    /// malformed or empty input still yields an `html`/`head`/`body` skeleton.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// The underlying scraper document
    #[must_use]
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Element handle for a node, if it is an element
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(id).and_then(ElementRef::wrap)
    }

    /// All elements matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns `RebrandError::InvalidSelector` when the selector does not parse.
    pub fn query_all(&self, selector: &str) -> RebrandResult<Vec<NodeId>> {
        let selector = parse_selector(selector)?;
        Ok(self.select(&selector))
    }

    /// First element matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns `RebrandError::InvalidSelector` when the selector does not parse.
    pub fn query_first(&self, selector: &str) -> RebrandResult<Option<NodeId>> {
        let selector = parse_selector(selector)?;
        Ok(self.select_first(&selector))
    }

    /// All elements matching an already parsed selector, in document order
    #[must_use]
    pub fn select(&self, selector: &Selector) -> Vec<NodeId> {
        self.html.select(selector).map(|el| el.id()).collect()
    }

    #[must_use]
    pub fn select_first(&self, selector: &Selector) -> Option<NodeId> {
        self.html.select(selector).next().map(|el| el.id())
    }

    /// Matches of `selector` strictly inside the element `scope`
    #[must_use]
    pub fn select_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.element(scope)
            .map(|el| el.select(selector).map(|m| m.id()).collect())
            .unwrap_or_default()
    }

    /// Concatenated descendant text, trimmed
    #[must_use]
    pub fn text(&self, id: NodeId) -> String {
        match self.html.tree.get(id) {
            Some(node) => match node.value() {
                Node::Text(text) => text.trim().to_string(),
                _ => ElementRef::wrap(node)
                    .map(|el| el.text().collect::<String>().trim().to_string())
                    .unwrap_or_default(),
            },
            None => String::new(),
        }
    }

    /// Descendant text with every whitespace run collapsed to one space
    #[must_use]
    pub fn flat_text(&self, id: NodeId) -> String {
        collapse_whitespace(&self.text(id))
    }

    /// Value of a text node, `None` for any other node kind
    #[must_use]
    pub fn text_value(&self, id: NodeId) -> Option<&str> {
        self.html
            .tree
            .get(id)
            .and_then(|node| node.value().as_text())
            .map(|text| &**text)
    }

    /// Lowercase tag name of an element node
    #[must_use]
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.html
            .tree
            .get(id)
            .and_then(|node| node.value().as_element())
            .map(|el| el.name())
    }

    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.html
            .tree
            .get(id)
            .and_then(|node| node.value().as_element())
            .and_then(|el| el.attr(name))
    }

    /// Elements whose `id` attribute equals `value`, in document order
    #[must_use]
    pub fn elements_with_id(&self, value: &str) -> Vec<NodeId> {
        self.html
            .tree
            .root()
            .descendants()
            .filter(|node| {
                node.value()
                    .as_element()
                    .is_some_and(|el| el.id() == Some(value))
            })
            .map(|node| node.id())
            .collect()
    }

    /// Whether the node has at least one element child
    #[must_use]
    pub fn has_element_children(&self, id: NodeId) -> bool {
        self.html
            .tree
            .get(id)
            .is_some_and(|node| node.children().any(|child| child.value().is_element()))
    }

    /// Elements under `scope` (inclusive) that have no element children
    #[must_use]
    pub fn leaf_elements(&self, scope: NodeId) -> Vec<NodeId> {
        let Some(root) = self.html.tree.get(scope) else {
            return Vec::new();
        };
        root.descendants()
            .filter(|node| node.value().is_element())
            .filter(|node| !node.children().any(|child| child.value().is_element()))
            .map(|node| node.id())
            .collect()
    }

    #[must_use]
    pub fn head(&self) -> Option<NodeId> {
        self.select_first(&HEAD_SELECTOR)
    }

    #[must_use]
    pub fn body(&self) -> Option<NodeId> {
        self.select_first(&BODY_SELECTOR)
    }

    /// Handle of the `<title>` element inside head
    #[must_use]
    pub fn title_element(&self) -> Option<NodeId> {
        self.select_first(&TITLE_SELECTOR)
    }

    /// Document title text, trimmed; `None` when absent or blank
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.title_element()
            .map(|id| self.text(id))
            .filter(|title| !title.is_empty())
    }

    /// `<script>` elements without a `src` attribute, in document order
    #[must_use]
    pub fn inline_scripts(&self) -> Vec<NodeId> {
        self.select(&INLINE_SCRIPT_SELECTOR)
    }

    /// Direct text children of a node; for `<script>`/`<style>` this is the
    /// raw source text
    #[must_use]
    pub fn child_text_nodes(&self, id: NodeId) -> Vec<NodeId> {
        self.html
            .tree
            .get(id)
            .map(|node| {
                node.children()
                    .filter(|child| child.value().is_text())
                    .map(|child| child.id())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Lazy walk over the text nodes below `root`, skipping raw-text subtrees
    #[must_use]
    pub fn text_nodes(&self, root: NodeId) -> TextNodes<'_> {
        TextNodes::new(self.html.tree.get(root))
    }

    /// Whole-document text (body walk), joined with single spaces
    #[must_use]
    pub fn body_text(&self) -> String {
        let Some(body) = self.body() else {
            return String::new();
        };
        let joined = self
            .text_nodes(body)
            .filter_map(|id| self.text_value(id))
            .collect::<Vec<_>>()
            .join(" ");
        collapse_whitespace(&joined)
    }

    /// Serialize back to markup, always led by `<!DOCTYPE html>`.
    ///
    /// Any doctype in the source is dropped in favour of the standard one;
    /// top-level comments are kept.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut output = String::with_capacity(DOCTYPE.len() + 1);
        output.push_str(DOCTYPE);
        output.push('\n');

        for child in self.html.tree.root().children() {
            match child.value() {
                Node::Element(_) => {
                    if let Some(element) = ElementRef::wrap(child) {
                        output.push_str(&element.html());
                    }
                }
                Node::Comment(comment) => {
                    output.push_str("<!--");
                    output.push_str(comment);
                    output.push_str("-->");
                }
                Node::Text(text) => {
                    output.push_str(&html_escape::encode_text(&**text));
                }
                // Doctype is replaced; processing instructions have no HTML form
                _ => {}
            }
        }

        output
    }
}
