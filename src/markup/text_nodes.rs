//! Lazy text-node traversal.

use ego_tree::{NodeId, NodeRef};
use scraper::Node;

/// Elements whose text content is never treated as rendered copy
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "code", "pre"];

/// Whether text inside an element with this tag name is skipped by the walker
#[inline]
pub fn is_raw_text_element(name: &str) -> bool {
    RAW_TEXT_ELEMENTS.iter().any(|raw| raw.eq_ignore_ascii_case(name))
}

/// Depth-first, document-order iterator over text node handles below a root.
///
/// Subtrees rooted at `script`, `style`, `textarea`, `code` and `pre` are not
/// entered. The iterator is finite and cheap to clone; calling
/// `Document::text_nodes` again restarts the walk from the root.
#[derive(Clone)]
pub struct TextNodes<'a> {
    stack: Vec<NodeRef<'a, Node>>,
}

impl<'a> TextNodes<'a> {
    pub(crate) fn new(root: Option<NodeRef<'a, Node>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl Iterator for TextNodes<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(node) = self.stack.pop() {
            match node.value() {
                Node::Text(_) => return Some(node.id()),
                Node::Element(element) if is_raw_text_element(element.name()) => {}
                _ => {
                    let children: Vec<_> = node.children().collect();
                    self.stack.extend(children.into_iter().rev());
                }
            }
        }
        None
    }
}
