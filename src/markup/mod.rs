//! Markup model over a parsed HTML document.
//!
//! The document is a `scraper::Html`, whose tree is an `ego_tree` arena:
//! nodes are addressed by `NodeId` handles and parent/child relationships are
//! index links. Mutation always goes through handles collected beforehand, so
//! no traversal is ever invalidated mid-walk.

pub mod document;
pub mod mutation;
pub mod selectors;
pub mod text_nodes;

pub use document::Document;
pub use ego_tree::NodeId;
pub use selectors::{parse_selector, parse_selector_list};
pub use text_nodes::{TextNodes, is_raw_text_element};
