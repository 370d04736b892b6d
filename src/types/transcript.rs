//! Transcript contracts: the post+comment tree as delivered by the shell
//! and the flattened element model the resolver works over.
//!
//! Schema boundary:
//! - `PostTree` / `CommentNode` mirror the renderer's transcript payload.
//! - `TranscriptElement` is the engine's addressable unit; its order is
//!   the index space position markers refer to.

use serde::{Deserialize, Serialize};

/// One comment node. Replies nest to unbounded depth; each node owns its
/// own `comments` list, so the tree is acyclic by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentNode {
    pub id: String,
    pub body: String,
    /// Nested replies. A missing list means no children, not an error.
    #[serde(default)]
    pub comments: Vec<CommentNode>,
}

/// Transcript root: one post and its comment tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostTree {
    pub id: String,
    pub title: String,
    pub selftext: String,
    #[serde(default)]
    pub comments: Vec<CommentNode>,
}

/// Where a flattened element came from.
///
/// `Title` and `Selftext` occur exactly once per post; `Comment` once per
/// comment node regardless of depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Title,
    Selftext,
    Comment,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementType::Title => write!(f, "title"),
            ElementType::Selftext => write!(f, "selftext"),
            ElementType::Comment => write!(f, "comment"),
        }
    }
}

/// One addressable unit of source text in flatten order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptElement {
    /// Id of the owning post or comment.
    pub source_id: String,
    /// Display text: whitespace runs collapsed to single spaces, trimmed.
    /// Case and punctuation are kept: this text is shown to the user and
    /// also feeds exact-substring matching.
    pub text: String,
    pub element_type: ElementType,
    /// Immediate enclosing comment (or the post for top-level comments);
    /// `None` for title and selftext.
    pub parent_id: Option<String>,
}
