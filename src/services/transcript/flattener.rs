//! Transcript flattening: post tree → ordered element sequence.

use crate::types::transcript::{CommentNode, ElementType, PostTree, TranscriptElement};

use super::normalizer;

/// Flatten a post into its addressable elements.
///
/// Order: title, selftext, then every comment in pre-order depth-first
/// traversal (a comment comes immediately after its parent and before any
/// sibling subtree). Position markers index elements by their place in
/// exactly this sequence (0 = title, 1 = selftext, 2+ = comments), so the
/// order is load-bearing.
pub fn flatten_post(post: &PostTree) -> Vec<TranscriptElement> {
    let mut elements = Vec::with_capacity(2 + count_comments(&post.comments));

    elements.push(TranscriptElement {
        source_id: post.id.clone(),
        text: normalizer::display_text(&post.title),
        element_type: ElementType::Title,
        parent_id: None,
    });
    elements.push(TranscriptElement {
        source_id: post.id.clone(),
        text: normalizer::display_text(&post.selftext),
        element_type: ElementType::Selftext,
        parent_id: None,
    });

    for comment in &post.comments {
        push_comment_subtree(comment, &post.id, &mut elements);
    }

    log::debug!(
        "Flattened post {} into {} elements",
        post.id,
        elements.len()
    );
    elements
}

/// Emit `comment` and then its whole subtree, depth first.
fn push_comment_subtree(
    comment: &CommentNode,
    parent_id: &str,
    elements: &mut Vec<TranscriptElement>,
) {
    elements.push(TranscriptElement {
        source_id: comment.id.clone(),
        text: normalizer::display_text(&comment.body),
        element_type: ElementType::Comment,
        parent_id: Some(parent_id.to_string()),
    });

    for child in &comment.comments {
        push_comment_subtree(child, &comment.id, elements);
    }
}

fn count_comments(comments: &[CommentNode]) -> usize {
    comments
        .iter()
        .map(|c| 1 + count_comments(&c.comments))
        .sum()
}

#[cfg(test)]
#[path = "tests/flattener_tests.rs"]
mod tests;
