pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

/// Flat-transcript index of the post title. Position markers count from
/// here: title, selftext, then comments in pre-order.
pub const TITLE_INDEX: usize = 0;
/// Flat-transcript index of the post selftext.
pub const SELFTEXT_INDEX: usize = 1;
/// Flat-transcript index of the first comment.
pub const FIRST_COMMENT_INDEX: usize = 2;
