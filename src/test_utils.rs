use std::sync::Once;

use crate::types::coding::{Code, RangeMarker};
use crate::types::transcript::{CommentNode, PostTree};

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

pub fn comment(id: &str, body: &str, comments: Vec<CommentNode>) -> CommentNode {
    CommentNode {
        id: id.to_string(),
        body: body.to_string(),
        comments,
    }
}

pub fn post(id: &str, title: &str, selftext: &str, comments: Vec<CommentNode>) -> PostTree {
    PostTree {
        id: id.to_string(),
        title: title.to_string(),
        selftext: selftext.to_string(),
        comments,
    }
}

pub fn code(id: &str, text: &str) -> Code {
    Code {
        id: id.to_string(),
        text: text.to_string(),
        label: None,
        range_marker: None,
    }
}

pub fn marker_code(id: &str, text: &str, item_id: &str) -> Code {
    Code {
        range_marker: Some(RangeMarker {
            item_id: item_id.to_string(),
            range: None,
        }),
        ..code(id, text)
    }
}

pub fn ranged_code(id: &str, text: &str, item_id: &str, start: usize, end: usize) -> Code {
    Code {
        range_marker: Some(RangeMarker {
            item_id: item_id.to_string(),
            range: Some([start, end]),
        }),
        ..code(id, text)
    }
}

/// The worked example transcript: one post, one comment, one reply.
pub fn parking_post() -> PostTree {
    post(
        "p1",
        "Parking is terrible here",
        "",
        vec![comment(
            "c1",
            "I agree parking is terrible",
            vec![comment("c2", "Totally unrelated reply", vec![])],
        )],
    )
}
