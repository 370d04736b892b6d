pub mod matcher;
pub mod scoring;
pub mod segmenter;
