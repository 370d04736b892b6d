pub mod coding;
pub mod errors;
pub mod protocol;
pub mod transcript;
