pub mod resolver;
pub mod transcript;
pub mod worker;
