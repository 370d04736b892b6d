pub mod flattener;
pub mod normalizer;
pub mod quote_id;
