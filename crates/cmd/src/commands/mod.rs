pub mod describe;
pub mod query;
