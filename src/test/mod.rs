// Test utilities shared by in-crate unit tests
pub mod utils;
