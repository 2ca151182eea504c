pub mod persistence;
pub mod run_lifecycle;
