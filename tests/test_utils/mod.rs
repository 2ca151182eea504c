pub mod builders;
pub mod fixtures;

// Re-export commonly used items
pub use builders::EventBuilder;
pub use fixtures::TestWorkbench;
