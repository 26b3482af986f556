pub mod coordinator;
pub mod registry;
