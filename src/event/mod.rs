pub mod import;
pub mod scoring;
pub mod stats;
pub mod store;
pub mod types;
