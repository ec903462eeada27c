/// Environment configuration
pub mod environment;

pub use environment::{ApiEnvironment, PAGE_SIZE};
