pub mod map;
pub mod prompt;
pub mod ranking;
pub mod report;

pub use prompt::AddressCollector;
