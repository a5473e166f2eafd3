//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::LedgerboardPaths;
pub use settings::Settings;
