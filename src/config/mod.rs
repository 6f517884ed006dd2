//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SorterPaths;
pub use settings::Settings;
