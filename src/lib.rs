pub mod bootstrap;
pub mod config;
pub mod convention;
pub mod forge;
pub mod git;
pub mod scaffold;

// Re-export commonly used types
pub use config::Config;
pub use forge::{ForgeClient, GitHubClient, Label};
