//! Forge abstraction for repository write operations.
//!
//! Trait-based seam over the hosted forge (GitHub today). The bootstrap
//! pipeline only talks to `ForgeClient`, so the label reconciliation loop
//! can be exercised against a mock in tests.

pub mod github;

pub use github::GitHubClient;

use anyhow::Result;

/// A label on the hosted forge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    /// Six hex digits, no '#'.
    pub color: String,
    pub description: String,
}

/// Write access to the hosted forge.
pub trait ForgeClient {
    /// Create a repository under the authenticated user. Returns its URL.
    fn create_repository(&self, name: &str, private: bool) -> Result<String>;

    /// List the names of all labels on a repository.
    fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<String>>;

    /// Delete a label by name.
    fn delete_label(&self, owner: &str, repo: &str, name: &str) -> Result<()>;

    /// Create a label with name, color, and description.
    fn create_label(&self, owner: &str, repo: &str, label: &Label) -> Result<()>;
}
