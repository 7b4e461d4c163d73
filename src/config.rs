//! Run configuration: fixed repository identity plus the API token.
//!
//! There is no config file and no CLI flags; a run is fully determined by
//! these constants and the token environment variable.

use std::env;

/// GitHub account that owns the new repository.
pub const OWNER: &str = "junsyun22";

/// Name of the repository to create.
pub const REPO: &str = "chatting-server";

/// Branch pushed on the initial publish.
pub const DEFAULT_BRANCH: &str = "main";

/// Commit type used for the initial commit message.
pub const INITIAL_COMMIT_TYPE: &str = "Feat";

/// Environment variable holding the GitHub API token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone)]
pub struct Config {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub commit_type: String,
    pub token: String,
}

impl Config {
    /// Build the configuration for a run.
    ///
    /// A missing token is not an error here; it surfaces as an
    /// authentication failure on the first API call.
    pub fn from_env() -> Self {
        Self {
            owner: OWNER.to_string(),
            repo: REPO.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            commit_type: INITIAL_COMMIT_TYPE.to_string(),
            token: env::var(TOKEN_ENV).unwrap_or_default(),
        }
    }

    /// HTTPS push URL for the configured repository.
    pub fn remote_url(&self) -> String {
        format!("https://github.com/{}/{}.git", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(owner: &str, repo: &str) -> Config {
        Config {
            owner: owner.to_string(),
            repo: repo.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            commit_type: INITIAL_COMMIT_TYPE.to_string(),
            token: String::new(),
        }
    }

    #[test]
    fn test_remote_url() {
        let config = config("alice", "demo");
        assert_eq!(config.remote_url(), "https://github.com/alice/demo.git");
    }

    #[test]
    fn test_remote_url_from_constants() {
        let config = Config::from_env();
        assert_eq!(
            config.remote_url(),
            format!("https://github.com/{}/{}.git", OWNER, REPO)
        );
    }
}
