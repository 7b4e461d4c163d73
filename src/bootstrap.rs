//! The scaffold-and-publish pipeline.
//!
//! Strictly sequential, run once per invocation: create the remote
//! repository, initialize and scaffold the working tree, commit and push,
//! then reconcile the remote label set. Everything up to and including the
//! push is fatal on error; label reconciliation is best-effort per item.

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use crate::config::Config;
use crate::convention;
use crate::forge::ForgeClient;
use crate::{git, scaffold};

/// What was attempted for a single label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAction {
    Deleted,
    Created,
}

/// Per-label outcome of the reconcile loop.
#[derive(Debug)]
pub struct LabelOutcome {
    pub name: String,
    pub action: LabelAction,
    pub result: Result<()>,
}

/// Run the full bootstrap sequence in the given working directory.
pub fn run(config: &Config, forge: &dyn ForgeClient, root: &Path) -> Result<()> {
    which::which("git").context("git binary not found on PATH")?;

    println!(
        "{}",
        format!("🌱 Bootstrapping {}/{}", config.owner, config.repo).bold()
    );

    // 1. Remote first: a name collision must abort before any local writes.
    let url = forge.create_repository(&config.repo, false)?;
    println!("   {} Repository created at {}", "✓".green().bold(), url);

    // 2-3. Local repository and scaffold files.
    git::init(root)?;
    scaffold::write_all(root)?;
    println!("   {} Working tree scaffolded", "✓".green().bold());

    // 4. Initial commit and push.
    let message = convention::commit_message(&config.commit_type)?;
    git::add_all(root)?;
    git::commit(root, &message)?;
    git::ensure_remote(root, "origin", &config.remote_url())?;
    git::push(root, "origin", &config.branch)?;
    println!(
        "   {} Pushed {} to {}",
        "✓".green().bold(),
        config.branch,
        config.remote_url()
    );

    // 5. Replace the remote label set with the commit-convention taxonomy.
    let outcomes = reconcile_labels(forge, &config.owner, &config.repo)?;
    report_outcomes(&outcomes);

    Ok(())
}

/// Delete every existing label, then create the fixed label set.
///
/// A failed item is recorded and logged but never stops the loop; the
/// returned outcomes cover every attempted deletion and creation in order.
pub fn reconcile_labels(
    forge: &dyn ForgeClient,
    owner: &str,
    repo: &str,
) -> Result<Vec<LabelOutcome>> {
    let mut outcomes = Vec::new();

    let existing = forge
        .list_labels(owner, repo)
        .context("Failed to list existing labels")?;
    for name in existing {
        let result = forge.delete_label(owner, repo, &name);
        log_outcome(&name, LabelAction::Deleted, &result);
        outcomes.push(LabelOutcome {
            name,
            action: LabelAction::Deleted,
            result,
        });
    }

    for label in convention::label_set()? {
        let result = forge.create_label(owner, repo, &label);
        log_outcome(&label.name, LabelAction::Created, &result);
        outcomes.push(LabelOutcome {
            name: label.name,
            action: LabelAction::Created,
            result,
        });
    }

    Ok(outcomes)
}

fn log_outcome(name: &str, action: LabelAction, result: &Result<()>) {
    let verb = match action {
        LabelAction::Deleted => "deleted",
        LabelAction::Created => "created",
    };
    match result {
        Ok(()) => println!("   {} Label '{}' {}", "✓".green().bold(), name, verb),
        Err(e) => println!("   {} Label '{}' not {}: {}", "✗".red().bold(), name, verb, e),
    }
}

fn report_outcomes(outcomes: &[LabelOutcome]) {
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed == 0 {
        println!("\n{}", "✅ Label set installed".green().bold());
    } else {
        println!(
            "\n{} {} of {} label operations failed",
            "⚠️".yellow(),
            failed,
            outcomes.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::forge::Label;
    use anyhow::{anyhow, bail};
    use std::sync::Mutex;

    /// Records every forge call; fails configured operations.
    struct MockForge {
        existing: Vec<String>,
        fail_delete_of: Option<String>,
        fail_create_repo: bool,
        calls: Mutex<Vec<String>>,
    }

    impl MockForge {
        fn new(existing: &[&str]) -> Self {
            Self {
                existing: existing.iter().map(|s| s.to_string()).collect(),
                fail_delete_of: None,
                fail_create_repo: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl ForgeClient for MockForge {
        fn create_repository(&self, name: &str, _private: bool) -> Result<String> {
            self.record(format!("create_repo {}", name));
            if self.fail_create_repo {
                bail!("name already exists on this account");
            }
            Ok(format!("https://github.com/mock/{}", name))
        }

        fn list_labels(&self, _owner: &str, _repo: &str) -> Result<Vec<String>> {
            self.record("list_labels".to_string());
            Ok(self.existing.clone())
        }

        fn delete_label(&self, _owner: &str, _repo: &str, name: &str) -> Result<()> {
            self.record(format!("delete {}", name));
            if self.fail_delete_of.as_deref() == Some(name) {
                return Err(anyhow!("404 label not found"));
            }
            Ok(())
        }

        fn create_label(&self, _owner: &str, _repo: &str, label: &Label) -> Result<()> {
            self.record(format!("create {}", label.name));
            Ok(())
        }
    }

    #[test]
    fn test_reconcile_replaces_existing_labels() {
        let forge = MockForge::new(&["bug", "enhancement"]);
        let outcomes = reconcile_labels(&forge, "alice", "demo").unwrap();

        // 2 deletions + 10 creations, all succeeding.
        assert_eq!(outcomes.len(), 2 + convention::COMMIT_TYPES.len());
        assert!(outcomes.iter().all(|o| o.result.is_ok()));

        let calls = forge.calls();
        assert_eq!(calls[0], "list_labels");
        assert_eq!(calls[1], "delete bug");
        assert_eq!(calls[2], "delete enhancement");
        assert_eq!(calls[3], "create Feat");
    }

    #[test]
    fn test_reconcile_continues_past_failed_deletion() {
        let mut forge = MockForge::new(&["bug", "enhancement", "wontfix"]);
        forge.fail_delete_of = Some("enhancement".to_string());

        let outcomes = reconcile_labels(&forge, "alice", "demo").unwrap();

        // Every deletion and every creation was still attempted.
        let calls = forge.calls();
        assert!(calls.contains(&"delete wontfix".to_string()));
        assert_eq!(
            calls.iter().filter(|c| c.starts_with("create ")).count(),
            convention::COMMIT_TYPES.len()
        );

        let failed: Vec<&LabelOutcome> =
            outcomes.iter().filter(|o| o.result.is_err()).collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].name, "enhancement");
        assert_eq!(failed[0].action, LabelAction::Deleted);
    }

    #[test]
    fn test_failed_remote_creation_short_circuits() {
        let mut forge = MockForge::new(&[]);
        forge.fail_create_repo = true;

        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            owner: "alice".to_string(),
            repo: "demo".to_string(),
            branch: config::DEFAULT_BRANCH.to_string(),
            commit_type: config::INITIAL_COMMIT_TYPE.to_string(),
            token: String::new(),
        };

        assert!(run(&config, &forge, dir.path()).is_err());

        // No local git metadata or scaffold files after the fatal error.
        assert!(!dir.path().join(".git").exists());
        assert!(!dir.path().join(scaffold::GITIGNORE_PATH).exists());
        assert!(!forge.calls().contains(&"list_labels".to_string()));
    }
}
