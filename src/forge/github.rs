//! GitHub REST implementation of the forge client.
//!
//! Uses a blocking reqwest client authenticated with a bearer token. Every
//! non-2xx response surfaces as an error carrying the status and response
//! body, so a name collision on repository creation reads back verbatim.

use anyhow::{anyhow, bail, Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::forge::{ForgeClient, Label};

const API_ROOT: &str = "https://api.github.com";
const ACCEPT: &str = "application/vnd.github+json";

#[derive(Serialize)]
struct CreateRepoRequest<'a> {
    name: &'a str,
    private: bool,
}

#[derive(Deserialize)]
struct RepoResponse {
    html_url: String,
}

#[derive(Deserialize)]
struct LabelResponse {
    name: String,
}

/// GitHub REST client over blocking HTTP.
pub struct GitHubClient {
    http: Client,
    token: String,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent("sprout-cli")
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            token: token.to_string(),
        })
    }

    /// URL for a repository's labels collection, or a single label when
    /// `name` is given (percent-encoded as a path segment).
    fn labels_url(&self, owner: &str, repo: &str, name: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(API_ROOT).context("Failed to parse GitHub API root")?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow!("GitHub API root cannot carry path segments"))?;
            segments.extend(["repos", owner, repo, "labels"]);
            if let Some(name) = name {
                segments.push(name);
            }
        }
        Ok(url)
    }

    fn check(&self, response: Response, action: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        bail!("{} failed ({}): {}", action, status, body);
    }
}

impl ForgeClient for GitHubClient {
    fn create_repository(&self, name: &str, private: bool) -> Result<String> {
        let response = self
            .http
            .post(format!("{}/user/repos", API_ROOT))
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT)
            .json(&CreateRepoRequest { name, private })
            .send()
            .context("Failed to reach GitHub API")?;

        let repo: RepoResponse = self
            .check(response, "Repository creation")?
            .json()
            .context("Failed to parse GitHub repository JSON")?;

        Ok(repo.html_url)
    }

    fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<String>> {
        let mut url = self.labels_url(owner, repo, None)?;
        url.query_pairs_mut().append_pair("per_page", "100");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT)
            .send()
            .context("Failed to reach GitHub API")?;

        let labels: Vec<LabelResponse> = self
            .check(response, "Label listing")?
            .json()
            .context("Failed to parse GitHub labels JSON")?;

        Ok(labels.into_iter().map(|l| l.name).collect())
    }

    fn delete_label(&self, owner: &str, repo: &str, name: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.labels_url(owner, repo, Some(name))?)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT)
            .send()
            .context("Failed to reach GitHub API")?;

        self.check(response, "Label deletion")?;
        Ok(())
    }

    fn create_label(&self, owner: &str, repo: &str, label: &Label) -> Result<()> {
        let body = serde_json::json!({
            "name": label.name,
            "color": label.color,
            "description": label.description,
        });

        let response = self
            .http
            .post(self.labels_url(owner, repo, None)?)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT)
            .json(&body)
            .send()
            .context("Failed to reach GitHub API")?;

        self.check(response, "Label creation")?;
        Ok(())
    }
}
