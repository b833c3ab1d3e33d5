//! Blocking client for GitLab's resource label events API.

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use label_hours::{LabelAction, LabelEvent};
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

const PER_PAGE: &str = "100";
const NEXT_PAGE_HEADER: &str = "x-next-page";

#[derive(Debug, Deserialize)]
struct ResourceLabelEvent {
    created_at: DateTime<Utc>,
    /// `null` once the label itself has been deleted.
    label: Option<LabelRef>,
    action: LabelAction,
}

#[derive(Debug, Deserialize)]
struct LabelRef {
    name: String,
}

impl ResourceLabelEvent {
    fn into_label_event(self) -> Option<LabelEvent> {
        let label = self.label?;
        Some(LabelEvent::new(self.created_at, label.name, self.action))
    }
}

pub struct GitLabClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl GitLabClient {
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid GitLab URL '{base_url}'"))?;
        let http = Client::builder()
            .user_agent(concat!("label-hours/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            http,
            base_url,
            token: token.into(),
        })
    }

    /// `project` is a numeric id or a `namespace/project` path.
    fn events_url(&self, project: &str, issue_iid: u64, page: u32) -> Result<Url> {
        let iid = issue_iid.to_string();
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("GitLab URL '{}' cannot be a base", self.base_url))?
            .pop_if_empty()
            .extend(["api", "v4", "projects"])
            .push(project)
            .extend(["issues", iid.as_str(), "resource_label_events"]);
        url.query_pairs_mut()
            .append_pair("per_page", PER_PAGE)
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    /// Every label event on an issue, following pagination to the end.
    ///
    /// Events whose label has since been deleted are dropped.
    pub fn label_events(&self, project: &str, issue_iid: u64) -> Result<Vec<LabelEvent>> {
        let mut events = Vec::new();
        let mut page = 1;

        loop {
            let url = self.events_url(project, issue_iid, page)?;
            debug!(%url, "fetching label events");

            let response = self
                .http
                .get(url)
                .header("PRIVATE-TOKEN", &self.token)
                .send()
                .context("GitLab request failed")?;

            let status = response.status();
            if !status.is_success() {
                bail!("GitLab API error: HTTP {status} for issue #{issue_iid} in project {project}");
            }

            let next_page = response
                .headers()
                .get(NEXT_PAGE_HEADER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u32>().ok());

            let batch: Vec<ResourceLabelEvent> = response
                .json()
                .context("decoding GitLab label events")?;
            events.extend(batch.into_iter().filter_map(ResourceLabelEvent::into_label_event));

            match next_page {
                Some(next) if next > page => page = next,
                _ => break,
            }
        }

        debug!(count = events.len(), pages = page, "fetched label events");
        Ok(events)
    }
}
