use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{redirect, Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::CircleCiError;
use crate::models::{Artifact, BuildSummary};

const USER_AGENT: &str = concat!("artifact-redirect/", env!("CARGO_PKG_VERSION"));

/// Minimal client for the CircleCI v1.1 REST API
pub struct CircleCiClient {
    client: Client,
    base_url: String,
}

impl CircleCiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CircleCiError> {
        // Redirects from the API surface as non-200 errors instead of being followed
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(transport)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` on the API host and parse the body as JSON
    ///
    /// Anything other than a 200 is an error carrying the status code and
    /// reason phrase. An empty body is rejected before parsing.
    pub async fn fetch_json<T>(&self, path: &str, token: &str) -> Result<T, CircleCiError>
    where
        T: DeserializeOwned,
    {
        debug!("GET {}{}", self.base_url, path);

        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("circle-token", token)])
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CircleCiError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        if body.is_empty() {
            return Err(CircleCiError::EmptyResponse);
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Build number of the most recent successful build of `project`
    ///
    /// An empty build list yields build number 0.
    pub async fn latest_build_num(&self, project: &str, token: &str) -> Result<u64, CircleCiError> {
        let builds: Vec<BuildSummary> = self
            .fetch_json(&format!("/api/v1.1/project/github/{}", project), token)
            .await?;

        match builds.first() {
            None => Ok(0),
            Some(build) => build
                .previous_successful_build_num()
                .ok_or(CircleCiError::MissingBuildNumber),
        }
    }

    /// Artifact listing of build `build_num` of `project`
    pub async fn artifacts(
        &self,
        project: &str,
        build_num: u64,
        token: &str,
    ) -> Result<Vec<Artifact>, CircleCiError> {
        self.fetch_json(
            &format!("/api/v1.1/project/github/{}/{}/artifacts", project, build_num),
            token,
        )
        .await
    }
}

/// Transport errors carry the request URL, which includes the token
fn transport(e: reqwest::Error) -> CircleCiError {
    CircleCiError::Transport(e.without_url())
}
