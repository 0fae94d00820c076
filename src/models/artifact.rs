use std::collections::HashMap;

use serde::Deserialize;

/// A file produced by a build, as listed by the artifacts endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artifact {
    pub path: String,
    pub url: String,
}

/// Query parameters accepted by the redirect endpoint
#[derive(Debug, Clone, Default)]
pub struct RedirectParams {
    pub project: Option<String>,
    pub token: Option<String>,
    pub filename: Option<String>,
}

/// Built from the raw query map, so repeated keys never reject the request
impl From<HashMap<String, String>> for RedirectParams {
    fn from(mut query: HashMap<String, String>) -> Self {
        Self {
            project: query.remove("project"),
            token: query.remove("token"),
            filename: query.remove("filename"),
        }
    }
}

impl RedirectParams {
    /// `project`, treating an empty value as missing
    pub fn project(&self) -> Option<&str> {
        non_empty(&self.project)
    }

    /// `token`, treating an empty value as missing
    pub fn token(&self) -> Option<&str> {
        non_empty(&self.token)
    }

    /// `filename` filter, treating an empty value as no filter
    pub fn filename(&self) -> Option<&str> {
        non_empty(&self.filename)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_are_missing() {
        let params = RedirectParams {
            project: Some(String::new()),
            token: Some("tok".to_string()),
            filename: Some(String::new()),
        };

        assert_eq!(params.project(), None);
        assert_eq!(params.token(), Some("tok"));
        assert_eq!(params.filename(), None);
    }

    #[test]
    fn test_from_query_map() {
        let query: HashMap<String, String> = [
            ("project", "org/repo"),
            ("token", "tok"),
            ("branch", "main"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let params = RedirectParams::from(query);
        assert_eq!(params.project(), Some("org/repo"));
        assert_eq!(params.token(), Some("tok"));
        assert_eq!(params.filename(), None);
    }

    #[test]
    fn test_artifact_ignores_extra_fields() {
        let artifact: Artifact = serde_json::from_str(
            r#"{"path": "a/b.zip", "pretty_path": "a/b.zip", "node_index": 0, "url": "U1"}"#,
        )
        .unwrap();

        assert_eq!(artifact.path, "a/b.zip");
        assert_eq!(artifact.url, "U1");
    }
}
