use tracing::info;

use crate::circleci::{CircleCiClient, CircleCiError};
use crate::models::Artifact;

/// Resolve the download URL of an artifact from the latest successful build
///
/// Fetches the build list, then the artifact listing of that build, and
/// picks an artifact with [`select_artifact`].
pub async fn resolve_artifact_url(
    client: &CircleCiClient,
    project: &str,
    token: &str,
    filename: Option<&str>,
) -> Result<String, CircleCiError> {
    let build_num = client.latest_build_num(project, token).await?;
    let artifacts = client.artifacts(project, build_num, token).await?;

    let artifact = select_artifact(&artifacts, filename)?;
    info!(
        "Resolved artifact {} from {} build {}",
        artifact.path, project, build_num
    );

    Ok(artifact.url.clone())
}

/// Pick the first artifact whose path contains `filename`, else the first artifact
pub fn select_artifact<'a>(
    artifacts: &'a [Artifact],
    filename: Option<&str>,
) -> Result<&'a Artifact, CircleCiError> {
    let first = artifacts.first().ok_or(CircleCiError::NoArtifacts)?;

    let matched = filename.and_then(|name| {
        artifacts
            .iter()
            .find(|artifact| artifact.path.contains(name))
    });

    Ok(matched.unwrap_or(first))
}
