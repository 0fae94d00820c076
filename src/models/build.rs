use serde::Deserialize;

/// One entry of the project build list
///
/// Only the pointer to the previous successful build is read; every other
/// field in the upstream payload is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BuildSummary {
    #[serde(default)]
    pub previous_successful_build: Option<PreviousBuild>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PreviousBuild {
    #[serde(default)]
    pub build_num: Option<u64>,
}

impl BuildSummary {
    /// Build number of the last successful build, if the provider reported one
    pub fn previous_successful_build_num(&self) -> Option<u64> {
        self.previous_successful_build
            .as_ref()
            .and_then(|build| build.build_num)
    }
}
