pub mod artifact;
pub mod build;

pub use artifact::{Artifact, RedirectParams};
pub use build::BuildSummary;
