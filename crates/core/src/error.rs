//! Error types for fhel-core

use std::path::PathBuf;

use thiserror::Error;

/// A required input was not supplied by the invoking environment.
///
/// These are fatal: the pipeline aborts immediately, there is nothing to
/// retry without human intervention.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("recipe folder not set")]
  MissingRoot,

  #[error("version file not found: {0}")]
  MissingVersionFile(PathBuf),

  #[error("source folder not set")]
  MissingSourceRoot,

  #[error("build folder not set")]
  MissingBuildRoot,

  #[error("package folder not set")]
  MissingPackageRoot,
}

/// Errors that can occur while driving a packaging recipe
#[derive(Debug, Error)]
pub enum RecipeError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error("Platform error: {0}")]
  Platform(#[from] fhel_platform::PlatformError),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("cmake {stage} failed with exit code {code:?}")]
  CmakeFailed { stage: String, code: Option<i32> },
}
