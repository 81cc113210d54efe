//! The packaging recipe pipeline.
//!
//! A recipe is a linear, non-branching pipeline: resolve version →
//! generate toolchain → compute platform-conditional build args → invoke
//! the external build → copy artifacts → optionally export CI metadata.
//! Every stage is terminal on failure; nothing is retried or rolled back.

use std::path::PathBuf;

use fhel_platform::Target;
use serde::Serialize;
use tracing::info;

use crate::error::ConfigError;
use crate::{args, ci, cmake, package, toolchain, version, Result};

/// Recognized recipe options
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeOptions {
  /// Export the package path to the CI step-output file
  pub ci: bool,
}

/// Folder layout supplied by the invoking environment
///
/// Roots the environment did not supply stay `None` and surface as
/// `ConfigError`s from the stages that need them.
#[derive(Debug, Clone, Default)]
pub struct Folders {
  /// Recipe root holding the version marker
  pub recipe: Option<PathBuf>,
  /// Source tree of the wrapped library
  pub source: Option<PathBuf>,
  /// Out-of-source build folder; toolchain file and artifacts land here
  pub build: Option<PathBuf>,
  /// Distribution output folder
  pub package: Option<PathBuf>,
}

/// Outcome of a completed pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
  pub version: String,
  pub label: String,
  pub artifacts: usize,
  pub package_folder: PathBuf,
}

/// A packaging recipe for the libfhel shared library
#[derive(Debug, Clone)]
pub struct Recipe {
  pub target: Target,
  pub options: RecipeOptions,
  pub folders: Folders,
}

impl Recipe {
  /// Resolve the packaged version from the recipe folder's marker file
  pub fn version(&self) -> Result<String> {
    version::resolve_version(self.folders.recipe.as_deref())
  }

  /// Run the full pipeline and return a summary of what was produced
  pub fn run(&self) -> Result<Summary> {
    let version = self.version()?;
    let label = self.target.release_label()?;
    info!(version = %version, target = %self.target, label = %label, "packaging libfhel");

    let build_dir = self.folders.build.as_deref().ok_or(ConfigError::MissingBuildRoot)?;
    std::fs::create_dir_all(build_dir)?;
    let toolchain_file = toolchain::generate_toolchain(&self.target, build_dir)?;

    let source_dir = self.folders.source.as_deref().ok_or(ConfigError::MissingSourceRoot)?;
    let extra = args::compute_build_args(&self.target);
    cmake::configure(source_dir, build_dir, &toolchain_file, &extra)?;
    cmake::build(build_dir)?;

    let package_dir = self
      .folders
      .package
      .as_deref()
      .ok_or(ConfigError::MissingPackageRoot)?;
    let artifacts =
      package::copy_artifacts(Some(build_dir), Some(package_dir), package::ARTIFACT_PATTERN)?;

    ci::export_ci_metadata(package_dir, self.options.ci);

    Ok(Summary {
      version,
      label: label.to_string(),
      artifacts,
      package_folder: package_dir.to_path_buf(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::RecipeError;
  use fhel_platform::{Arch, BuildType, Compiler, Os};
  use tempfile::TempDir;

  fn recipe(folders: Folders) -> Recipe {
    Recipe {
      target: Target::new(Os::Linux, Arch::X86_64, Compiler::Gcc, BuildType::Release),
      options: RecipeOptions::default(),
      folders,
    }
  }

  #[test]
  fn version_requires_recipe_folder() {
    let err = recipe(Folders::default()).version().unwrap_err();
    assert!(matches!(err, RecipeError::Config(ConfigError::MissingRoot)));
  }

  #[test]
  fn run_fails_before_build_without_version_marker() {
    let temp = TempDir::new().unwrap();
    let err = recipe(Folders {
      recipe: Some(temp.path().to_path_buf()),
      source: Some(temp.path().to_path_buf()),
      build: Some(temp.path().join("build")),
      package: Some(temp.path().join("package")),
    })
    .run()
    .unwrap_err();

    assert!(matches!(
      err,
      RecipeError::Config(ConfigError::MissingVersionFile(_))
    ));
    // The pipeline aborted before any stage with side effects ran
    assert!(!temp.path().join("build").exists());
  }

  #[test]
  fn run_fails_on_unsupported_target_before_building() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("dart")).unwrap();
    std::fs::write(temp.path().join(crate::version::VERSION_FILE), "0.0.1\n").unwrap();

    let mut r = recipe(Folders {
      recipe: Some(temp.path().to_path_buf()),
      source: Some(temp.path().to_path_buf()),
      build: Some(temp.path().join("build")),
      package: Some(temp.path().join("package")),
    });
    r.target = Target::new(Os::Linux, Arch::Armv7, Compiler::Gcc, BuildType::Release);

    let err = r.run().unwrap_err();
    assert!(matches!(err, RecipeError::Platform(_)));
    assert!(!temp.path().join("build").exists());
  }
}
