//! Invocations of the external cmake build tool.
//!
//! Both stages run synchronously with inherited stdio so build output
//! reaches the invoking terminal. A non-zero exit from either stage is
//! fatal and surfaced unmodified; nothing is retried.

use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::error::RecipeError;
use crate::Result;

/// Build the argument list for the configure stage
fn configure_args(
  source_dir: &Path,
  build_dir: &Path,
  toolchain: &Path,
  extra_args: &[String],
) -> Vec<String> {
  let mut args = vec![
    "-S".to_string(),
    source_dir.display().to_string(),
    "-B".to_string(),
    build_dir.display().to_string(),
    format!("-DCMAKE_TOOLCHAIN_FILE={}", toolchain.display()),
  ];
  args.extend(extra_args.iter().cloned());
  args
}

/// Run the cmake configure stage for `source_dir` into `build_dir`
pub fn configure(
  source_dir: &Path,
  build_dir: &Path,
  toolchain: &Path,
  extra_args: &[String],
) -> Result<()> {
  let args = configure_args(source_dir, build_dir, toolchain, extra_args);
  info!(args = ?args, "cmake configure");

  let mut cmd = Command::new("cmake");
  cmd.args(&args);
  run(cmd, "configure")
}

/// Run the cmake build stage in `build_dir`
pub fn build(build_dir: &Path) -> Result<()> {
  info!(build_dir = %build_dir.display(), "cmake build");

  let mut cmd = Command::new("cmake");
  cmd.arg("--build").arg(build_dir);
  run(cmd, "build")
}

fn run(mut cmd: Command, stage: &str) -> Result<()> {
  let status = cmd.status()?;

  if !status.success() {
    return Err(RecipeError::CmakeFailed {
      stage: stage.to_string(),
      code: status.code(),
    });
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::path::PathBuf;

  #[test]
  fn configure_args_order_toolchain_before_extras() {
    let args = configure_args(
      &PathBuf::from("/src"),
      &PathBuf::from("/build"),
      &PathBuf::from("/build/conan_toolchain.cmake"),
      &["-DSEAL_USE_INTRIN=1".to_string()],
    );

    assert_eq!(args[0], "-S");
    assert_eq!(args[1], "/src");
    assert_eq!(args[2], "-B");
    assert_eq!(args[3], "/build");
    assert_eq!(args[4], "-DCMAKE_TOOLCHAIN_FILE=/build/conan_toolchain.cmake");
    assert_eq!(args[5], "-DSEAL_USE_INTRIN=1");
  }

  #[test]
  #[cfg(unix)]
  fn run_surfaces_exit_code() {
    let mut cmd = Command::new("/bin/sh");
    cmd.args(["-c", "exit 3"]);

    let err = run(cmd, "configure").unwrap_err();
    assert!(matches!(
      err,
      RecipeError::CmakeFailed { code: Some(3), ref stage } if stage == "configure"
    ));
  }

  #[test]
  #[cfg(unix)]
  fn run_succeeds_on_zero_exit() {
    let mut cmd = Command::new("/bin/sh");
    cmd.args(["-c", "exit 0"]);

    assert!(run(cmd, "build").is_ok());
  }
}
