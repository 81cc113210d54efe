//! Implementation of the `fhelpack version` command.

use std::path::Path;

use anyhow::Result;
use fhel_core::version::resolve_version;

/// Resolve and print the packaged library version
pub fn cmd_version(recipe_folder: &Path) -> Result<()> {
  let version = resolve_version(Some(recipe_folder))?;
  println!("{}", version);
  Ok(())
}
