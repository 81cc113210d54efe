//! Implementation of the `fhelpack info` command.
//!
//! Shows what the pipeline would do for a target: the descriptor, the
//! release label used for artifact naming, and the extra cmake arguments.

use anyhow::Result;
use fhel_core::args::compute_build_args;
use fhel_platform::Target;

use crate::output::{print_json, print_stat, print_success, symbols};

/// Print the resolved build configuration for `target`
pub fn cmd_info(target: &Target, json: bool) -> Result<()> {
  let label = target.release_label()?;
  let cmake_args = compute_build_args(target);

  if json {
    print_json(&serde_json::json!({
      "target": target,
      "label": label,
      "cmake_args": cmake_args,
    }))?;
    return Ok(());
  }

  print_success(&format!("Target {}", target));
  print_stat("OS", target.os.as_str());
  print_stat("Arch", target.arch.as_str());
  print_stat("Compiler", target.compiler.as_str());
  print_stat("Build type", target.build_type.as_str());
  print_stat("Release label", label);

  if cmake_args.is_empty() {
    print_stat("Extra cmake args", "none");
  } else {
    println!();
    println!("Extra cmake args:");
    for arg in &cmake_args {
      println!("  {} {}", symbols::INFO, arg);
    }
  }

  Ok(())
}
