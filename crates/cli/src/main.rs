//! fhelpack - packaging pipeline for the libfhel native library

mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fhel_core::{Folders, Recipe, RecipeOptions};
use fhel_platform::{Arch, BuildType, Compiler, Os, Target};
use tracing_subscriber::EnvFilter;

/// fhelpack - build and package the libfhel native library
#[derive(Parser)]
#[command(name = "fhelpack")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

/// Target descriptor fields, as supplied by the invoking build environment
#[derive(Args)]
struct TargetArgs {
  /// Target operating system (defaults to the host OS)
  #[arg(long)]
  os: Option<Os>,

  /// Target CPU architecture (defaults to the host architecture)
  #[arg(long)]
  arch: Option<Arch>,

  /// Compiler the build environment provides (defaults per OS)
  #[arg(long)]
  compiler: Option<Compiler>,

  /// Build variant
  #[arg(long, default_value = "Release")]
  build_type: BuildType,
}

impl TargetArgs {
  fn resolve(&self) -> Result<Target> {
    let host = Target::host();

    let os = self
      .os
      .or(host.map(|h| h.os))
      .context("--os not supplied and the host OS is unsupported")?;
    let arch = self
      .arch
      .or(host.map(|h| h.arch))
      .context("--arch not supplied and the host architecture is unsupported")?;
    let compiler = self.compiler.unwrap_or(match os {
      Os::Macos => Compiler::AppleClang,
      Os::Linux => Compiler::Gcc,
      Os::Android => Compiler::Clang,
    });

    Ok(Target::new(os, arch, compiler, self.build_type))
  }
}

/// Folder layout for the recipe, defaulting relative to the recipe root
#[derive(Args)]
struct FolderArgs {
  /// Recipe root holding the version marker
  #[arg(long, default_value = ".")]
  recipe_folder: PathBuf,

  /// Source tree of the wrapped library (default: the recipe folder)
  #[arg(long)]
  source_folder: Option<PathBuf>,

  /// Out-of-source build folder (default: <recipe>/build)
  #[arg(long)]
  build_folder: Option<PathBuf>,

  /// Distribution output folder (default: <recipe>/package)
  #[arg(long)]
  package_folder: Option<PathBuf>,
}

impl FolderArgs {
  fn resolve(self) -> Folders {
    let recipe = self.recipe_folder;
    let source = self.source_folder.unwrap_or_else(|| recipe.clone());
    let build = self.build_folder.unwrap_or_else(|| recipe.join("build"));
    let package = self.package_folder.unwrap_or_else(|| recipe.join("package"));

    Folders {
      recipe: Some(recipe),
      source: Some(source),
      build: Some(build),
      package: Some(package),
    }
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Build libfhel for a target and collect the artifacts
  Create {
    #[command(flatten)]
    target: TargetArgs,

    #[command(flatten)]
    folders: FolderArgs,

    /// Export the package path to the CI output file
    #[arg(long)]
    ci: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
  },

  /// Copy built artifacts into the package folder
  Package {
    /// Folder containing the build output
    #[arg(long, default_value = "build")]
    source_folder: PathBuf,

    /// Distribution output folder
    #[arg(long, default_value = "package")]
    package_folder: PathBuf,

    /// Export the package path to the CI output file
    #[arg(long)]
    ci: bool,
  },

  /// Print the packaged library version
  Version {
    /// Recipe root holding the version marker
    #[arg(long, default_value = ".")]
    recipe_folder: PathBuf,
  },

  /// Show the resolved target and its build configuration
  Info {
    #[command(flatten)]
    target: TargetArgs,

    /// Print the configuration as JSON
    #[arg(long)]
    json: bool,
  },
}

fn main() {
  let cli = Cli::parse();

  init_tracing(cli.verbose);

  let result = match cli.command {
    Commands::Create { target, folders, ci, json } => {
      target.resolve().and_then(|target| {
        let recipe = Recipe {
          target,
          options: RecipeOptions { ci },
          folders: folders.resolve(),
        };
        cmd::cmd_create(&recipe, json)
      })
    }
    Commands::Package { source_folder, package_folder, ci } => {
      cmd::cmd_package(&source_folder, &package_folder, ci)
    }
    Commands::Version { recipe_folder } => cmd::cmd_version(&recipe_folder),
    Commands::Info { target, json } => {
      target.resolve().and_then(|target| cmd::cmd_info(&target, json))
    }
  };

  if let Err(e) = result {
    output::print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}

fn init_tracing(verbose: bool) {
  let default = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}
