//! fhel-core: packaging recipe pipeline for the libfhel native library
//!
//! This crate resolves the packaged version from the recipe's marker file,
//! generates a cmake toolchain, computes platform-conditional build
//! arguments, drives the external cmake build, collects the produced
//! `libfhel*` artifacts into a package folder, and optionally exports the
//! package path as a CI step output.

pub mod args;
pub mod ci;
pub mod cmake;
pub mod error;
pub mod package;
pub mod recipe;
pub mod toolchain;
pub mod version;

pub use error::{ConfigError, RecipeError};
pub use recipe::{Folders, Recipe, RecipeOptions, Summary};

/// Result type for recipe operations
pub type Result<T> = std::result::Result<T, RecipeError>;
