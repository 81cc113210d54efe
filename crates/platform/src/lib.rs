//! fhel-platform: target descriptors for libfhel packaging
//!
//! This crate models the platform a libfhel build is aimed at (operating
//! system, CPU architecture, compiler, build type) and the canonical
//! architecture labels used to name released artifacts.

pub mod arch;
pub mod error;
pub mod os;
pub mod release;
pub mod target;

pub use arch::Arch;
pub use error::PlatformError;
pub use os::Os;
pub use release::release_label;
pub use target::{BuildType, Compiler, Target};
