//! Platform-conditional cmake arguments for the wrapped SEAL build.

use fhel_platform::{Os, Target};

/// Extra cmake defines passed when cross-compiling for Android.
///
/// SEAL's cmake setup runs compile-and-execute probes that cannot execute
/// under cross-compilation, so their exit codes and try-run outputs are
/// pinned to the expected values. The C wrapper and intrinsics are forced
/// on. Order is fixed; generated cmake invocations must be reproducible.
const ANDROID_SEAL_ARGS: &[&str] = &[
  "-DSEAL_BUILD_SEAL_C=1",
  "-DSEAL_USE_INTRIN=1",
  "-DSEAL_ARM64_EXITCODE=0",
  "-DSEAL_ARM64_EXITCODE__TRYRUN_OUTPUT=''",
  "-DSEAL___BUILTIN_CLZLL_FOUND_EXITCODE=0",
  "-DSEAL___BUILTIN_CLZLL_FOUND_EXITCODE__TRYRUN_OUTPUT=''",
  "-DSEAL__ADDCARRY_U64_FOUND_EXITCODE=0",
  "-DSEAL__ADDCARRY_U64_FOUND_EXITCODE__TRYRUN_OUTPUT=''",
  "-DSEAL__SUBBORROW_U64_FOUND_EXITCODE=0",
  "-DSEAL__SUBBORROW_U64_FOUND_EXITCODE__TRYRUN_OUTPUT=''",
];

/// Compute the extra cmake arguments for `target`
///
/// Pure function of the target descriptor: Android gets the fixed override
/// list, every other OS gets none.
pub fn compute_build_args(target: &Target) -> Vec<String> {
  match target.os {
    Os::Android => ANDROID_SEAL_ARGS.iter().map(|s| s.to_string()).collect(),
    _ => Vec::new(),
  }
}
