//! Build-time selection between native atomic instructions and the portable
//! compare-and-swap retry engine, per target architecture.

use cfg_if::cfg_if;

// Compare-and-swap is the one primitive with no fallback. A target missing it
// at any supported width cannot be configured correctly at all.
#[cfg(not(all(
    target_has_atomic = "32",
    target_has_atomic = "64",
    target_has_atomic = "ptr"
)))]
compile_error!(
    "interlock requires hardware compare-and-swap for 32-bit, 64-bit and pointer-width storage"
);

/// Which derived operations the target provides a direct instruction for.
///
/// Operations reported as non-native are routed through the retry engine in
/// [crate::ops::engine]. The selection happens once, when the crate is built;
/// no operation re-evaluates it per call. Both paths have identical observable
/// semantics, so the dispatch may substitute the instruction freely wherever
/// the table allows it.
#[derive(Debug)]
pub(crate) struct TargetCaps {
    /// Direct unconditional-swap instruction.
    pub(crate) native_exchange: bool,
    /// Direct fetch-and-add instruction.
    pub(crate) native_fetch_add: bool,
}

cfg_if! {
    if #[cfg(feature = "force-fallback")] {
        pub(crate) const TARGET_CAPS: TargetCaps = TargetCaps {
            native_exchange: false,
            native_fetch_add: false,
        };
    } else if #[cfg(any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "riscv64"
    ))] {
        pub(crate) const TARGET_CAPS: TargetCaps = TargetCaps {
            native_exchange: true,
            native_fetch_add: true,
        };
    } else {
        pub(crate) const TARGET_CAPS: TargetCaps = TargetCaps {
            native_exchange: false,
            native_fetch_add: false,
        };
    }
}
