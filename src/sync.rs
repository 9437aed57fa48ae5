//! A module which decides which synchronization primitives to use throughout the rest of the crate
//! depending on features and configuration options

// std, non-test
#[cfg(all(feature = "std", not(loom), not(feature = "shuttle")))]
pub(crate) use std::sync::atomic::{fence, AtomicI32, AtomicI64, AtomicUsize, Ordering};

// no_std, non-test
#[cfg(all(not(loom), not(feature = "shuttle"), not(feature = "std")))]
pub(crate) use core::sync::atomic::{fence, AtomicI32, AtomicI64, AtomicUsize, Ordering};

// loom
#[cfg(loom)]
pub(crate) use loom::sync::atomic::{fence, AtomicI32, AtomicI64, AtomicUsize, Ordering};

// shuttle
#[cfg(feature = "shuttle")]
pub(crate) use shuttle::sync::atomic::{AtomicI32, AtomicI64, AtomicUsize, Ordering};

// shuttle does not re-export fence
#[cfg(feature = "shuttle")]
pub(crate) use core::sync::atomic::fence;
