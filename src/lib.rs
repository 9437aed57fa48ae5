#![cfg_attr(not(test), no_std)]

//! Unconditional, non-blocking atomic read-modify-write operations over
//! caller-owned storage locations: the primitive layer beneath every
//! higher-level lock-free or lock-based construct in a managed runtime.
//!
//! Compare-and-swap is the single true primitive; exchange, add, increment,
//! decrement and read are derived from it. Per target architecture, each
//! derived operation is either a direct hardware instruction or a portable
//! CAS retry loop with identical observable semantics (selected once per build).
//! Reference-typed locations pair every winning store of a non-null
//! reference with the collector's [WriteBarrier] hook. A separate
//! [process_wide_fence] forces visibility for threads which poll without
//! atomics.
//!
//! Every operation here is full-fence; no relaxed mode is offered. All
//! operations except [process_wide_fence] complete without blocking.

#[cfg(all(feature = "std", not(test)))]
extern crate std;

mod caps;
mod err;
mod fence;
mod location;
mod ops;
mod sync;

pub use err::Error;
pub use fence::process_wide_fence;
pub use location::{Int32Location, Int64Location, RefLocation};
pub use ops::{
    add_i32, add_i64, compare_exchange_i32, compare_exchange_i64, compare_exchange_ref,
    decrement_i32, decrement_i64, exchange_i32, exchange_i64, exchange_ref, increment_i32,
    increment_i64, read_i64, WriteBarrier,
};
