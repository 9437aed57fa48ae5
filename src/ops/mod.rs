//! The operation surface: compare-exchange, exchange, add, increment,
//! decrement and read, replicated per supported width.
//!
//! Wherever [crate::caps::TARGET_CAPS] reports a direct instruction the
//! dispatch substitutes it; everywhere else the call routes through the
//! retry engine. The two paths are observably identical.

use crate::caps::TARGET_CAPS;
use crate::err::Error;
use crate::location::{Int32Location, Int64Location};
use crate::sync::Ordering;

pub(crate) mod cas;
pub(crate) mod engine;
pub(crate) mod gcref;

pub use cas::{compare_exchange_i32, compare_exchange_i64};
pub use gcref::{compare_exchange_ref, exchange_ref, WriteBarrier};

/// Unconditionally store `new_value` into the 32-bit location, returning the
/// value it replaced.
pub fn exchange_i32(location: Int32Location<'_>, new_value: i32) -> Result<i32, Error> {
    if TARGET_CAPS.native_exchange {
        let storage = location.bind()?;
        return Ok(storage.swap(new_value, Ordering::SeqCst));
    }
    engine::exchange_i32(location, new_value)
}

/// Unconditionally store `new_value` into the 64-bit location, returning the
/// value it replaced.
pub fn exchange_i64(location: Int64Location<'_>, new_value: i64) -> Result<i64, Error> {
    if TARGET_CAPS.native_exchange {
        let storage = location.bind()?;
        return Ok(storage.swap(new_value, Ordering::SeqCst));
    }
    engine::exchange_i64(location, new_value)
}

fn exchange_add_i32(location: Int32Location<'_>, delta: i32) -> Result<i32, Error> {
    if TARGET_CAPS.native_fetch_add {
        let storage = location.bind()?;
        return Ok(storage.fetch_add(delta, Ordering::SeqCst));
    }
    engine::exchange_add_i32(location, delta)
}

fn exchange_add_i64(location: Int64Location<'_>, delta: i64) -> Result<i64, Error> {
    if TARGET_CAPS.native_fetch_add {
        let storage = location.bind()?;
        return Ok(storage.fetch_add(delta, Ordering::SeqCst));
    }
    engine::exchange_add_i64(location, delta)
}

/// Add `delta` to the 32-bit location, returning the post-update value.
/// Overflow wraps silently; it never faults.
pub fn add_i32(location: Int32Location<'_>, delta: i32) -> Result<i32, Error> {
    Ok(exchange_add_i32(location, delta)?.wrapping_add(delta))
}

/// Add `delta` to the 64-bit location, returning the post-update value.
/// Overflow wraps silently; it never faults.
pub fn add_i64(location: Int64Location<'_>, delta: i64) -> Result<i64, Error> {
    Ok(exchange_add_i64(location, delta)?.wrapping_add(delta))
}

/// Add one to the 32-bit location, returning the post-update value.
pub fn increment_i32(location: Int32Location<'_>) -> Result<i32, Error> {
    add_i32(location, 1)
}

/// Add one to the 64-bit location, returning the post-update value.
pub fn increment_i64(location: Int64Location<'_>) -> Result<i64, Error> {
    add_i64(location, 1)
}

/// Subtract one from the 32-bit location, returning the post-update value.
pub fn decrement_i32(location: Int32Location<'_>) -> Result<i32, Error> {
    add_i32(location, -1)
}

/// Subtract one from the 64-bit location, returning the post-update value.
pub fn decrement_i64(location: Int64Location<'_>) -> Result<i64, Error> {
    add_i64(location, -1)
}

/// Read the 64-bit location through the same fenced path as a write, so the
/// result can never be served from a stale per-thread copy.
///
/// Implemented as a no-op compare-exchange against zero.
pub fn read_i64(location: Int64Location<'_>) -> Result<i64, Error> {
    cas::compare_exchange_i64(location, 0, 0)
}
