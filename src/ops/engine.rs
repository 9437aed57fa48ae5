//! Compare-and-swap retry loops: the portable rendition of every derived
//! operation, used whenever [crate::caps::TARGET_CAPS] reports no direct
//! instruction for it.
//!
//! Each loop re-reads the current value and attempts to swap it out through
//! the CAS core. A failed attempt means another thread's swap succeeded in
//! the meantime, so the total number of retries across all contenders is
//! bounded by the number of successful writes: lock-free, not wait-free.
//! Nothing here takes a lock, enqueues, or waits.

use crate::err::Error;
use crate::location::{Int32Location, Int64Location};
use crate::ops::cas;
use crate::sync::{AtomicUsize, Ordering};

/// Unconditionally store `new_value` into the 32-bit location, returning the
/// value it replaced.
pub(crate) fn exchange_i32(location: Int32Location<'_>, new_value: i32) -> Result<i32, Error> {
    let storage = location.bind()?;
    loop {
        let current_value: i32 = storage.load(Ordering::SeqCst);
        let observed: i32 = cas::compare_exchange_i32(location, new_value, current_value)?;
        if observed == current_value {
            return Ok(observed);
        }
    }
}

/// Unconditionally store `new_value` into the 64-bit location, returning the
/// value it replaced.
pub(crate) fn exchange_i64(location: Int64Location<'_>, new_value: i64) -> Result<i64, Error> {
    let storage = location.bind()?;
    loop {
        let current_value: i64 = storage.load(Ordering::SeqCst);
        let observed: i64 = cas::compare_exchange_i64(location, new_value, current_value)?;
        if observed == current_value {
            return Ok(observed);
        }
    }
}

/// Add `delta` to the 32-bit location with two's-complement wraparound,
/// returning the pre-update value.
pub(crate) fn exchange_add_i32(location: Int32Location<'_>, delta: i32) -> Result<i32, Error> {
    let storage = location.bind()?;
    loop {
        let current_value: i32 = storage.load(Ordering::SeqCst);
        let desired_value: i32 = current_value.wrapping_add(delta);
        let observed: i32 = cas::compare_exchange_i32(location, desired_value, current_value)?;
        if observed == current_value {
            return Ok(observed);
        }
    }
}

/// Add `delta` to the 64-bit location with two's-complement wraparound,
/// returning the pre-update value.
pub(crate) fn exchange_add_i64(location: Int64Location<'_>, delta: i64) -> Result<i64, Error> {
    let storage = location.bind()?;
    loop {
        let current_value: i64 = storage.load(Ordering::SeqCst);
        let desired_value: i64 = current_value.wrapping_add(delta);
        let observed: i64 = cas::compare_exchange_i64(location, desired_value, current_value)?;
        if observed == current_value {
            return Ok(observed);
        }
    }
}

/// Unconditionally store `new_word` into an already-bound address-sized slot,
/// returning the word it replaced.
pub(crate) fn exchange_word(slot: &AtomicUsize, new_word: usize) -> usize {
    loop {
        let current_word: usize = slot.load(Ordering::SeqCst);
        let observed: usize = cas::compare_exchange_word(slot, new_word, current_word);
        if observed == current_word {
            return observed;
        }
    }
}
