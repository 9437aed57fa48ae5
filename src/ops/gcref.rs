//! Atomic operations over reference slots in collector-tracked storage.
//!
//! A reference-typed location holds the erased, address-sized form of a
//! `*mut T`. This module is the only place where that reinterpretation
//! happens: [erase] and [restore] are the single seam between typed
//! references and the raw-word CAS core, and nothing outside this module
//! reasons about it.
//!
//! Null is an ordinary comparand and an ordinary value. A successful swap
//! which changes the slot to a distinct non-null reference is paired with the
//! collector's [WriteBarrier] hook before the operation returns; a swap to
//! null records nothing new as reachable and invokes no hook, and neither
//! does a failed compare.

use tracing::instrument;

use crate::caps::TARGET_CAPS;
use crate::err::Error;
use crate::location::RefLocation;
use crate::ops::{cas, engine};
use crate::sync::Ordering;

/// The collector's cross-reference bookkeeping entry point.
///
/// [record_store] is invoked on the storing thread, after its swap has won
/// and before the operation returns, for every successful identity change to
/// a non-null reference. The collector may rely on the bookkeeping being
/// complete by the time the storing thread reaches its next rendezvous; no
/// thread which observes the new reference through these primitives can get
/// ahead of it.
///
/// [record_store]: WriteBarrier::record_store
pub trait WriteBarrier {
    /// Record that the reference `new_value` was stored into the slot at
    /// `slot`.
    fn record_store(&self, slot: *mut (), new_value: *mut ());
}

/// Erase a typed reference to the address-sized word the CAS core operates on.
fn erase<T>(reference: *mut T) -> usize {
    reference as usize
}

/// Restore a typed reference from a word produced by [erase].
fn restore<T>(word: usize) -> *mut T {
    word as *mut T
}

/// Atomically inspect the reference in `location`; if it is identical to
/// `comparand`, replace it with `new_value`. Either way, return the reference
/// observed immediately before the attempt.
///
/// Identity equality is address equality of the erased words. On a winning
/// swap which changes the slot to a distinct non-null reference, `barrier` is
/// invoked exactly once before returning.
#[instrument(skip(barrier))]
pub fn compare_exchange_ref<T, B: WriteBarrier>(
    location: RefLocation<'_, T>,
    new_value: *mut T,
    comparand: *mut T,
    barrier: &B,
) -> Result<*mut T, Error> {
    let slot = location.bind()?;

    let new_word: usize = erase(new_value);
    let comparand_word: usize = erase(comparand);
    let observed_word: usize = cas::compare_exchange_word(slot, new_word, comparand_word);

    let swap_won: bool = observed_word == comparand_word;
    if swap_won && observed_word != new_word && !new_value.is_null() {
        barrier.record_store(location.slot_address(), new_value as *mut ());
    }
    Ok(restore(observed_word))
}

/// Unconditionally store `new_value` into the reference slot, returning the
/// reference it replaced.
///
/// Same barrier rules as [compare_exchange_ref]: the hook runs exactly once
/// when the replaced reference differs from a non-null `new_value`.
#[instrument(skip(barrier))]
pub fn exchange_ref<T, B: WriteBarrier>(
    location: RefLocation<'_, T>,
    new_value: *mut T,
    barrier: &B,
) -> Result<*mut T, Error> {
    let slot = location.bind()?;

    let new_word: usize = erase(new_value);
    let observed_word: usize = if TARGET_CAPS.native_exchange {
        slot.swap(new_word, Ordering::SeqCst)
    } else {
        engine::exchange_word(slot, new_word)
    };

    if observed_word != new_word && !new_value.is_null() {
        barrier.record_store(location.slot_address(), new_value as *mut ());
    }
    Ok(restore(observed_word))
}
