//! The compare-and-swap core: the one true hardware primitive. Every other
//! operation in the crate reduces to a call into this module.

use tracing::instrument;

use crate::err::Error;
use crate::location::{Int32Location, Int64Location};
use crate::sync::{AtomicUsize, Ordering};

/// Atomically inspect the 32-bit value at `location`; if it equals
/// `comparand`, replace it with `new_value`. Either way, return the value
/// observed immediately before the attempt.
///
/// The operation is total: it never blocks and never retries internally. A
/// successful swap is a full ordering point; the stored value and everything
/// the calling thread wrote before it become visible to any thread which
/// subsequently operates on the same location.
#[instrument]
pub fn compare_exchange_i32(
    location: Int32Location<'_>,
    new_value: i32,
    comparand: i32,
) -> Result<i32, Error> {
    let storage = location.bind()?;
    let observed: i32 =
        match storage.compare_exchange(comparand, new_value, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(previous_value) => previous_value,
            Err(actual_value) => actual_value,
        };
    Ok(observed)
}

/// Atomically inspect the 64-bit value at `location`; if it equals
/// `comparand`, replace it with `new_value`. Either way, return the value
/// observed immediately before the attempt.
///
/// See [compare_exchange_i32]; only the width differs.
#[instrument]
pub fn compare_exchange_i64(
    location: Int64Location<'_>,
    new_value: i64,
    comparand: i64,
) -> Result<i64, Error> {
    let storage = location.bind()?;
    let observed: i64 =
        match storage.compare_exchange(comparand, new_value, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(previous_value) => previous_value,
            Err(actual_value) => actual_value,
        };
    Ok(observed)
}

/// The address-sized raw form, over an already-bound slot. This is the shape
/// the reference adapter delegates to after erasing its typed values.
pub(crate) fn compare_exchange_word(
    slot: &AtomicUsize,
    new_value: usize,
    comparand: usize,
) -> usize {
    match slot.compare_exchange(comparand, new_value, Ordering::SeqCst, Ordering::SeqCst) {
        Ok(previous_value) => previous_value,
        Err(actual_value) => actual_value,
    }
}

#[cfg(all(test, feature = "std", not(feature = "shuttle"), not(loom)))]
mod tests {
    use tracing::debug;
    use test_log::test;

    use crate::err::Error;
    use crate::location::{Int32Location, Int64Location};
    use crate::sync::{AtomicI32, AtomicI64, Ordering};

    use super::{compare_exchange_i32, compare_exchange_i64};

    #[test]
    fn test_matching_comparand_swaps_and_returns_previous_value() {
        let storage: AtomicI32 = AtomicI32::new(50);
        let location: Int32Location = Int32Location::new(&storage);

        let observed: i32 = compare_exchange_i32(location, 51, 50).unwrap();
        debug!("observed before swap: {observed}");
        assert_eq!(observed, 50);
        assert_eq!(storage.load(Ordering::SeqCst), 51);
    }

    #[test]
    fn test_mismatched_comparand_leaves_storage_unchanged() {
        let storage: AtomicI64 = AtomicI64::new(70);
        let location: Int64Location = Int64Location::new(&storage);

        let observed: i64 = compare_exchange_i64(location, 71, 100).unwrap();
        assert_eq!(observed, 70);
        assert_eq!(storage.load(Ordering::SeqCst), 70);
    }

    #[test]
    fn test_unbound_location_is_rejected_before_any_access() {
        let error: Error = compare_exchange_i32(Int32Location::unbound(), 1, 0).unwrap_err();
        assert_eq!(error, Error::InvalidLocation);

        let error: Error = compare_exchange_i64(Int64Location::unbound(), 1, 0).unwrap_err();
        assert_eq!(error, Error::InvalidLocation);
    }

    #[test]
    fn test_swap_to_the_same_value_still_succeeds() {
        let storage: AtomicI64 = AtomicI64::new(0);
        let location: Int64Location = Int64Location::new(&storage);

        let observed: i64 = compare_exchange_i64(location, 0, 0).unwrap();
        assert_eq!(observed, 0);
        assert_eq!(storage.load(Ordering::SeqCst), 0);
    }
}
