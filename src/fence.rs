//! A memory barrier observed by every thread in the process, backed by the
//! host's cross-thread store-buffer flush facility where one exists.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(all(target_os = "linux", not(loom), not(feature = "shuttle")))] {
        use core::sync::atomic::{AtomicUsize, Ordering};

        const MEMBARRIER_CMD_QUERY: libc::c_int = 0;
        const MEMBARRIER_CMD_PRIVATE_EXPEDITED: libc::c_int = 1 << 3;
        const MEMBARRIER_CMD_REGISTER_PRIVATE_EXPEDITED: libc::c_int = 1 << 4;

        const UNPROBED: usize = 0;
        const READY: usize = 1;
        const UNAVAILABLE: usize = 2;

        /// Probed once per process; the kernel requires registration before
        /// the private expedited command may be used.
        static MEMBARRIER_STATE: AtomicUsize = AtomicUsize::new(UNPROBED);

        fn membarrier(command: libc::c_int) -> libc::c_long {
            unsafe { libc::syscall(libc::SYS_membarrier, command, 0 as libc::c_int) }
        }

        /// Ask the kernel to run a full barrier on every thread of this
        /// process. Returns false if the facility is unavailable.
        fn flush_store_buffers() -> bool {
            match MEMBARRIER_STATE.load(Ordering::Acquire) {
                READY => {}
                UNAVAILABLE => return false,
                _ => {
                    let supported_commands: libc::c_long = membarrier(MEMBARRIER_CMD_QUERY);
                    let ready: bool = supported_commands >= 0
                        && (supported_commands & MEMBARRIER_CMD_PRIVATE_EXPEDITED as libc::c_long) != 0
                        && membarrier(MEMBARRIER_CMD_REGISTER_PRIVATE_EXPEDITED) == 0;
                    MEMBARRIER_STATE.store(
                        if ready { READY } else { UNAVAILABLE },
                        Ordering::Release,
                    );
                    if !ready {
                        return false;
                    }
                }
            }
            membarrier(MEMBARRIER_CMD_PRIVATE_EXPEDITED) == 0
        }
    } else {
        fn flush_store_buffers() -> bool {
            false
        }
    }
}

/// Force a full memory barrier observed by every thread in the process, so a
/// just-completed plain write becomes visible even to threads polling it
/// without any atomic operation.
///
/// This call may briefly block while other threads' store buffers are
/// flushed. It is the one operation in this crate which is not non-blocking,
/// and it is expensive; keep it out of tight loops. Concurrent calls from
/// multiple threads proceed independently.
///
/// Where the host provides no cross-thread flush facility this degrades to a
/// sequentially consistent fence on the calling thread, which only orders
/// that thread's own accesses.
pub fn process_wide_fence() {
    if !flush_store_buffers() {
        crate::sync::fence(crate::sync::Ordering::SeqCst);
    }
}

#[cfg(all(test, feature = "std", not(feature = "shuttle"), not(loom)))]
mod tests {
    use test_log::test;

    use super::process_wide_fence;

    #[test]
    fn test_fence_completes_on_the_probe_and_ready_paths() {
        // first call probes and registers, second reuses the cached state
        process_wide_fence();
        process_wide_fence();
    }
}
