use interlock::{compare_exchange_i64, increment_i64, Int64Location};
use tracing::debug;

cfg_if::cfg_if! {
    if #[cfg(loom)] {
        pub(crate) use loom::sync::atomic::{AtomicI64, Ordering};
        pub(crate) use loom::sync::Arc;
        pub(crate) use loom::thread;
    } else if #[cfg(feature = "shuttle")] {
        pub(crate) use shuttle::sync::atomic::{AtomicI64, Ordering};
        pub(crate) use shuttle::sync::Arc;
        pub(crate) use shuttle::thread;
    } else if #[cfg(feature = "std")] {
        pub(crate) use std::sync::atomic::{AtomicI64, Ordering};
        pub(crate) use std::sync::Arc;
        pub(crate) use std::thread;
    }
}

/// Race `num_threads` compare-exchanges from one shared starting value:
/// exactly one thread may win, and every loser must observe the winner's
/// value as the pre-attempt value.
pub(crate) fn exactly_one_winner_test(num_threads: usize) {
    const SHARED_INITIAL: i64 = 0;

    let target: Arc<AtomicI64> = Arc::new(AtomicI64::new(SHARED_INITIAL));

    let join_handles: Vec<thread::JoinHandle<i64>> = (0..num_threads)
        .map(|i| {
            let target: Arc<AtomicI64> = target.clone();
            // thread values are 1-indexed so no thread value collides with the shared initial
            let thread_value: i64 = i as i64 + 1;
            let handle: thread::JoinHandle<i64> = thread::spawn(move || {
                let location: Int64Location = Int64Location::new(target.as_ref());
                compare_exchange_i64(location, thread_value, SHARED_INITIAL).unwrap()
            });
            handle
        })
        .collect();

    let observed_values: Vec<i64> = join_handles
        .into_iter()
        .map(|join_handle| join_handle.join().expect("A thread panicked"))
        .collect();
    debug!("pre-attempt values observed per thread: {observed_values:?}");

    let winners: Vec<usize> = (0..num_threads)
        .filter(|&i| observed_values[i] == SHARED_INITIAL)
        .collect();
    assert_eq!(winners.len(), 1, "expected exactly one winning thread");

    let final_value: i64 = target.load(Ordering::SeqCst);
    assert_eq!(final_value, winners[0] as i64 + 1);
    for (i, observed_value) in observed_values.iter().enumerate() {
        if i != winners[0] {
            assert_eq!(*observed_value, final_value);
        }
    }
}

/// Hammer one shared location with increments from every thread: the final
/// value must account for every single update.
pub(crate) fn lost_update_test(num_threads: usize, increments_per_thread: usize) {
    let target: Arc<AtomicI64> = Arc::new(AtomicI64::new(0));

    let join_handles: Vec<thread::JoinHandle<()>> = (0..num_threads)
        .map(|_| {
            let target: Arc<AtomicI64> = target.clone();
            let handle: thread::JoinHandle<()> = thread::spawn(move || {
                let location: Int64Location = Int64Location::new(target.as_ref());
                for _ in 0..increments_per_thread {
                    increment_i64(location).unwrap();
                }
            });
            handle
        })
        .collect();

    join_handles.into_iter().for_each(|join_handle| {
        join_handle.join().expect("A thread panicked");
    });

    assert_eq!(
        target.load(Ordering::SeqCst),
        (num_threads * increments_per_thread) as i64
    );
}
