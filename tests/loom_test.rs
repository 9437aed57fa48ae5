#![cfg(loom)]

mod common;

#[test]
fn two_thread_cas_loom_test() {
    loom::model(|| {
        common::exactly_one_winner_test(2);
    })
}

#[test]
fn two_thread_increment_loom_test() {
    loom::model(|| {
        common::lost_update_test(2, 2);
    })
}
