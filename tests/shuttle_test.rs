#![cfg(feature = "shuttle")]

mod common;

use shuttle::scheduler::RandomScheduler;
use shuttle::{Config, PortfolioRunner};
use test_log::test;

#[test]
fn two_thread_cas_shuttle_test() {
    let mut portfolio_runner = PortfolioRunner::new(true, Config::new());
    for _ in 0..32 {
        portfolio_runner.add(RandomScheduler::new(10000usize));
    }
    portfolio_runner.run(|| {
        common::exactly_one_winner_test(2);
    });
}

#[test]
fn two_thread_increment_shuttle_test() {
    let mut portfolio_runner = PortfolioRunner::new(true, Config::new());
    for _ in 0..32 {
        portfolio_runner.add(RandomScheduler::new(10000usize));
    }
    portfolio_runner.run(|| {
        common::lost_update_test(2, 100);
    });
}
