//! Concurrency tests: operations on one account serialize through its
//! cell lock, so the ledger arithmetic stays exact under contention,
//! while different accounts proceed independently.

use std::sync::Arc;
use std::thread;

use paperdesk::adapter::SessionAuthenticator;
use paperdesk::domain::AccountId;
use paperdesk::service::AccountService;
use paperdesk::testkit::domain::buy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const THREADS: usize = 8;
const CYCLES: usize = 50;

fn desk() -> Arc<AccountService<SessionAuthenticator>> {
    Arc::new(AccountService::new(SessionAuthenticator::new(720)))
}

async fn register(
    desk: &AccountService<SessionAuthenticator>,
    name: &str,
    email: &str,
) -> AccountId {
    desk.register(name, email, "pw").await.unwrap().account_id
}

#[tokio::test]
async fn round_trips_on_one_account_settle_exactly() {
    let desk = desk();
    let id = register(&desk, "Ana", "ana@x.com").await;

    // Each cycle: open BUY 1 @ 1.10 (debit 1.10), close @ 1.20
    // (credit 1.20 + 0.10). Net +0.20 per cycle, whatever the interleaving.
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let desk = Arc::clone(&desk);
            let id = id.clone();
            thread::spawn(move || {
                for _ in 0..CYCLES {
                    let opened = desk
                        .open_position(&id, buy("EURUSD", dec!(1), dec!(1.10)))
                        .unwrap();
                    desk.close_position(&id, opened.trade.id(), dec!(1.20))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let per_cycle = dec!(0.20);
    let expected = dec!(1000) + per_cycle * Decimal::from((THREADS * CYCLES) as u64);

    let info = desk.account_info(&id).unwrap();
    assert_eq!(info.cash_balance, expected);
    assert_eq!(info.equity, expected);
    assert_eq!(info.open_position_count, 0);
    assert_eq!(desk.list_history(&id).unwrap().len(), THREADS * CYCLES);
}

#[tokio::test]
async fn concurrent_opens_reserve_every_notional() {
    let desk = desk();
    let id = register(&desk, "Ana", "ana@x.com").await;

    // Overdraft is permitted, so nothing is rejected; the property under
    // test is that the arithmetic is exact, not that spending is capped.
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let desk = Arc::clone(&desk);
            let id = id.clone();
            thread::spawn(move || {
                for _ in 0..CYCLES {
                    desk.open_position(&id, buy("EURUSD", dec!(2), dec!(1.10)))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let notional = dec!(2.20);
    let expected = dec!(1000) - notional * Decimal::from((THREADS * CYCLES) as u64);

    let info = desk.account_info(&id).unwrap();
    assert_eq!(info.cash_balance, expected);
    assert_eq!(info.open_position_count, THREADS * CYCLES);
}

#[tokio::test]
async fn each_open_id_closes_exactly_once_under_contention() {
    let desk = desk();
    let id = register(&desk, "Ana", "ana@x.com").await;

    let opened: Vec<_> = (0..THREADS * 4)
        .map(|_| {
            desk.open_position(&id, buy("EURUSD", dec!(1), dec!(1.10)))
                .unwrap()
                .trade
                .id()
                .clone()
        })
        .collect();

    // Every thread races to close every trade; each id must succeed for
    // exactly one closer and be NotFound for the rest.
    let successes: usize = (0..THREADS)
        .map(|_| {
            let desk = Arc::clone(&desk);
            let id = id.clone();
            let opened = opened.clone();
            thread::spawn(move || {
                opened
                    .iter()
                    .filter(|&trade_id| desk.close_position(&id, trade_id, dec!(1.20)).is_ok())
                    .count()
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .sum();

    assert_eq!(successes, opened.len());
    assert_eq!(desk.list_history(&id).unwrap().len(), opened.len());
    assert_eq!(desk.account_info(&id).unwrap().open_position_count, 0);
}

#[tokio::test]
async fn accounts_do_not_interfere() {
    let desk = desk();
    let ana = register(&desk, "Ana", "ana@x.com").await;
    let bo = register(&desk, "Bo", "bo@x.com").await;

    let handles: Vec<_> = [(ana.clone(), dec!(1.10)), (bo.clone(), dec!(2.50))]
        .into_iter()
        .map(|(id, price)| {
            let desk = Arc::clone(&desk);
            thread::spawn(move || {
                for _ in 0..CYCLES {
                    let opened = desk.open_position(&id, buy("EURUSD", dec!(1), price)).unwrap();
                    desk.close_position(&id, opened.trade.id(), price).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Flat round trips at the same price: credit equals debit, pnl zero.
    assert_eq!(desk.account_info(&ana).unwrap().cash_balance, dec!(1000));
    assert_eq!(desk.account_info(&bo).unwrap().cash_balance, dec!(1000));
    assert_eq!(desk.list_history(&ana).unwrap().len(), CYCLES);
    assert_eq!(desk.list_history(&bo).unwrap().len(), CYCLES);
}
