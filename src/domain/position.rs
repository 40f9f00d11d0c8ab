//! Per-account position book: the open-set / closed-sequence partition.
//!
//! Every trade lives in exactly one of two places: the open set (order
//! irrelevant, unique by id) or the closed sequence (append-only, insertion
//! order is close order). [`PositionBook::take_open`] physically removes a
//! trade from the open set, so a trade can never appear in both, and a
//! second close of the same id simply finds nothing to take.

use super::ids::TradeId;
use super::trade::Trade;

/// Tracks one account's open and closed positions.
#[derive(Debug, Default)]
pub struct PositionBook {
    open: Vec<Trade>,
    closed: Vec<Trade>,
}

impl PositionBook {
    /// Create an empty position book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open: Vec::new(),
            closed: Vec::new(),
        }
    }

    /// Record a newly opened trade.
    pub fn add_open(&mut self, trade: Trade) {
        debug_assert!(trade.is_open());
        self.open.push(trade);
    }

    /// Remove and return an open trade by id.
    ///
    /// Returns `None` if the id is not currently in the open set — either
    /// it never existed or it was already closed; the two cases are
    /// indistinguishable by design.
    pub fn take_open(&mut self, id: &TradeId) -> Option<Trade> {
        let index = self.open.iter().position(|t| t.id() == id)?;
        Some(self.open.swap_remove(index))
    }

    /// Append a settled trade to the close-ordered history.
    pub fn push_closed(&mut self, trade: Trade) {
        debug_assert!(!trade.is_open());
        self.closed.push(trade);
    }

    /// Iterate over open positions.
    ///
    /// Closed trades are physically relocated, so the status filter is a
    /// defensive invariant check rather than a real selection.
    pub fn open_trades(&self) -> impl Iterator<Item = &Trade> {
        self.open.iter().filter(|t| t.is_open())
    }

    /// Closed positions in close order.
    #[must_use]
    pub fn history(&self) -> &[Trade] {
        &self.closed
    }

    /// Get the count of open positions.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open_trades().count()
    }

    /// Returns true if the id is currently in the open set.
    #[must_use]
    pub fn contains_open(&self, id: &TradeId) -> bool {
        self.open.iter().any(|t| t.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade::Side;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn trade(symbol: &str) -> Trade {
        Trade::try_open(
            TradeId::new(),
            Side::Buy,
            symbol,
            dec!(1),
            dec!(1.10),
            None,
            None,
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn new_book_is_empty() {
        let book = PositionBook::new();
        assert_eq!(book.open_count(), 0);
        assert!(book.history().is_empty());
    }

    #[test]
    fn add_open_makes_trade_visible() {
        let mut book = PositionBook::new();
        let t = trade("EURUSD");
        let id = t.id().clone();

        book.add_open(t);

        assert_eq!(book.open_count(), 1);
        assert!(book.contains_open(&id));
    }

    #[test]
    fn take_open_removes_exactly_once() {
        let mut book = PositionBook::new();
        let t = trade("EURUSD");
        let id = t.id().clone();
        book.add_open(t);

        assert!(book.take_open(&id).is_some());
        assert!(book.take_open(&id).is_none());
        assert_eq!(book.open_count(), 0);
    }

    #[test]
    fn take_open_unknown_id_is_none() {
        let mut book = PositionBook::new();
        book.add_open(trade("EURUSD"));
        assert!(book.take_open(&TradeId::new()).is_none());
    }

    #[test]
    fn open_and_closed_sets_stay_disjoint() {
        let mut book = PositionBook::new();
        let t = trade("EURUSD");
        let id = t.id().clone();
        book.add_open(t);

        let mut taken = book.take_open(&id).unwrap();
        taken.close(dec!(1.20), Utc::now());
        book.push_closed(taken);

        assert!(!book.contains_open(&id));
        assert_eq!(book.history().len(), 1);
        assert_eq!(book.history()[0].id(), &id);
    }

    #[test]
    fn history_preserves_close_order() {
        let mut book = PositionBook::new();
        let first = trade("EURUSD");
        let second = trade("GBPUSD");
        let (first_id, second_id) = (first.id().clone(), second.id().clone());
        book.add_open(first);
        book.add_open(second);

        // Close in reverse insertion order; history must reflect close order.
        let mut t = book.take_open(&second_id).unwrap();
        t.close(dec!(1.20), Utc::now());
        book.push_closed(t);
        let mut t = book.take_open(&first_id).unwrap();
        t.close(dec!(1.20), Utc::now());
        book.push_closed(t);

        let ids: Vec<_> = book.history().iter().map(Trade::id).collect();
        assert_eq!(ids, vec![&second_id, &first_id]);
    }

    #[test]
    fn open_trades_filters_to_open_status() {
        let mut book = PositionBook::new();
        book.add_open(trade("EURUSD"));
        assert_eq!(book.open_trades().count(), 1);
        assert!(book.open_trades().all(Trade::is_open));
    }
}
