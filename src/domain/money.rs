//! Monetary types for balance, price, and volume representation.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Volume represented as a Decimal for precision.
pub type Volume = Decimal;

/// Account cash balance represented as a Decimal for precision.
///
/// Signed: overdraft is permitted by the ledger, so balances may go
/// negative over the life of a simulated account.
pub type Balance = Decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn monetary_types_are_decimal() {
        let price: Price = dec!(1.10);
        let volume: Volume = dec!(2);
        let balance: Balance = dec!(1000);

        assert_eq!(balance - price * volume, dec!(997.80));
    }

    #[test]
    fn balance_may_go_negative() {
        let balance: Balance = dec!(10) - dec!(25);
        assert_eq!(balance, dec!(-15));
    }
}
