use rust_decimal::Decimal;

use crate::{ModelError, Side, TradingPair, Venue};

/// A single price level of a venue's order book.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub price: Decimal,
    pub amount: Decimal,
    /// Venue-reported cumulative size up to and including this level, when the
    /// venue publishes it (see `SizeModel::Cumulative`). `None` means the
    /// detector must accumulate `amount` itself.
    pub cumulative_sum: Option<Decimal>,
    pub side: Side,
    pub venue: Venue,
    pub pair: TradingPair,
}

impl Order {
    pub fn new(
        price: Decimal,
        amount: Decimal,
        cumulative_sum: Option<Decimal>,
        side: Side,
        venue: Venue,
        pair: TradingPair,
    ) -> Result<Self, ModelError> {
        if price <= Decimal::ZERO {
            return Err(ModelError::NonPositivePrice(price));
        }
        if amount < Decimal::ZERO {
            return Err(ModelError::NegativeAmount(amount));
        }
        Ok(Self {
            price,
            amount,
            cumulative_sum,
            side,
            venue,
            pair,
        })
    }
}

/// Identity of an order book: which venue, which pair, which half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderBookKey {
    pub venue: Venue,
    pub pair: TradingPair,
    pub side: Side,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rejects_non_positive_price() {
        let err = Order::new(
            dec!(0),
            dec!(1),
            None,
            Side::Sell,
            Venue::VenueA,
            TradingPair::UsdtRub,
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::NonPositivePrice(_)));
    }

    #[test]
    fn rejects_negative_amount() {
        let err = Order::new(
            dec!(1),
            dec!(-1),
            None,
            Side::Sell,
            Venue::VenueA,
            TradingPair::UsdtRub,
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::NegativeAmount(_)));
    }

    #[test]
    fn accepts_valid_order() {
        let order = Order::new(
            dec!(100),
            dec!(5),
            Some(dec!(5)),
            Side::Buy,
            Venue::VenueG,
            TradingPair::UsdtA7A5,
        )
        .unwrap();
        assert_eq!(order.price, dec!(100));
    }
}
