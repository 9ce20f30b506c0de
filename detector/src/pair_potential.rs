use chrono::Utc;
use model::{Opportunity, OpportunityKind, Order, SizeModel};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::round::round2;
use crate::types::{DetectError, DetectParams, EmitMode};

/// The mirror image of `detect_pair_arbitrage`: the best bid is fixed and
/// asks are walked best-to-worst accumulating size against the same budget.
pub fn detect_pair_potential(
    asks: &[Order],
    bids: &[Order],
    params: &DetectParams,
) -> Result<Vec<Opportunity>, DetectError> {
    if asks.is_empty() || bids.is_empty() {
        return Err(DetectError::EmptyBook);
    }

    let mut opportunities = Vec::new();
    let mut bid_running = Decimal::ZERO;

    for bid in bids {
        bid_running += bid.amount;
        let bid_cum = match params.size_model_bid {
            SizeModel::Cumulative => bid.cumulative_sum.unwrap_or(bid.amount),
            SizeModel::Incremental => bid_running,
        };

        let mut ask_running = Decimal::ZERO;
        for ask in asks {
            ask_running += ask.amount;
            let ask_cum = match params.size_model_ask {
                SizeModel::Cumulative => ask.cumulative_sum.unwrap_or(ask.amount),
                SizeModel::Incremental => ask_running,
            };
            if ask_cum > params.max_sum {
                break;
            }

            let eff_ask = ask.price / (Decimal::ONE + params.fee_ask);
            let eff_bid = bid.price * (Decimal::ONE + params.fee_bid);
            let profit = round2(eff_ask - eff_bid);

            if profit >= params.min_diff {
                let opportunity = Opportunity {
                    subject: params.subject,
                    kind: OpportunityKind::Potential,
                    buy_venue: params.bid_venue,
                    sell_venue: params.ask_venue,
                    buy_pair: params.bid_pair,
                    sell_pair: params.ask_pair,
                    buy_price: bid.price,
                    sell_price: ask.price,
                    buy_amount: ask_cum.min(bid_cum),
                    profit_margin: profit,
                    suggested_bid: bid.price + dec!(0.01),
                    created_at: Utc::now(),
                };
                match params.emit_mode {
                    EmitMode::All => opportunities.push(opportunity),
                    EmitMode::Last => {
                        opportunities.clear();
                        opportunities.push(opportunity);
                    }
                }
            }
        }

        if bid_cum > params.max_sum {
            break;
        }
    }

    Ok(opportunities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Side, TradingPair, Venue};

    fn order(price: &str, amount: &str, side: Side, venue: Venue, pair: TradingPair) -> Order {
        Order::new(price.parse().unwrap(), amount.parse().unwrap(), None, side, venue, pair).unwrap()
    }

    #[test]
    fn empty_book_is_an_error() {
        let p = DetectParams {
            subject: 1,
            ask_venue: Venue::VenueA,
            ask_pair: TradingPair::UsdtRub,
            bid_venue: Venue::VenueG,
            bid_pair: TradingPair::UsdtRub,
            fee_ask: dec!(0),
            fee_bid: dec!(0),
            min_diff: dec!(0),
            max_sum: dec!(100),
            size_model_ask: SizeModel::Incremental,
            size_model_bid: SizeModel::Incremental,
            emit_mode: EmitMode::All,
        };
        assert_eq!(
            detect_pair_potential(&[], &[], &p).unwrap_err(),
            DetectError::EmptyBook
        );
    }

    #[test]
    fn finds_qualifying_ask_for_fixed_bid() {
        let asks = vec![
            order("100", "1", Side::Sell, Venue::VenueA, TradingPair::UsdtRub),
            order("102", "1", Side::Sell, Venue::VenueA, TradingPair::UsdtRub),
        ];
        let bids = vec![order("99", "1", Side::Buy, Venue::VenueG, TradingPair::UsdtRub)];
        let p = DetectParams {
            subject: 1,
            ask_venue: Venue::VenueA,
            ask_pair: TradingPair::UsdtRub,
            bid_venue: Venue::VenueG,
            bid_pair: TradingPair::UsdtRub,
            fee_ask: dec!(0),
            fee_bid: dec!(0),
            min_diff: dec!(1),
            max_sum: dec!(100),
            size_model_ask: SizeModel::Incremental,
            size_model_bid: SizeModel::Incremental,
            emit_mode: EmitMode::All,
        };
        let opps = detect_pair_potential(&asks, &bids, &p).unwrap();
        assert_eq!(opps.len(), 2);
        assert_eq!(opps[1].sell_price, dec!(102));
    }
}
