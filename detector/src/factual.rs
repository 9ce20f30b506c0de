use chrono::Utc;
use model::{Opportunity, OpportunityKind, Order};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::round::round2;
use crate::types::{DetectError, DetectParams};

/// Compares only the best ask and the best bid right now. No size budget is
/// involved — this is the "is there an arbitrage at all, this instant" check.
pub fn detect_factual(
    asks: &[Order],
    bids: &[Order],
    params: &DetectParams,
) -> Result<Option<Opportunity>, DetectError> {
    let best_ask = asks.first().ok_or(DetectError::EmptyBook)?;
    let best_bid = bids.first().ok_or(DetectError::EmptyBook)?;

    let eff_ask = best_ask.price / (Decimal::ONE + params.fee_ask);
    let eff_bid = best_bid.price * (Decimal::ONE + params.fee_bid);
    let profit = round2(eff_ask - eff_bid);

    if profit < params.min_diff {
        return Ok(None);
    }

    Ok(Some(Opportunity {
        subject: params.subject,
        kind: OpportunityKind::Factual,
        buy_venue: params.bid_venue,
        sell_venue: params.ask_venue,
        buy_pair: params.bid_pair,
        sell_pair: params.ask_pair,
        buy_price: best_bid.price,
        sell_price: best_ask.price,
        buy_amount: best_ask.amount.min(best_bid.amount),
        profit_margin: profit,
        suggested_bid: best_bid.price + dec!(0.01),
        created_at: Utc::now(),
    }))
}
