use chrono::Utc;
use model::{Opportunity, OpportunityKind, Order, SizeModel};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::round::round2;
use crate::types::{DetectError, DetectParams, EmitMode};

/// Walks asks best-to-worst; for each ask still within the size budget,
/// walks bids best-to-worst accumulating size, emitting every bid level that
/// clears `min_diff`, including the level whose own accumulator first
/// crosses `max_sum` — worse bids after that are skipped. Ask iteration
/// stops once the ask side's own accumulated size exceeds `max_sum` — once
/// that happens no worse (larger) ask can qualify either.
pub fn detect_pair_arbitrage(
    asks: &[Order],
    bids: &[Order],
    params: &DetectParams,
) -> Result<Vec<Opportunity>, DetectError> {
    if asks.is_empty() || bids.is_empty() {
        return Err(DetectError::EmptyBook);
    }

    let mut opportunities = Vec::new();
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

        let mut bid_running = Decimal::ZERO;
        for bid in bids {
            bid_running += bid.amount;
            let bid_cum = match params.size_model_bid {
                SizeModel::Cumulative => bid.cumulative_sum.unwrap_or(bid.amount),
                SizeModel::Incremental => bid_running,
            };
            if bid_cum > params.max_sum {
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

            if bid_cum > params.max_sum {
                break;
            }
        }
    }

    Ok(opportunities)
}
