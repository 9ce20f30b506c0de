use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{Subject, TradingPair, Venue};

/// Which detection pass produced an opportunity; controls the message framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpportunityKind {
    Factual,
    Potential,
}

/// A single arbitrage opportunity: buy on `buy_venue`/`buy_pair`, sell on
/// `sell_venue`/`sell_pair`, for a given subject.
#[derive(Debug, Clone, PartialEq)]
pub struct Opportunity {
    pub subject: Subject,
    pub kind: OpportunityKind,
    pub buy_venue: Venue,
    pub sell_venue: Venue,
    pub buy_pair: TradingPair,
    pub sell_pair: TradingPair,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    pub buy_amount: Decimal,
    pub profit_margin: Decimal,
    pub suggested_bid: Decimal,
    pub created_at: DateTime<Utc>,
}

/// A deterministic identity for an opportunity, used by the dedup index to
/// avoid re-notifying the same finding within its TTL window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpportunityFingerprint(String);

impl OpportunityFingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Opportunity> for OpportunityFingerprint {
    fn from(opp: &Opportunity) -> Self {
        Self(format!(
            "{}|{}|{}|{}|{}|{}",
            opp.subject, opp.buy_venue, opp.sell_venue, opp.buy_price, opp.sell_price, opp.buy_amount
        ))
    }
}
