use std::collections::HashMap;
use std::time::{Duration, Instant};

use model::OpportunityFingerprint;
use parking_lot::Mutex;

/// Tracks which opportunity fingerprints have already been reported, so the
/// same finding isn't re-notified on every tick. Entries expire after `ttl`.
pub struct DedupIndex {
    ttl: Duration,
    seen: Mutex<HashMap<OpportunityFingerprint, Instant>>,
}

impl DedupIndex {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            seen: Mutex::new(HashMap::new()),
        }
    }

    /// Returns `true` the first time a fingerprint is seen (or once its
    /// previous sighting has expired), and records it as seen now.
    pub fn mark_and_check(&self, fingerprint: OpportunityFingerprint) -> bool {
        let mut seen = self.seen.lock();
        let now = Instant::now();
        seen.retain(|_, first_seen| now.duration_since(*first_seen) < self.ttl);

        if seen.contains_key(&fingerprint) {
            false
        } else {
            seen.insert(fingerprint, now);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Opportunity, OpportunityKind, TradingPair, Venue};
    use rust_decimal_macros::dec;

    fn sample() -> Opportunity {
        Opportunity {
            subject: 1,
            kind: OpportunityKind::Factual,
            buy_venue: Venue::VenueA,
            sell_venue: Venue::VenueG,
            buy_pair: TradingPair::UsdtRub,
            sell_pair: TradingPair::UsdtRub,
            buy_price: dec!(100),
            sell_price: dec!(101),
            buy_amount: dec!(1),
            profit_margin: dec!(1),
            suggested_bid: dec!(100.01),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn first_sighting_passes_repeat_does_not() {
        let index = DedupIndex::new(Duration::from_secs(3600));
        let fp = OpportunityFingerprint::from(&sample());

        assert!(index.mark_and_check(fp.clone()));
        assert!(!index.mark_and_check(fp));
    }

    #[test]
    fn expired_sighting_passes_again() {
        let index = DedupIndex::new(Duration::from_millis(1));
        let fp = OpportunityFingerprint::from(&sample());

        assert!(index.mark_and_check(fp.clone()));
        std::thread::sleep(Duration::from_millis(5));
        assert!(index.mark_and_check(fp));
    }
}
