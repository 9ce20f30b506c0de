use model::{Opportunity, OpportunityKind};

/// Formats an opportunity into the text handed to `Notifier::send`.
pub fn format_message(opp: &Opportunity) -> String {
    let label = match opp.kind {
        OpportunityKind::Factual => "factual arbitrage",
        OpportunityKind::Potential => "potential arbitrage",
    };
    format!(
        "{label} found: buy {} {} @ {} -> sell {} {} @ {} (amount {}, profit {}, suggested bid {})",
        opp.buy_venue,
        opp.buy_pair,
        opp.buy_price,
        opp.sell_venue,
        opp.sell_pair,
        opp.sell_price,
        opp.buy_amount,
        opp.profit_margin,
        opp.suggested_bid,
    )
}
