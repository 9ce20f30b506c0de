use model::{PermutationConfig, SizeModel, TradingPair, Venue};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The default ask/bid permutation table: VenueA (cumulative, zero fees) and
/// VenueG (incremental, per-pair fees) crossed over all three pairs, covering
/// at least the intra-venue and cross-venue combination for each.
pub fn default_permutations() -> Vec<PermutationConfig> {
    let a = Venue::VenueA;
    let g = Venue::VenueG;
    let usdt_rub = TradingPair::UsdtRub;
    let usdt_a7a5 = TradingPair::UsdtA7A5;
    let a7a5_rub = TradingPair::A7A5Rub;

    let venue_a_fee = dec!(0);
    let venue_g_usdt_rub_fee = dec!(0.001);
    let venue_g_usdt_a7a5_fee = dec!(0.0005);
    let venue_g_a7a5_rub_fee = dec!(0.0005);

    vec![
        perm(a, usdt_rub, a, usdt_rub, venue_a_fee, venue_a_fee, SizeModel::Cumulative, SizeModel::Cumulative),
        perm(g, usdt_rub, g, usdt_rub, venue_g_usdt_rub_fee, venue_g_usdt_rub_fee, SizeModel::Incremental, SizeModel::Incremental),
        perm(g, usdt_a7a5, g, usdt_a7a5, venue_g_usdt_a7a5_fee, venue_g_usdt_a7a5_fee, SizeModel::Incremental, SizeModel::Incremental),
        perm(a, usdt_rub, g, usdt_rub, venue_a_fee, venue_g_usdt_rub_fee, SizeModel::Cumulative, SizeModel::Incremental),
        perm(g, usdt_rub, a, usdt_rub, venue_g_usdt_rub_fee, venue_a_fee, SizeModel::Incremental, SizeModel::Cumulative),
        perm(g, usdt_a7a5, a, usdt_rub, venue_g_usdt_a7a5_fee, venue_a_fee, SizeModel::Incremental, SizeModel::Cumulative),
        perm(a, usdt_rub, g, usdt_a7a5, venue_a_fee, venue_g_usdt_a7a5_fee, SizeModel::Cumulative, SizeModel::Incremental),
        perm(g, usdt_rub, g, usdt_a7a5, venue_g_usdt_rub_fee, venue_g_usdt_a7a5_fee, SizeModel::Incremental, SizeModel::Incremental),
        perm(g, usdt_a7a5, g, usdt_rub, venue_g_usdt_a7a5_fee, venue_g_usdt_rub_fee, SizeModel::Incremental, SizeModel::Incremental),
        perm(a, a7a5_rub, a, a7a5_rub, venue_a_fee, venue_a_fee, SizeModel::Cumulative, SizeModel::Cumulative),
        perm(g, a7a5_rub, g, a7a5_rub, venue_g_a7a5_rub_fee, venue_g_a7a5_rub_fee, SizeModel::Incremental, SizeModel::Incremental),
        perm(a, a7a5_rub, g, a7a5_rub, venue_a_fee, venue_g_a7a5_rub_fee, SizeModel::Cumulative, SizeModel::Incremental),
        perm(g, a7a5_rub, a, a7a5_rub, venue_g_a7a5_rub_fee, venue_a_fee, SizeModel::Incremental, SizeModel::Cumulative),
    ]
}

#[allow(clippy::too_many_arguments)]
fn perm(
    ask_venue: Venue,
    ask_pair: TradingPair,
    bid_venue: Venue,
    bid_pair: TradingPair,
    fee_ask: Decimal,
    fee_bid: Decimal,
    size_model_ask: SizeModel,
    size_model_bid: SizeModel,
) -> PermutationConfig {
    PermutationConfig {
        ask_venue,
        ask_pair,
        bid_venue,
        bid_pair,
        fee_ask,
        fee_bid,
        size_model_ask,
        size_model_bid,
    }
}
