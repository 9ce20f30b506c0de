/// A half of an order book. `Sell` is the ask side (the venue's "green" book),
/// `Buy` is the bid side (the "red" book).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Buy,
    Sell,
}
