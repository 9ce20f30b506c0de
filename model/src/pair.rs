use std::fmt;

/// The three trading pairs monitored across both venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TradingPair {
    UsdtRub,
    UsdtA7A5,
    A7A5Rub,
}

impl TradingPair {
    pub fn base(&self) -> &'static str {
        match self {
            TradingPair::UsdtRub | TradingPair::UsdtA7A5 => "USDT",
            TradingPair::A7A5Rub => "A7A5",
        }
    }

    pub fn quote(&self) -> &'static str {
        match self {
            TradingPair::UsdtRub => "RUB",
            TradingPair::UsdtA7A5 => "A7A5",
            TradingPair::A7A5Rub => "RUB",
        }
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base(), self.quote())
    }
}
