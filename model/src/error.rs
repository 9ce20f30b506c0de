use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("order price must be positive, got {0}")]
    NonPositivePrice(rust_decimal::Decimal),

    #[error("order amount must not be negative, got {0}")]
    NegativeAmount(rust_decimal::Decimal),
}
