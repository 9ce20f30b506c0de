mod fetcher;
mod retry;
mod throttle;
mod venue_a;
mod venue_g;

pub use fetcher::{FetchError, OrderBookFetcher};
pub use retry::RetryingFetcher;
pub use throttle::ThrottledFetcher;
pub use venue_a::VenueAFetcher;
pub use venue_g::VenueGFetcher;
