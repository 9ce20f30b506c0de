use std::fmt;

/// One of the two spot venues this system watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Venue {
    VenueA,
    VenueG,
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Venue::VenueA => write!(f, "venue_a"),
            Venue::VenueG => write!(f, "venue_g"),
        }
    }
}
