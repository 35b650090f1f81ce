use serde::{Deserialize, Serialize};

/// Approximate position resolved for the caller's public address.
/// Deserializes straight from the geolocation payload; extra fields are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One predicted visibility window, in the pass service's wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassWindow {
    /// Start of the window, epoch seconds.
    pub risetime: i64,
    /// How long the object stays visible, in seconds.
    pub duration: u64,
}

/// Upcoming passes in service order (chronological), typically five or fewer.
pub type PassList = Vec<PassWindow>;
