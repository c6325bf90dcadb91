use crate::location::Location;
use serde::{Deserialize, Serialize};

pub trait Station {
    fn id(&self) -> &str;
    fn location(&self) -> Location;
    fn name(&self) -> String;
}

/// One bikeshare station as of a single feed fetch. Snapshots are immutable;
/// every refresh builds a fresh set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BikeStation {
    pub station_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Bikes currently available for rental.
    pub bikes: u32,

    /// Empty docks currently available for returns.
    pub free: u32,
}

impl BikeStation {
    pub fn new(
        station_id: String,
        name: String,
        latitude: f64,
        longitude: f64,
        bikes: u32,
        free: u32,
    ) -> BikeStation {
        BikeStation {
            station_id,
            name,
            latitude,
            longitude,
            bikes,
            free,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.bikes + self.free
    }
}

impl Station for BikeStation {
    fn id(&self) -> &str {
        &self.station_id
    }

    fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude, self.name())
    }

    fn name(&self) -> String {
        self.name.trim().to_string()
    }
}
