use crate::error::TransformError;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

/// Spherical earth radius used by the web mercator projection, in meters.
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Latitudes at or beyond this band have no web mercator representation;
/// the tangent/log term diverges towards the poles.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.05113;

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    #[serde(default)]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A point in web mercator (EPSG:3857) planar coordinates, meters-equivalent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MercatorPoint {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64, name: String) -> Location {
        Location {
            name,
            latitude: lat,
            longitude: lon,
        }
    }

    /// Forward web mercator projection.
    ///
    /// Rejects latitudes outside the open validity band rather than
    /// clamping or returning an infinite coordinate.
    pub fn to_web_mercator(&self) -> Result<MercatorPoint, TransformError> {
        if !(self.latitude > -MAX_MERCATOR_LATITUDE && self.latitude < MAX_MERCATOR_LATITUDE) {
            return Err(TransformError::OutOfRangeLatitude(self.latitude));
        }

        let x = self.longitude.to_radians() * EARTH_RADIUS;
        let y = (self.latitude.to_radians() / 2.0 + FRAC_PI_4).tan().ln() * EARTH_RADIUS;

        Ok(MercatorPoint { x, y })
    }
}
