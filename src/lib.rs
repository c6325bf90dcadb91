//! Live bikeshare stations as web-mercator GeoJSON.
//!
//! Fetches a system's GBFS station feeds, projects every station into web
//! mercator, encodes occupancy as viridis color and capacity as marker size,
//! and hands the renderer a complete `FeatureCollection` on a fixed refresh
//! period.

pub mod encoding;
pub mod error;
pub mod feed;
pub mod location;
pub mod palette;
pub mod pipeline;
pub mod refresh;
pub mod station;
