use crate::encoding::{color_for_ratio, occupancy_ratio, size_for_counts};
use crate::error::TransformError;
use crate::station::{BikeStation, Station};
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

impl TryFrom<&BikeStation> for Feature {
    type Error = TransformError;

    fn try_from(station: &BikeStation) -> Result<Feature, TransformError> {
        if station.station_id.trim().is_empty() {
            return Err(TransformError::MalformedStationRecord(
                "missing station identifier",
            ));
        }

        if !station.latitude.is_finite() || !station.longitude.is_finite() {
            return Err(TransformError::MalformedStationRecord(
                "non-finite coordinate",
            ));
        }

        let point = station.location().to_web_mercator()?;
        let ratio = occupancy_ratio(station.bikes, station.free);
        let color = color_for_ratio(ratio);
        let size = size_for_counts(station.bikes, station.free);

        let geometry = Geometry::new(Value::Point(vec![point.x, point.y]));

        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), JsonValue::from(station.name()));
        properties.insert("bikes".to_string(), JsonValue::from(station.bikes));
        properties.insert("free".to_string(), JsonValue::from(station.free));
        properties.insert("ratio".to_string(), JsonValue::from(ratio));
        properties.insert("color".to_string(), JsonValue::from(color.hex()));
        properties.insert("size".to_string(), JsonValue::from(size));

        Ok(Feature {
            bbox: None,
            geometry: Some(geometry),
            id: Some(Id::String(station.station_id.clone())),
            properties: Some(properties),
            foreign_members: None,
        })
    }
}

/// Builds the renderer's snapshot: one feature per station, input order
/// preserved. Fails the whole call on the first bad record so the renderer
/// only ever sees a complete, consistent collection.
pub fn build_feature_collection(
    stations: &[BikeStation],
) -> Result<FeatureCollection, TransformError> {
    let mut features = Vec::with_capacity(stations.len());
    for station in stations {
        features.push(Feature::try_from(station)?);
    }

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
