use bikemap::feed::{
    merge_station_feeds, StationInformationResponse, StationStatusResponse,
};
use bikemap::pipeline::build_feature_collection;
use bikemap::station::BikeStation;
use serde_json::Value;
use std::fs;

fn mock_stations() -> Vec<BikeStation> {
    let information = StationInformationResponse::from_raw_data(
        &fs::read_to_string("mock/station_information.json").unwrap(),
    )
    .unwrap();
    let status = StationStatusResponse::from_raw_data(
        &fs::read_to_string("mock/station_status.json").unwrap(),
    )
    .unwrap();

    merge_station_feeds(&information.data.stations, &status.data.stations).unwrap()
}

#[test]
fn serialized_collection_matches_the_wire_contract() {
    let stations = mock_stations();
    let collection = build_feature_collection(&stations).unwrap();
    let wire: Value = serde_json::to_value(&collection).unwrap();

    assert_eq!(wire["type"], "FeatureCollection");

    let features = wire["features"].as_array().unwrap();
    assert_eq!(features.len(), stations.len());

    for (feature, station) in features.iter().zip(&stations) {
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["id"], station.station_id.as_str());
        assert_eq!(feature["geometry"]["type"], "Point");

        let coordinates = feature["geometry"]["coordinates"].as_array().unwrap();
        assert_eq!(coordinates.len(), 2);
        assert!(coordinates[0].as_f64().unwrap().is_finite());
        assert!(coordinates[1].as_f64().unwrap().is_finite());

        let properties = &feature["properties"];
        assert_eq!(properties["name"], station.name.as_str());
        assert_eq!(properties["bikes"], station.bikes);
        assert_eq!(properties["free"], station.free);
        assert!(properties["color"].as_str().unwrap().starts_with('#'));
        assert!(properties["size"].as_f64().is_some());
    }
}

#[test]
fn projected_coordinates_land_in_the_san_francisco_viewport() {
    let collection = build_feature_collection(&mock_stations()).unwrap();
    let wire: Value = serde_json::to_value(&collection).unwrap();

    // The original display frames roughly this web mercator window.
    for feature in wire["features"].as_array().unwrap() {
        let coordinates = feature["geometry"]["coordinates"].as_array().unwrap();
        let x = coordinates[0].as_f64().unwrap();
        let y = coordinates[1].as_f64().unwrap();
        assert!((-13_650_000.0..-13_600_000.0).contains(&x));
        assert!((4_540_000.0..4_549_761.0).contains(&y));
    }
}

#[test]
fn out_of_service_station_renders_as_empty() {
    let collection = build_feature_collection(&mock_stations()).unwrap();
    let wire: Value = serde_json::to_value(&collection).unwrap();

    let powell = &wire["features"].as_array().unwrap()[2]["properties"];
    assert_eq!(powell["ratio"], 0.0);
    assert_eq!(powell["color"], "#440154");
    assert_eq!(powell["size"], 0.0);
}

#[test]
fn rebuilding_from_identical_input_is_byte_identical() {
    let stations = mock_stations();

    let first = serde_json::to_string(&build_feature_collection(&stations).unwrap()).unwrap();
    let second = serde_json::to_string(&build_feature_collection(&stations).unwrap()).unwrap();
    assert_eq!(first, second);
}
