use crate::error::{FeedError, TransformError};
use crate::station::BikeStation;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Envelope wrapping every GBFS document.
#[derive(Debug, Clone, Deserialize)]
pub struct GbfsResponse<T> {
    pub last_updated: i64,
    pub ttl: u32,
    pub data: T,
}

impl<T: DeserializeOwned> GbfsResponse<T> {
    pub fn from_raw_data(raw_data: &str) -> Result<Self, FeedError> {
        Ok(serde_json::from_str(raw_data)?)
    }
}

impl<T> GbfsResponse<T> {
    /// Publication time of the document, when the feed reports a valid
    /// epoch timestamp.
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.last_updated, 0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationList<T> {
    pub stations: Vec<T>,
}

/// One entry of a `station_information.json` document.
#[derive(Debug, Clone, Deserialize)]
pub struct StationInformation {
    pub station_id: String,
    pub name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// One entry of a `station_status.json` document. Counts are kept signed
/// here so a misbehaving feed surfaces as an error instead of wrapping.
#[derive(Debug, Clone, Deserialize)]
pub struct StationStatus {
    pub station_id: String,
    pub num_bikes_available: i64,
    pub num_docks_available: i64,
}

impl StationStatus {
    fn checked_count(&self, field: &'static str, value: i64) -> Result<u32, TransformError> {
        u32::try_from(value).map_err(|_| TransformError::InvalidCount {
            station_id: self.station_id.clone(),
            field,
            value,
        })
    }
}

pub type StationInformationResponse = GbfsResponse<StationList<StationInformation>>;
pub type StationStatusResponse = GbfsResponse<StationList<StationStatus>>;

/// Joins the information and status documents on station id, preserving the
/// information document's order. Stations with no status entry yet are
/// skipped; the two documents are published on separate cadences and a
/// little skew between them is normal.
pub fn merge_station_feeds(
    information: &[StationInformation],
    status: &[StationStatus],
) -> Result<Vec<BikeStation>, TransformError> {
    let status_by_id: HashMap<&str, &StationStatus> = status
        .iter()
        .map(|entry| (entry.station_id.as_str(), entry))
        .collect();

    let mut stations = Vec::with_capacity(information.len());
    for info in information {
        let Some(status) = status_by_id.get(info.station_id.as_str()) else {
            debug!(station_id = %info.station_id, "station has no status entry, skipping");
            continue;
        };

        let bikes = status.checked_count("bikes", status.num_bikes_available)?;
        let free = status.checked_count("free", status.num_docks_available)?;

        stations.push(BikeStation::new(
            info.station_id.clone(),
            info.name.clone(),
            info.latitude,
            info.longitude,
            bikes,
            free,
        ));
    }

    Ok(stations)
}

/// Client for one GBFS system's station feeds.
#[derive(Debug, Clone)]
pub struct GbfsFeed {
    station_information_url: String,
    station_status_url: String,
    client: reqwest::Client,
}

impl GbfsFeed {
    pub fn new(
        station_information_url: impl Into<String>,
        station_status_url: impl Into<String>,
    ) -> Result<GbfsFeed, FeedError> {
        Self::with_timeout(
            station_information_url,
            station_status_url,
            DEFAULT_FETCH_TIMEOUT,
        )
    }

    pub fn with_timeout(
        station_information_url: impl Into<String>,
        station_status_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<GbfsFeed, FeedError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(GbfsFeed {
            station_information_url: station_information_url.into(),
            station_status_url: station_status_url.into(),
            client,
        })
    }

    /// The Bay Area system the original display tracks.
    pub fn bay_wheels() -> Result<GbfsFeed, FeedError> {
        Self::new(
            "https://gbfs.baywheels.com/gbfs/en/station_information.json",
            "https://gbfs.baywheels.com/gbfs/en/station_status.json",
        )
    }

    /// Fetches both station documents and merges them into one snapshot.
    pub async fn fetch_stations(&self) -> Result<Vec<BikeStation>, FeedError> {
        let information: StationInformationResponse =
            self.fetch_document(&self.station_information_url).await?;
        let status: StationStatusResponse =
            self.fetch_document(&self.station_status_url).await?;

        debug!(
            information = information.data.stations.len(),
            status = status.data.stations.len(),
            "fetched station documents"
        );

        Ok(merge_station_feeds(
            &information.data.stations,
            &status.data.stations,
        )?)
    }

    async fn fetch_document<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<GbfsResponse<T>, FeedError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}
