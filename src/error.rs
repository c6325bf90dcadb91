use thiserror::Error;

/// Failures raised while turning station records into map features. These are
/// terminal to the pipeline call that raised them; the scheduler decides
/// whether to retry on a later tick.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// Latitude outside the (-85.05113, 85.05113) web mercator validity band.
    #[error("latitude {0} is outside the web mercator validity band")]
    OutOfRangeLatitude(f64),

    /// The feed reported a negative bike or dock count.
    #[error("station {station_id} has a negative {field} count ({value})")]
    InvalidCount {
        station_id: String,
        field: &'static str,
        value: i64,
    },

    /// The record is missing a usable identifier or coordinate.
    #[error("malformed station record: {0}")]
    MalformedStationRecord(&'static str),
}

/// Failures raised while fetching or decoding a GBFS feed document. All of
/// these are recoverable by skipping the current refresh cycle.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request timed out")]
    Timeout,

    #[error("feed unavailable: {0}")]
    Unavailable(reqwest::Error),

    #[error("failed to parse feed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FeedError::Timeout
        } else {
            FeedError::Unavailable(err)
        }
    }
}
