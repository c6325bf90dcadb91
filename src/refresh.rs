use crate::error::FeedError;
use crate::pipeline::build_feature_collection;
use crate::station::BikeStation;
use geojson::FeatureCollection;
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

/// The original display refreshes every two minutes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(120);

/// Owner of the display surface. `update` swaps in a complete snapshot;
/// implementations never see a partial collection.
pub trait Renderer {
    fn update(&mut self, features: FeatureCollection);
}

/// One fetch-and-transform cycle.
pub async fn refresh_once<F, Fut>(fetch: &mut F) -> Result<FeatureCollection, FeedError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Vec<BikeStation>, FeedError>>,
{
    let stations = fetch().await?;
    Ok(build_feature_collection(&stations)?)
}

/// Fetches and re-renders on a fixed period, starting immediately. Cycles
/// run one at a time; a tick that fires while the previous cycle is still
/// in flight is dropped rather than queued. A failed cycle is logged and
/// skipped, leaving the renderer on its last good snapshot.
pub async fn run_refresh_loop<F, Fut, R>(mut fetch: F, mut renderer: R, period: Duration)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Vec<BikeStation>, FeedError>>,
    R: Renderer,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        match refresh_once(&mut fetch).await {
            Ok(features) => {
                info!(stations = features.features.len(), "refreshed station snapshot");
                renderer.update(features);
            }
            Err(why) => {
                warn!(error = %why, "refresh failed, keeping previous snapshot");
            }
        }
    }
}
