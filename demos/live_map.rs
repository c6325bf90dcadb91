use std::fs;
use std::path::PathBuf;

use bikemap::feed::GbfsFeed;
use bikemap::refresh::{run_refresh_loop, Renderer, DEFAULT_REFRESH_INTERVAL};
use geojson::FeatureCollection;

/// Stand-in for a map front end: writes each snapshot to a GeoJSON file
/// that a tile-backed viewer can poll.
struct FileRenderer {
    path: PathBuf,
}

impl Renderer for FileRenderer {
    fn update(&mut self, features: FeatureCollection) {
        match serde_json::to_string(&features) {
            Ok(geojson) => {
                if let Err(why) = fs::write(&self.path, geojson) {
                    eprintln!("failed to write {}: {}", self.path.display(), why);
                }
            }
            Err(why) => eprintln!("failed to serialize snapshot: {}", why),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let feed = GbfsFeed::bay_wheels().expect("failed to build the feed client");
    let renderer = FileRenderer {
        path: PathBuf::from("bay_wheels.geojson"),
    };

    println!(
        "Writing bay-wheels snapshots to bay_wheels.geojson every {}s",
        DEFAULT_REFRESH_INTERVAL.as_secs()
    );

    run_refresh_loop(|| feed.fetch_stations(), renderer, DEFAULT_REFRESH_INTERVAL).await;
}
