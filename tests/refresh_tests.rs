use bikemap::error::FeedError;
use bikemap::refresh::{run_refresh_loop, Renderer};
use bikemap::station::BikeStation;
use geojson::FeatureCollection;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

struct RecordingRenderer {
    snapshots: Arc<Mutex<Vec<usize>>>,
}

impl Renderer for RecordingRenderer {
    fn update(&mut self, features: FeatureCollection) {
        self.snapshots.lock().unwrap().push(features.features.len());
    }
}

fn main_st() -> BikeStation {
    BikeStation::new("s1".into(), "Main St".into(), 37.7749, -122.4194, 5, 5)
}

#[tokio::test(start_paused = true)]
async fn failed_cycles_are_skipped_and_the_loop_keeps_going() {
    let snapshots = Arc::new(Mutex::new(Vec::new()));
    let renderer = RecordingRenderer {
        snapshots: snapshots.clone(),
    };

    let cycle = Arc::new(AtomicUsize::new(0));
    let fetch_cycle = cycle.clone();
    let fetch = move || {
        let n = fetch_cycle.fetch_add(1, Ordering::SeqCst);
        async move {
            if n == 1 {
                Err(FeedError::Timeout)
            } else {
                Ok(vec![main_st()])
            }
        }
    };

    let loop_task = tokio::spawn(run_refresh_loop(
        fetch,
        renderer,
        Duration::from_secs(120),
    ));

    // Paused-clock time covers the immediate first tick plus two more.
    tokio::time::sleep(Duration::from_secs(250)).await;
    loop_task.abort();

    // Three cycles ran; the middle one failed and produced no snapshot.
    assert_eq!(cycle.load(Ordering::SeqCst), 3);
    let seen = snapshots.lock().unwrap().clone();
    assert_eq!(seen, [1, 1]);
}

#[tokio::test(start_paused = true)]
async fn malformed_batch_leaves_the_renderer_on_its_last_snapshot() {
    let snapshots = Arc::new(Mutex::new(Vec::new()));
    let renderer = RecordingRenderer {
        snapshots: snapshots.clone(),
    };

    let cycle = Arc::new(AtomicUsize::new(0));
    let fetch_cycle = cycle.clone();
    let fetch = move || {
        let n = fetch_cycle.fetch_add(1, Ordering::SeqCst);
        async move {
            if n == 0 {
                Ok(vec![main_st()])
            } else {
                // A record with no identifier poisons the whole batch.
                let mut nameless = main_st();
                nameless.station_id = String::new();
                Ok(vec![main_st(), nameless])
            }
        }
    };

    let loop_task = tokio::spawn(run_refresh_loop(
        fetch,
        renderer,
        Duration::from_secs(120),
    ));

    tokio::time::sleep(Duration::from_secs(250)).await;
    loop_task.abort();

    // Only the first, well-formed cycle reached the renderer.
    let seen = snapshots.lock().unwrap().clone();
    assert_eq!(seen, [1]);
}
