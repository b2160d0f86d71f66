// Host-side tests for asset load tracking behind the loading overlay.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod loading {
    include!("../src/core/loading.rs");
}

use loading::*;

const ASSETS: [&str; 3] = ["/spacescape.mp3", "/palebluedot.mp3", "/btn.mp3"];

#[test]
fn percent_is_floored() {
    assert_eq!(progress_percent(0, 3), 0);
    assert_eq!(progress_percent(1, 3), 33);
    assert_eq!(progress_percent(2, 3), 66);
    assert_eq!(progress_percent(3, 3), 100);
    assert_eq!(progress_percent(0, 0), 100);
}

#[test]
fn progress_text_matches_overlay_format() {
    assert_eq!(progress_text(66), "🌎 Loading: 66%");
}

#[test]
fn completes_after_last_asset_settles() {
    let mut t = LoadTracker::new(ASSETS);
    assert_eq!(t.total(), 3);
    assert_eq!(t.mark_loaded("/btn.mp3"), LoadEvent::Progress { percent: 33 });
    assert_eq!(
        t.mark_loaded("/spacescape.mp3"),
        LoadEvent::Progress { percent: 66 }
    );
    assert!(!t.is_complete());
    assert_eq!(
        t.mark_loaded("/palebluedot.mp3"),
        LoadEvent::Complete {
            percent: 100,
            failed: 0
        }
    );
    assert!(t.is_complete());
}

#[test]
fn failures_count_toward_completion() {
    let mut t = LoadTracker::new(ASSETS);
    t.mark_loaded("/btn.mp3");
    t.mark_failed("/palebluedot.mp3");
    let last = t.mark_loaded("/spacescape.mp3");
    assert_eq!(
        last,
        LoadEvent::Complete {
            percent: 100,
            failed: 1
        }
    );
    assert_eq!(t.state("/palebluedot.mp3"), Some(AssetState::Failed));
}

#[test]
fn duplicate_and_unknown_events_are_ignored() {
    let mut t = LoadTracker::new(ASSETS);
    t.mark_loaded("/btn.mp3");
    assert_eq!(t.mark_loaded("/btn.mp3"), LoadEvent::Ignored);
    assert_eq!(t.mark_failed("/btn.mp3"), LoadEvent::Ignored);
    assert_eq!(t.mark_loaded("/nope.mp3"), LoadEvent::Ignored);
    assert_eq!(t.settled(), 1);
    assert_eq!(t.state("/btn.mp3"), Some(AssetState::Loaded));
}

#[test]
fn empty_tracker_is_already_complete() {
    let t = LoadTracker::new(Vec::<&str>::new());
    assert!(t.is_complete());
    assert_eq!(t.total(), 0);
}

#[test]
fn empty_tracker_snapshot_hides_overlay_at_once() {
    let t = LoadTracker::new(Vec::<&str>::new());
    assert_eq!(
        t.snapshot(),
        LoadEvent::Complete {
            percent: 100,
            failed: 0
        }
    );
}

#[test]
fn snapshot_reports_progress_while_waiting() {
    let mut t = LoadTracker::new(ASSETS);
    assert_eq!(t.snapshot(), LoadEvent::Progress { percent: 0 });
    t.mark_loaded("/btn.mp3");
    assert_eq!(t.snapshot(), LoadEvent::Progress { percent: 33 });
}

#[test]
fn expiring_defers_assets_the_browser_never_fetched() {
    let mut t = LoadTracker::new(ASSETS);
    t.mark_loaded("/btn.mp3");
    t.mark_failed("/spacescape.mp3");

    assert_eq!(
        t.expire_pending(),
        LoadEvent::Complete {
            percent: 100,
            failed: 1
        }
    );
    assert!(t.is_complete());
    assert_eq!(t.state("/palebluedot.mp3"), Some(AssetState::Deferred));
    assert_eq!(t.state("/btn.mp3"), Some(AssetState::Loaded));
}

#[test]
fn late_load_after_expiry_is_ignored() {
    let mut t = LoadTracker::new(ASSETS);
    t.expire_pending();
    assert_eq!(t.mark_loaded("/palebluedot.mp3"), LoadEvent::Ignored);
    assert_eq!(t.mark_failed("/btn.mp3"), LoadEvent::Ignored);
    assert_eq!(t.failed(), 0);
}

#[test]
fn expiry_after_everything_settled_changes_nothing() {
    let mut t = LoadTracker::new(ASSETS);
    for a in ASSETS {
        t.mark_loaded(a);
    }
    assert_eq!(t.expire_pending(), LoadEvent::Ignored);
    assert_eq!(t.state("/btn.mp3"), Some(AssetState::Loaded));
}
