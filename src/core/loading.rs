// Bookkeeping behind the loading overlay.
//
// Every preloaded asset settles exactly once: loaded, failed, or deferred
// when the browser would not preload it in time. The overlay goes away once
// all of them have settled; a missing sound is logged and the page carries
// on without it.

use fnv::FnvHashMap;

use super::constants::LOADING_PREFIX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetState {
    Pending,
    Loaded,
    Failed,
    /// Still loading when the overlay stopped waiting; fetched on first play.
    Deferred,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadEvent {
    Progress { percent: u32 },
    /// Last asset settled; carries the final percentage.
    Complete { percent: u32, failed: usize },
    /// Duplicate or unknown notification.
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct LoadTracker {
    assets: FnvHashMap<String, AssetState>,
}

impl LoadTracker {
    pub fn new<'a>(urls: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            assets: urls
                .into_iter()
                .map(|u| (u.to_string(), AssetState::Pending))
                .collect(),
        }
    }

    pub fn total(&self) -> usize {
        self.assets.len()
    }

    pub fn settled(&self) -> usize {
        self.assets
            .values()
            .filter(|s| **s != AssetState::Pending)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.assets
            .values()
            .filter(|s| **s == AssetState::Failed)
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.settled() == self.total()
    }

    pub fn state(&self, url: &str) -> Option<AssetState> {
        self.assets.get(url).copied()
    }

    /// Current overlay state, `Complete` straight away for an empty tracker.
    pub fn snapshot(&self) -> LoadEvent {
        let percent = progress_percent(self.settled(), self.total());
        if self.is_complete() {
            LoadEvent::Complete {
                percent,
                failed: self.failed(),
            }
        } else {
            LoadEvent::Progress { percent }
        }
    }

    /// Stop waiting: every pending asset becomes `Deferred`.
    pub fn expire_pending(&mut self) -> LoadEvent {
        let mut expired = 0;
        for state in self.assets.values_mut() {
            if *state == AssetState::Pending {
                *state = AssetState::Deferred;
                expired += 1;
            }
        }
        if expired == 0 {
            return LoadEvent::Ignored;
        }
        self.snapshot()
    }

    pub fn mark_loaded(&mut self, url: &str) -> LoadEvent {
        self.settle(url, AssetState::Loaded)
    }

    pub fn mark_failed(&mut self, url: &str) -> LoadEvent {
        self.settle(url, AssetState::Failed)
    }

    fn settle(&mut self, url: &str, to: AssetState) -> LoadEvent {
        match self.assets.get_mut(url) {
            Some(state) if *state == AssetState::Pending => *state = to,
            _ => return LoadEvent::Ignored,
        }
        self.snapshot()
    }
}

#[inline]
pub fn progress_percent(settled: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    ((settled.min(total) * 100) / total) as u32
}

pub fn progress_text(percent: u32) -> String {
    format!("{} {}%", LOADING_PREFIX, percent)
}
