// Narration playback synchronizer.
//
// Owns one playback session of the narration track at a time. Starting a
// session arms one one-shot timer per highlight event plus a safety
// deadline; every way a session can end funnels through `NarrationSync::teardown`,
// which cancels whatever is still pending and clears the page back to its
// idle look.
//
// The collaborators are traits so the browser front-end and host tests can
// plug in their own audio, DOM and timer implementations. Timers carry a
// `TimerKey` rather than a closure; the host hands the key back through
// `NarrationSync::on_timer` when it fires.

use fnv::FnvHashMap;
use instant::Instant;
use std::fmt::Debug;
use thiserror::Error;

use super::constants::{LABEL_START, LABEL_STOP, SAFETY_DEADLINE_MS};
use super::schedule::{BlockId, HighlightSchedule};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("audio resource {0} is not available")]
    Unavailable(String),
    #[error("playback of {resource} was refused: {reason}")]
    Refused { resource: String, reason: String },
}

/// Starts, stops and queries instances of an audio resource.
pub trait AudioPlayback {
    type Handle: Copy + Eq + Debug;

    fn start(&mut self, resource: &str) -> Result<Self::Handle, PlaybackError>;
    fn stop(&mut self, handle: Self::Handle);
    fn is_playing(&self, handle: Self::Handle) -> bool;
}

/// The visual surface the synchronizer drives.
pub trait Presentation {
    fn set_highlighted(&mut self, block: BlockId, highlighted: bool);
    fn set_toggle_label(&mut self, text: &str);
    fn set_toggle_visual_state(&mut self, active: bool);
}

/// Monotonic, cancellable one-shot timers.
pub trait Scheduler {
    type Handle;

    fn after(&mut self, delay_ms: u32, key: TimerKey) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    /// Index into the schedule's event list.
    Event(usize),
    Deadline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub session: u64,
    pub slot: TimerSlot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Started,
    Stopped,
    /// The track could not be started; the control stays in its start state.
    Unavailable,
}

#[derive(Clone, Debug)]
pub struct NarrationConfig {
    pub resource: String,
    pub schedule: HighlightSchedule,
    pub safety_deadline_ms: u32,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            resource: "/palebluedot.mp3".to_string(),
            schedule: HighlightSchedule::narration(),
            safety_deadline_ms: SAFETY_DEADLINE_MS,
        }
    }
}

struct Session<H> {
    id: u64,
    track: H,
    started_at: Instant,
}

pub struct NarrationSync<A: AudioPlayback, P: Presentation, S: Scheduler> {
    pub audio: A,
    pub presentation: P,
    pub scheduler: S,
    config: NarrationConfig,
    session: Option<Session<A::Handle>>,
    pending: FnvHashMap<TimerKey, S::Handle>,
    next_session_id: u64,
}

impl<A: AudioPlayback, P: Presentation, S: Scheduler> NarrationSync<A, P, S> {
    pub fn new(config: NarrationConfig, audio: A, presentation: P, scheduler: S) -> Self {
        Self {
            audio,
            presentation,
            scheduler,
            config,
            session: None,
            pending: FnvHashMap::default(),
            next_session_id: 1,
        }
    }

    pub fn config(&self) -> &NarrationConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_track(&self) -> Option<A::Handle> {
        self.session.as_ref().map(|s| s.track)
    }

    pub fn session_id(&self) -> Option<u64> {
        self.session.as_ref().map(|s| s.id)
    }

    pub fn pending_timers(&self) -> usize {
        self.pending.len()
    }

    /// Play/stop decision for one press of the toggle control.
    pub fn toggle(&mut self) -> ToggleOutcome {
        if let Some(track) = self.current_track() {
            if self.audio.is_playing(track) {
                self.audio.stop(track);
                self.teardown();
                return ToggleOutcome::Stopped;
            }
            log::info!("[narration] stale track {:?}, restarting", track);
            self.audio.stop(track);
            self.teardown();
        }
        self.start_session()
    }

    fn start_session(&mut self) -> ToggleOutcome {
        let track = match self.audio.start(&self.config.resource) {
            Ok(t) => t,
            Err(e) => {
                log::error!("[narration] {}", e);
                return ToggleOutcome::Unavailable;
            }
        };
        let id = self.next_session_id;
        self.next_session_id += 1;
        self.session = Some(Session {
            id,
            track,
            started_at: Instant::now(),
        });

        self.presentation.set_toggle_label(LABEL_STOP);
        self.presentation.set_toggle_visual_state(true);

        for (i, ev) in self.config.schedule.events().iter().enumerate() {
            let key = TimerKey {
                session: id,
                slot: TimerSlot::Event(i),
            };
            let handle = self.scheduler.after(ev.offset_ms, key);
            self.pending.insert(key, handle);
        }
        // Not tracked in `pending`: a deadline outliving its session is ignored by id.
        let _ = self.scheduler.after(
            self.config.safety_deadline_ms,
            TimerKey {
                session: id,
                slot: TimerSlot::Deadline,
            },
        );

        log::info!(
            "[narration] session {} started, {} timers armed",
            id,
            self.pending.len()
        );
        ToggleOutcome::Started
    }

    /// Single exit path for every way a session ends. Safe to repeat.
    pub fn teardown(&mut self) {
        for (_, handle) in self.pending.drain() {
            self.scheduler.cancel(handle);
        }
        for block in BlockId::ALL {
            self.presentation.set_highlighted(block, false);
        }
        self.presentation.set_toggle_label(LABEL_START);
        self.presentation.set_toggle_visual_state(false);

        if let Some(s) = self.session.take() {
            log::info!(
                "[narration] session {} ended after {:.1}s",
                s.id,
                s.started_at.elapsed().as_secs_f32()
            );
        }
    }

    /// Entry point for fired timers.
    pub fn on_timer(&mut self, key: TimerKey) {
        if self.session_id() != Some(key.session) {
            log::debug!("[narration] ignoring timer {:?} from a finished session", key);
            return;
        }
        match key.slot {
            TimerSlot::Event(i) => {
                if self.pending.remove(&key).is_none() {
                    return;
                }
                if let Some(ev) = self.config.schedule.events().get(i) {
                    self.presentation
                        .set_highlighted(ev.action.block(), ev.action.highlighted());
                }
            }
            TimerSlot::Deadline => {
                let playing = self
                    .current_track()
                    .map(|t| self.audio.is_playing(t))
                    .unwrap_or(false);
                if !playing {
                    self.teardown();
                }
            }
        }
    }

    /// Natural completion reported by the audio service.
    pub fn on_track_ended(&mut self, track: A::Handle) {
        if self.current_track() == Some(track) {
            self.teardown();
        }
    }
}
