// Static highlight tables for the narration track.
//
// A schedule is written as one window per text block and expanded into a
// flat, offset-ordered list of on/off events. The synchronizer arms one
// timer per event; nothing here looks at the audio position.

use smallvec::SmallVec;
use thiserror::Error;

use super::constants::{NARRATION_TOTAL_MS, PARAGRAPH_ONE_END_MS, PARAGRAPH_TWO_END_MS};

/// A highlightable region of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockId {
    Title,
    One,
    Two,
    Three,
}

impl BlockId {
    pub const ALL: [BlockId; 4] = [BlockId::Title, BlockId::One, BlockId::Two, BlockId::Three];

    /// CSS selector of the element backing this block.
    pub fn selector(self) -> &'static str {
        match self {
            BlockId::Title => ".title",
            BlockId::One => "p.one",
            BlockId::Two => "p.two",
            BlockId::Three => "p.three",
        }
    }

    /// The title spans the whole track and may overlap the paragraphs.
    pub fn is_title(self) -> bool {
        matches!(self, BlockId::Title)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HighlightAction {
    On(BlockId),
    Off(BlockId),
}

impl HighlightAction {
    pub fn block(self) -> BlockId {
        match self {
            HighlightAction::On(b) | HighlightAction::Off(b) => b,
        }
    }

    pub fn highlighted(self) -> bool {
        matches!(self, HighlightAction::On(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub offset_ms: u32,
    pub action: HighlightAction,
}

/// Half-open interval `[start_ms, end_ms)` during which a block is highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightWindow {
    pub block: BlockId,
    pub start_ms: u32,
    pub end_ms: u32,
}

impl HighlightWindow {
    pub const fn new(block: BlockId, start_ms: u32, end_ms: u32) -> Self {
        Self {
            block,
            start_ms,
            end_ms,
        }
    }

    pub fn contains(&self, t_ms: u32) -> bool {
        t_ms >= self.start_ms && t_ms < self.end_ms
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("window for {block:?} is empty ({start_ms}..{end_ms})")]
    EmptyWindow {
        block: BlockId,
        start_ms: u32,
        end_ms: u32,
    },
    #[error("{0:?} has more than one window")]
    DuplicateBlock(BlockId),
    #[error("windows for {first:?} and {second:?} overlap")]
    Overlap { first: BlockId, second: BlockId },
}

pub const NARRATION_WINDOWS: [HighlightWindow; 4] = [
    HighlightWindow::new(BlockId::Title, 0, NARRATION_TOTAL_MS),
    HighlightWindow::new(BlockId::One, 0, PARAGRAPH_ONE_END_MS),
    HighlightWindow::new(BlockId::Two, PARAGRAPH_ONE_END_MS, PARAGRAPH_TWO_END_MS),
    HighlightWindow::new(BlockId::Three, PARAGRAPH_TWO_END_MS, NARRATION_TOTAL_MS),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightSchedule {
    windows: SmallVec<[HighlightWindow; 4]>,
    events: SmallVec<[ScheduledEvent; 8]>,
}

impl HighlightSchedule {
    pub fn from_windows(windows: &[HighlightWindow]) -> Result<Self, ScheduleError> {
        for (i, w) in windows.iter().enumerate() {
            if w.end_ms <= w.start_ms {
                return Err(ScheduleError::EmptyWindow {
                    block: w.block,
                    start_ms: w.start_ms,
                    end_ms: w.end_ms,
                });
            }
            for other in &windows[..i] {
                if other.block == w.block {
                    return Err(ScheduleError::DuplicateBlock(w.block));
                }
                let paragraphs = !w.block.is_title() && !other.block.is_title();
                if paragraphs && w.start_ms < other.end_ms && other.start_ms < w.end_ms {
                    return Err(ScheduleError::Overlap {
                        first: other.block,
                        second: w.block,
                    });
                }
            }
        }

        let mut events: SmallVec<[ScheduledEvent; 8]> = windows
            .iter()
            .flat_map(|w| {
                [
                    ScheduledEvent {
                        offset_ms: w.start_ms,
                        action: HighlightAction::On(w.block),
                    },
                    ScheduledEvent {
                        offset_ms: w.end_ms,
                        action: HighlightAction::Off(w.block),
                    },
                ]
            })
            .collect();
        // stable: equal keys keep table order
        events.sort_by_key(|e| (e.offset_ms, e.action.highlighted()));

        Ok(Self {
            windows: windows.iter().copied().collect(),
            events,
        })
    }

    /// The page's narration table.
    pub fn narration() -> Self {
        Self::from_windows(&NARRATION_WINDOWS).unwrap_or_else(|e| {
            log::error!("[narration] built-in schedule rejected: {}", e);
            Self {
                windows: SmallVec::new(),
                events: SmallVec::new(),
            }
        })
    }

    pub fn events(&self) -> &[ScheduledEvent] {
        &self.events
    }

    pub fn windows(&self) -> &[HighlightWindow] {
        &self.windows
    }

    pub fn total_ms(&self) -> u32 {
        self.windows.iter().map(|w| w.end_ms).max().unwrap_or(0)
    }

    /// Blocks that should be highlighted `t_ms` after session start.
    pub fn highlighted_at(&self, t_ms: u32) -> SmallVec<[BlockId; 4]> {
        let mut blocks: SmallVec<[BlockId; 4]> = self
            .windows
            .iter()
            .filter(|w| w.contains(t_ms))
            .map(|w| w.block)
            .collect();
        blocks.sort();
        blocks
    }
}

impl Default for HighlightSchedule {
    fn default() -> Self {
        Self::narration()
    }
}
