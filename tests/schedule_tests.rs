// Host-side tests for highlight schedule construction.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod schedule {
    include!("../src/core/schedule.rs");
}

use constants::*;
use schedule::*;

#[test]
fn narration_table_has_eight_ordered_events() {
    let s = HighlightSchedule::narration();
    let events = s.events();
    assert_eq!(events.len(), 8);
    for pair in events.windows(2) {
        assert!(pair[0].offset_ms <= pair[1].offset_ms);
    }
    assert_eq!(events[0].action, HighlightAction::On(BlockId::Title));
    assert_eq!(events[1].action, HighlightAction::On(BlockId::One));
    assert_eq!(s.total_ms(), NARRATION_TOTAL_MS);
}

#[test]
fn every_block_is_switched_on_then_off_once() {
    let s = HighlightSchedule::narration();
    for block in BlockId::ALL {
        let on: Vec<_> = s
            .events()
            .iter()
            .filter(|e| e.action == HighlightAction::On(block))
            .collect();
        let off: Vec<_> = s
            .events()
            .iter()
            .filter(|e| e.action == HighlightAction::Off(block))
            .collect();
        assert_eq!(on.len(), 1, "{block:?}");
        assert_eq!(off.len(), 1, "{block:?}");
        assert!(on[0].offset_ms < off[0].offset_ms);
    }
}

#[test]
fn off_sorts_before_on_at_shared_offset() {
    let s = HighlightSchedule::narration();
    let at_60s: Vec<_> = s
        .events()
        .iter()
        .filter(|e| e.offset_ms == PARAGRAPH_ONE_END_MS)
        .map(|e| e.action)
        .collect();
    assert_eq!(
        at_60s,
        vec![
            HighlightAction::Off(BlockId::One),
            HighlightAction::On(BlockId::Two)
        ]
    );
}

#[test]
fn paragraphs_tile_the_track() {
    let s = HighlightSchedule::narration();
    let mut paragraphs: Vec<_> = s
        .windows()
        .iter()
        .filter(|w| !w.block.is_title())
        .copied()
        .collect();
    paragraphs.sort_by_key(|w| w.start_ms);
    assert_eq!(paragraphs.first().map(|w| w.start_ms), Some(0));
    for pair in paragraphs.windows(2) {
        assert_eq!(pair[0].end_ms, pair[1].start_ms);
    }
    assert_eq!(paragraphs.last().map(|w| w.end_ms), Some(NARRATION_TOTAL_MS));
}

#[test]
fn highlighted_at_uses_half_open_windows() {
    let s = HighlightSchedule::narration();
    assert_eq!(
        s.highlighted_at(0).as_slice(),
        &[BlockId::Title, BlockId::One]
    );
    assert_eq!(
        s.highlighted_at(59_999).as_slice(),
        &[BlockId::Title, BlockId::One]
    );
    assert_eq!(
        s.highlighted_at(60_000).as_slice(),
        &[BlockId::Title, BlockId::Two]
    );
    assert_eq!(
        s.highlighted_at(135_000).as_slice(),
        &[BlockId::Title, BlockId::Three]
    );
    assert!(s.highlighted_at(NARRATION_TOTAL_MS).is_empty());
}

#[test]
fn exactly_one_paragraph_at_any_instant() {
    let s = HighlightSchedule::narration();
    for t in (0..NARRATION_TOTAL_MS).step_by(2_500) {
        let lit = s.highlighted_at(t);
        assert!(lit.contains(&BlockId::Title), "title off at {t}");
        assert_eq!(lit.iter().filter(|b| !b.is_title()).count(), 1, "at {t}");
    }
}

#[test]
fn rejects_empty_window() {
    let err = HighlightSchedule::from_windows(&[HighlightWindow::new(BlockId::One, 500, 500)]);
    assert_eq!(
        err,
        Err(ScheduleError::EmptyWindow {
            block: BlockId::One,
            start_ms: 500,
            end_ms: 500
        })
    );
}

#[test]
fn rejects_duplicate_block() {
    let err = HighlightSchedule::from_windows(&[
        HighlightWindow::new(BlockId::Two, 0, 10),
        HighlightWindow::new(BlockId::Two, 20, 30),
    ]);
    assert_eq!(err, Err(ScheduleError::DuplicateBlock(BlockId::Two)));
}

#[test]
fn rejects_overlapping_paragraphs_but_not_title() {
    let err = HighlightSchedule::from_windows(&[
        HighlightWindow::new(BlockId::One, 0, 100),
        HighlightWindow::new(BlockId::Two, 99, 200),
    ]);
    assert_eq!(
        err,
        Err(ScheduleError::Overlap {
            first: BlockId::One,
            second: BlockId::Two
        })
    );

    let ok = HighlightSchedule::from_windows(&[
        HighlightWindow::new(BlockId::Title, 0, 200),
        HighlightWindow::new(BlockId::One, 0, 100),
        HighlightWindow::new(BlockId::Two, 100, 200),
    ]);
    assert!(ok.is_ok());
}

#[test]
fn empty_table_has_zero_length() {
    let s = HighlightSchedule::from_windows(&[]).unwrap();
    assert!(s.events().is_empty());
    assert_eq!(s.total_ms(), 0);
}

#[test]
fn selectors_match_page_markup() {
    assert_eq!(BlockId::Title.selector(), ".title");
    assert_eq!(BlockId::One.selector(), "p.one");
    assert_eq!(BlockId::Two.selector(), "p.two");
    assert_eq!(BlockId::Three.selector(), "p.three");
}
