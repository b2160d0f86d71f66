// Page wiring constants: element selectors, asset paths and mix levels.
//
// Timing tables that the host tests exercise live in `core/constants.rs`;
// everything here only matters to the browser front-end.
use crate::core::OneShot;

// Elements
pub const CANVAS_ID: &str = "bg";
pub const LOADING_ID: &str = "loading";
pub const LOADING_TEXT_ID: &str = "loading-text";
pub const SPEECH_SELECTOR: &str = ".speech";
pub const HOVER_SELECTOR: &str = ".hover";
pub const CANVAS_SELECTOR: &str = "canvas";

// CSS classes toggled by the narration synchronizer
pub const HIGHLIGHT_CLASS: &str = "highlighted";
pub const BUTTON_STOP_CLASS: &str = "button-stop";

// Long-running tracks
pub const AMBIENT_SRC: &str = "/spacescape.mp3";
pub const AMBIENT_RATE: f64 = 0.8;
pub const AMBIENT_VOLUME: f64 = 0.2;
pub const NARRATION_SRC: &str = "/palebluedot.mp3";
pub const NARRATION_VOLUME: f64 = 0.85;

// One-shots; rates of the cycling ones are overwritten per play
pub const HOVER_TEXT: OneShot = OneShot {
    src: "/text.mp3",
    volume: 0.1,
    rate: 1.0,
};
pub const CANVAS_CLICK: OneShot = OneShot {
    src: "/drag-earth2.mp3",
    volume: 0.1,
    rate: 1.0,
};
pub const BUTTON_CLICK: OneShot = OneShot {
    src: "/button.mp3",
    volume: 0.1,
    rate: 1.0,
};
pub const BUTTON_HOVER: OneShot = OneShot {
    src: "/btn.mp3",
    volume: 0.2,
    rate: crate::core::HOVER_BUTTON_RATE as f64,
};

/// Assets the loading overlay waits for.
pub const PRELOAD: [&str; 6] = [
    AMBIENT_SRC,
    NARRATION_SRC,
    HOVER_TEXT.src,
    CANVAS_CLICK.src,
    BUTTON_CLICK.src,
    BUTTON_HOVER.src,
];
