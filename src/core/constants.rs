// Narration timing and sound effect tables shared by the web frontend.

// Narration track layout (milliseconds from session start)
pub const NARRATION_TOTAL_MS: u32 = 185_500;
pub const PARAGRAPH_ONE_END_MS: u32 = 60_000;
pub const PARAGRAPH_TWO_END_MS: u32 = 135_000;

// Fallback cleanup if the `ended` event never arrives
pub const SAFETY_DEADLINE_MS: u32 = NARRATION_TOTAL_MS;

// Toggle control labels
pub const LABEL_START: &str = "Play Speech";
pub const LABEL_STOP: &str = "Stop Speech";

// Playback rates cycled by the one-shot effects
pub const PITCH_RATES: &[f32] = &[1.0, 1.4, 1.2, 1.8, 1.2];
pub const DRAG_PITCH_RATES: &[f32] = &[1.0];

// Fixed-rate hover chirp on the speech control
pub const HOVER_BUTTON_RATE: f32 = 1.85;

// Loading overlay text
pub const LOADING_START_TEXT: &str = "🌎 Loading assets...";
pub const LOADING_PREFIX: &str = "🌎 Loading:";

// Overlay gives up waiting on assets the browser will not preload
pub const LOADING_FALLBACK_MS: u32 = 8_000;
