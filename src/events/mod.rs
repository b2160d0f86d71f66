mod narration;
mod pointer;

pub use narration::{wire_narration, WebNarration};
pub use pointer::wire_sound_effects;
