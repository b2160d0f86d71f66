pub mod constants;
pub mod loading;
pub mod narration;
pub mod schedule;
pub mod sfx;

pub use constants::*;
pub use loading::*;
pub use narration::*;
pub use schedule::*;
pub use sfx::*;
