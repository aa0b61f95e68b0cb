//! Shared vocabulary for Long Shot.
//!
//! This crate holds the small set of types every other crate speaks:
//! slide identities, sound cue names, and the analytics session id.
//! It deliberately has no behavior beyond conversions and display.

mod cue;
mod ids;
mod slide;

pub use cue::Cue;
pub use ids::SessionId;
pub use slide::{SlideId, TOTAL_SLIDES};
