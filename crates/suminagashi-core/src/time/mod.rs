//! Time subsystem.
//!
//! Provides the interval clock behind the periodic synthetic drop source.
//! Rendering cadence is the display's business; updates are event-driven, so
//! the only clock the core needs is "how many synthetic drops are due".

mod ticker;

pub use ticker::DropTicker;
