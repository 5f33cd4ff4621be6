//! A headless viewport-tracking engine.
//!
//! For adapter-level utilities (subscription lifecycle, tween animations), see the
//! `scrollfire-adapter` crate.
//!
//! This crate implements the scroll dispatch core: a per-element visibility state machine that
//! fires one-shot callbacks when elements cross the top/bottom of the viewport (`topIn`,
//! `topOut`, `bottomIn`, `bottomOut` and their full-visibility counterparts), continuous scroll
//! callbacks, and a parallax positioner that derives a child's target offset from its
//! container's scroll progress.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - viewport scroll offset and height ([`Geometry::viewport`])
//! - per-element document geometry ([`Geometry::element`])
//! - an animation sink for parallax moves ([`Animator`])
//! - one [`Tracker::tick`] call per scroll, resize or load notification
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("scrollfire requires either the `std` or the `libm` feature");

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod easing;
mod error;
mod flags;
mod host;
mod math;
mod options;
mod parallax;
mod record;
mod tracker;
mod types;
mod visibility;


pub use easing::Easing;
pub use error::{Result, TickError};
pub use flags::OnceFlags;
pub use host::{Animator, Geometry};
pub use options::{Callback, Callbacks, Offset, Offsets, TrackOptions};
pub use parallax::ParallaxOptions;
pub use record::{CallbackCx, Record};
pub use tracker::Tracker;
pub use types::{
    ElementGeometry, Event, Handle, OnceEvent, ScrollDirection, TickReason, TickReport,
    TrackerState, Viewport,
};
pub use visibility::{Visibility, is_transition_complete, progress_fraction};
