//! Adapter utilities for the `scrollfire` crate.
//!
//! The `scrollfire` crate is UI-agnostic and focuses on the dispatch state machine. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A controller that owns the host subscription lifecycle and routes notifications
//! - A tween-based animator for parallax moves (adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod controller;
mod key;
mod tween;

#[cfg(test)]
mod tests;

pub use animator::TweenAnimator;
pub use controller::{Controller, EventSource};
pub use key::ElementKey;
pub use scrollfire::Easing;
pub use tween::Tween;
