use alloc::vec::Vec;

use crate::{
    Callbacks, Event, Handle, OnceFlags, Offsets, ParallaxOptions, ScrollDirection, TrackOptions,
    Visibility,
};

/// One registration: an element, its callbacks, offsets, parallax and one-shot flags.
pub struct Record<E> {
    pub(crate) handle: Handle,
    pub(crate) element: E,
    pub(crate) callbacks: Callbacks<E>,
    pub(crate) flags: OnceFlags,
    pub(crate) offsets: Offsets,
    pub(crate) parallax: Option<ParallaxOptions<E>>,
}

impl<E> Record<E> {
    pub(crate) fn new(handle: Handle, element: E, options: TrackOptions<E>) -> Self {
        Self {
            handle,
            element,
            callbacks: options.callbacks,
            flags: OnceFlags::armed(),
            offsets: options.offsets,
            parallax: options.parallax,
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn callbacks(&self) -> &Callbacks<E> {
        &self.callbacks
    }

    pub fn flags(&self) -> OnceFlags {
        self.flags
    }

    pub fn offsets(&self) -> &Offsets {
        &self.offsets
    }

    pub fn parallax(&self) -> Option<&ParallaxOptions<E>> {
        self.parallax.as_ref()
    }
}

impl<E: core::fmt::Debug> core::fmt::Debug for Record<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Record")
            .field("handle", &self.handle)
            .field("element", &self.element)
            .field("callbacks", &self.callbacks)
            .field("flags", &self.flags)
            .field("offsets", &self.offsets)
            .field("parallax", &self.parallax)
            .finish()
    }
}

/// What a callback sees when it fires.
pub struct CallbackCx<'a, E> {
    pub(crate) event: Event,
    pub(crate) record: &'a Record<E>,
    pub(crate) scroll_top: f64,
    pub(crate) delta: f64,
    pub(crate) direction: ScrollDirection,
    pub(crate) visibility: Option<Visibility>,
    pub(crate) removals: &'a mut Vec<Handle>,
}

impl<E> CallbackCx<'_, E> {
    pub fn event(&self) -> Event {
        self.event
    }

    pub fn handle(&self) -> Handle {
        self.record.handle
    }

    pub fn element(&self) -> &E {
        &self.record.element
    }

    /// The record as it is after this event's flag transition.
    pub fn record(&self) -> &Record<E> {
        self.record
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Distance scrolled since the previous tick.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Boundary predicates for this tick; `None` while the element has no usable geometry.
    pub fn visibility(&self) -> Option<&Visibility> {
        self.visibility.as_ref()
    }

    /// [`Visibility::percent_from_top`] for this tick's direction.
    pub fn percent_from_top(&self) -> Option<f64> {
        self.visibility
            .as_ref()
            .map(|v| v.percent_from_top(self.direction))
    }

    /// Queues `handle` for removal once the current tick has visited every record.
    pub fn remove(&mut self, handle: Handle) {
        self.removals.push(handle);
    }

    pub fn remove_self(&mut self) {
        let handle = self.record.handle;
        self.removals.push(handle);
    }
}
