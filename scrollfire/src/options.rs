use alloc::sync::Arc;

use crate::record::CallbackCx;
use crate::{Event, ParallaxOptions, ScrollDirection};

/// A callback fired by the tracker for one [`Event`].
///
/// The context exposes the element, the scroll delta, the direction, the current
/// [`crate::Visibility`] and the registration record; it can also queue removals.
pub type Callback<E> = Arc<dyn Fn(&mut CallbackCx<'_, E>) + Send + Sync>;

/// A pixel threshold applied to boundary predicates.
#[derive(Clone)]
pub enum Offset {
    /// A fixed offset.
    Value(f64),
    /// A provider invoked every tick the offset is used (e.g. a sticky header's height).
    Provider(Arc<dyn Fn() -> f64 + Send + Sync>),
}

impl Offset {
    pub fn resolve(&self) -> f64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::Value(0.0)
    }
}

impl From<f64> for Offset {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl core::fmt::Debug for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// The offset family of a registration.
#[derive(Clone, Debug, Default)]
pub struct Offsets {
    pub offset: Offset,
    /// Used instead of `offset` while scrolling down.
    pub top_offset: Option<Offset>,
    /// Used instead of `offset` while scrolling up.
    pub bottom_offset: Option<Offset>,
}

impl Offsets {
    /// Evaluates the offset in effect for `direction`.
    pub fn resolve(&self, direction: ScrollDirection) -> f64 {
        let preferred = match direction {
            ScrollDirection::Down => self.top_offset.as_ref(),
            ScrollDirection::Up => self.bottom_offset.as_ref(),
        };
        preferred.unwrap_or(&self.offset).resolve()
    }
}

/// One optional callback per [`Event`]. Unset slots are skipped, not called.
pub struct Callbacks<E> {
    slots: [Option<Callback<E>>; Event::COUNT],
}

impl<E> Callbacks<E> {
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }

    pub fn get(&self, event: Event) -> Option<&Callback<E>> {
        self.slots[event.slot()].as_ref()
    }

    pub fn set(&mut self, event: Event, callback: Option<Callback<E>>) {
        self.slots[event.slot()] = callback;
    }

    pub fn is_set(&self, event: Event) -> bool {
        self.slots[event.slot()].is_some()
    }
}

impl<E> Default for Callbacks<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Callbacks<E> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<E> core::fmt::Debug for Callbacks<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set()
            .entries(
                Event::ALL
                    .iter()
                    .filter(|&&e| self.is_set(e))
                    .map(|e| e.name()),
            )
            .finish()
    }
}

/// Configuration for one registration (see [`crate::Tracker::register`]).
///
/// Cheap to clone: callbacks and offset providers are stored in `Arc`s, so the same options can
/// register many elements.
pub struct TrackOptions<E> {
    pub callbacks: Callbacks<E>,
    pub offsets: Offsets,
    pub parallax: Option<ParallaxOptions<E>>,
}

impl<E> TrackOptions<E> {
    /// No callbacks, zero offsets, no parallax.
    pub fn new() -> Self {
        Self {
            callbacks: Callbacks::new(),
            offsets: Offsets::default(),
            parallax: None,
        }
    }

    /// Sets the callback for `event`, replacing any previous one.
    pub fn on(
        mut self,
        event: Event,
        f: impl Fn(&mut CallbackCx<'_, E>) + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.set(event, Some(Arc::new(f)));
        self
    }

    pub fn with_callback(mut self, event: Event, callback: Option<Callback<E>>) -> Self {
        self.callbacks.set(event, callback);
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offsets.offset = Offset::Value(offset);
        self
    }

    pub fn with_offset_provider(mut self, f: impl Fn() -> f64 + Send + Sync + 'static) -> Self {
        self.offsets.offset = Offset::Provider(Arc::new(f));
        self
    }

    pub fn with_top_offset(mut self, offset: Option<Offset>) -> Self {
        self.offsets.top_offset = offset;
        self
    }

    pub fn with_top_offset_provider(mut self, f: impl Fn() -> f64 + Send + Sync + 'static) -> Self {
        self.offsets.top_offset = Some(Offset::Provider(Arc::new(f)));
        self
    }

    pub fn with_bottom_offset(mut self, offset: Option<Offset>) -> Self {
        self.offsets.bottom_offset = offset;
        self
    }

    pub fn with_bottom_offset_provider(
        mut self,
        f: impl Fn() -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.offsets.bottom_offset = Some(Offset::Provider(Arc::new(f)));
        self
    }

    pub fn with_parallax(mut self, parallax: Option<ParallaxOptions<E>>) -> Self {
        self.parallax = parallax;
        self
    }
}

impl<E> Default for TrackOptions<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for TrackOptions<E> {
    fn clone(&self) -> Self {
        Self {
            callbacks: self.callbacks.clone(),
            offsets: self.offsets.clone(),
            parallax: self.parallax.clone(),
        }
    }
}

impl<E: core::fmt::Debug> core::fmt::Debug for TrackOptions<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrackOptions")
            .field("callbacks", &self.callbacks)
            .field("offsets", &self.offsets)
            .field("parallax", &self.parallax)
            .finish()
    }
}
