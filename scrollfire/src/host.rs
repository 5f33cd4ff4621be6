use crate::{Easing, ElementGeometry, Viewport};

/// Read-only geometry queries answered by the host.
///
/// The tracker reads the viewport once per tick and each element once per record per tick; it
/// never caches answers across ticks.
pub trait Geometry<E> {
    fn viewport(&self) -> Viewport;

    /// Geometry of `element` in document coordinates, or `None` when it is not in the document.
    fn element(&self, element: &E) -> Option<ElementGeometry>;
}

/// Receives parallax move requests.
///
/// Requests are fire-and-forget. A new request for an element supersedes any move still in
/// flight for it.
pub trait Animator<E> {
    fn animate(&mut self, element: &E, top: f64, duration_ms: u64, easing: Easing);
}

/// Drops every request.
impl<E> Animator<E> for () {
    fn animate(&mut self, _element: &E, _top: f64, _duration_ms: u64, _easing: Easing) {}
}

impl<E, A: Animator<E> + ?Sized> Animator<E> for &mut A {
    fn animate(&mut self, element: &E, top: f64, duration_ms: u64, easing: Easing) {
        (**self).animate(element, top, duration_ms, easing);
    }
}

impl<E, G: Geometry<E> + ?Sized> Geometry<E> for &G {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn element(&self, element: &E) -> Option<ElementGeometry> {
        (**self).element(element)
    }
}
