use scrollfire::{Geometry, Handle, TickReason, TickReport, TrackOptions, Tracker};

use crate::{ElementKey, TweenAnimator};

/// Where scroll, resize and load notifications come from.
///
/// A DOM adapter would add/remove its window listeners here; a TUI would hook its event loop.
pub trait EventSource {
    fn subscribe(&mut self);
    fn unsubscribe(&mut self);
}

/// A framework-neutral controller that owns a [`Tracker`], its host and a [`TweenAnimator`].
///
/// The host is subscribed exactly once, when the controller is created, no matter how many
/// elements are registered later; it is unsubscribed when the controller is dropped.
///
/// Adapters drive it by calling:
/// - `on_scroll` / `on_resize` / `on_load` when the host reports those notifications
/// - `frame(now_ms, apply)` each frame/timer tick while parallax tweens are running
#[derive(Debug)]
pub struct Controller<E, H: EventSource> {
    tracker: Tracker<E>,
    host: H,
    animator: TweenAnimator<E>,
}

impl<E: ElementKey, H: Geometry<E> + EventSource> Controller<E, H> {
    pub fn new(host: H) -> Self {
        Self::from_tracker(Tracker::new(), host)
    }

    pub fn from_tracker(tracker: Tracker<E>, mut host: H) -> Self {
        adebug!(records = tracker.len(), "Controller::subscribe");
        host.subscribe();
        Self {
            tracker,
            host,
            animator: TweenAnimator::new(),
        }
    }

    pub fn tracker(&self) -> &Tracker<E> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut Tracker<E> {
        &mut self.tracker
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn animator(&self) -> &TweenAnimator<E> {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut TweenAnimator<E> {
        &mut self.animator
    }

    pub fn register(&mut self, element: E, options: TrackOptions<E>) -> Handle {
        self.tracker.register(element, options)
    }

    pub fn remove(&mut self, handles: impl IntoIterator<Item = Handle>) -> usize {
        self.tracker.remove(handles)
    }

    /// Removes every registration of `element` and drops its tween.
    pub fn remove_element(&mut self, element: &E) -> usize {
        self.animator.forget(element);
        self.tracker.remove_element(element)
    }

    pub fn on_scroll(&mut self, now_ms: u64) -> scrollfire::Result<TickReport> {
        self.notify(TickReason::Scroll, now_ms)
    }

    pub fn on_resize(&mut self, now_ms: u64) -> scrollfire::Result<TickReport> {
        self.notify(TickReason::Resize, now_ms)
    }

    pub fn on_load(&mut self, now_ms: u64) -> scrollfire::Result<TickReport> {
        self.notify(TickReason::Load, now_ms)
    }

    /// Runs one tracker pass; parallax moves requested by it start at `now_ms`.
    pub fn notify(&mut self, reason: TickReason, now_ms: u64) -> scrollfire::Result<TickReport> {
        self.animator.set_now(now_ms);
        self.tracker.tick(reason, &self.host, &mut self.animator)
    }

    /// Advances parallax tweens. `apply` receives each moving element and its new `top`.
    ///
    /// Returns how many elements moved.
    pub fn frame(&mut self, now_ms: u64, apply: impl FnMut(&E, f64)) -> usize {
        self.animator.advance(now_ms, apply)
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }
}

impl<E, H: EventSource> Drop for Controller<E, H> {
    fn drop(&mut self) {
        adebug!("Controller::unsubscribe");
        self.host.unsubscribe();
    }
}
