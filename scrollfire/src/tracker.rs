use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::math;
use crate::parallax;
use crate::record::{CallbackCx, Record};
use crate::{
    Animator, ElementGeometry, Event, Geometry, Handle, OnceEvent, OnceFlags, Result,
    ScrollDirection, TickError, TickReason, TickReport, TrackOptions, TrackerState, Viewport,
    Visibility,
};

/// A headless viewport tracker.
///
/// The tracker owns its registry and the last observed scroll position; it holds no UI objects.
/// Your adapter drives it by calling [`Tracker::tick`] on every scroll, resize and load
/// notification, passing a [`Geometry`] provider and an [`Animator`].
///
/// Every tick visits each record once, in ascending handle order, and runs:
/// `scrollAlways`, offset resolution, entry/exit one-shots, `scroll` + `scrollDown`/`scrollUp`
/// (while partially in bounds), `scrollDownAlways`/`scrollUpAlways`, full-visibility one-shots,
/// then parallax.
///
/// For a subscription-owning controller and tween animations, see the `scrollfire-adapter`
/// crate.
#[derive(Debug)]
pub struct Tracker<E> {
    records: BTreeMap<Handle, Record<E>>,
    next_handle: u64,
    last_scroll_position: f64,
}

impl<E> Default for Tracker<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Tracker<E> {
    pub fn new() -> Self {
        Self::with_state(TrackerState::default())
    }

    /// Creates a tracker that continues from a previously captured state.
    pub fn with_state(state: TrackerState) -> Self {
        Self {
            records: BTreeMap::new(),
            next_handle: 0,
            last_scroll_position: state.last_scroll_position,
        }
    }

    pub fn state(&self) -> TrackerState {
        TrackerState {
            last_scroll_position: self.last_scroll_position,
        }
    }

    pub fn restore_state(&mut self, state: TrackerState) {
        self.last_scroll_position = state.last_scroll_position;
    }

    pub fn last_scroll_position(&self) -> f64 {
        self.last_scroll_position
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.records.contains_key(&handle)
    }

    pub fn get(&self, handle: Handle) -> Option<&Record<E>> {
        self.records.get(&handle)
    }

    pub fn flags(&self, handle: Handle) -> Option<OnceFlags> {
        self.records.get(&handle).map(|r| r.flags)
    }

    /// Iterates over registrations in ascending handle order.
    pub fn iter(&self) -> impl Iterator<Item = &Record<E>> + '_ {
        self.records.values()
    }

    /// Registers `element`. All one-shot flags start armed.
    ///
    /// The same element may be registered any number of times; each registration is independent.
    pub fn register(&mut self, element: E, options: TrackOptions<E>) -> Handle {
        let handle = Handle(self.next_handle);
        self.next_handle = self.next_handle.saturating_add(1);
        sfdebug!(
            handle = handle.get(),
            parallax = options.parallax.is_some(),
            "Tracker::register"
        );
        self.records
            .insert(handle, Record::new(handle, element, options));
        handle
    }

    /// Removes registrations. Unknown or already removed handles are ignored.
    ///
    /// Returns the number of registrations removed.
    pub fn remove(&mut self, handles: impl IntoIterator<Item = Handle>) -> usize {
        let mut removed = 0usize;
        for handle in handles {
            if self.records.remove(&handle).is_some() {
                sfdebug!(handle = handle.get(), "Tracker::remove");
                removed += 1;
            }
        }
        removed
    }

    /// Replaces callbacks, offsets and parallax of a registration, keeping its flags.
    ///
    /// Returns `false` for unknown handles.
    pub fn update_options(
        &mut self,
        handle: Handle,
        f: impl FnOnce(&mut TrackOptions<E>),
    ) -> bool {
        let Some(record) = self.records.get_mut(&handle) else {
            return false;
        };
        let mut options = TrackOptions {
            callbacks: core::mem::take(&mut record.callbacks),
            offsets: core::mem::take(&mut record.offsets),
            parallax: record.parallax.take(),
        };
        f(&mut options);
        record.callbacks = options.callbacks;
        record.offsets = options.offsets;
        record.parallax = options.parallax;
        true
    }

    /// Re-arms every one-shot flag of a registration.
    pub fn reset_flags(&mut self, handle: Handle) -> bool {
        let Some(record) = self.records.get_mut(&handle) else {
            return false;
        };
        record.flags = OnceFlags::armed();
        true
    }

    /// Dispatches one host notification to every registration.
    ///
    /// The viewport is read once; element geometry is read once per record. On success the
    /// tracker remembers the scroll position for the next tick's direction and delta.
    ///
    /// A non-finite viewport is rejected before any record is visited.
    ///
    /// If an offset provider yields a non-finite value, the pass stops at that record, the
    /// remembered scroll position is left unchanged and the error is returned. Removals queued by
    /// callbacks are applied in both cases, after the pass.
    pub fn tick<G, A>(
        &mut self,
        reason: TickReason,
        geometry: &G,
        animator: &mut A,
    ) -> Result<TickReport>
    where
        G: Geometry<E> + ?Sized,
        A: Animator<E> + ?Sized,
    {
        let viewport = geometry.viewport();
        if !viewport.scroll_top.is_finite() || !viewport.height.is_finite() {
            let err = TickError::InvalidViewport {
                scroll_top: viewport.scroll_top,
                height: viewport.height,
            };
            sfwarn!(%err, "Tracker::tick skipped");
            return Err(err);
        }
        let direction = ScrollDirection::between(self.last_scroll_position, viewport.scroll_top);
        let delta = math::abs(viewport.scroll_top - self.last_scroll_position);
        sftrace!(
            ?reason,
            ?direction,
            scroll_top = viewport.scroll_top,
            delta,
            records = self.records.len(),
            "Tracker::tick"
        );

        let mut pass = Pass {
            viewport,
            direction,
            delta,
            removals: Vec::new(),
            report: TickReport {
                reason,
                direction,
                scroll_top: viewport.scroll_top,
                delta,
                records: 0,
                callbacks: 0,
                one_shots: 0,
                parallax_requests: 0,
            },
        };

        // Callbacks cannot reach the registry; removals they request are queued in `pass`.
        let mut outcome = Ok(());
        for record in self.records.values_mut() {
            if let Err(err) = pass.visit(record, geometry, animator) {
                outcome = Err(err);
                break;
            }
        }

        let removals = core::mem::take(&mut pass.removals);
        if !removals.is_empty() {
            self.remove(removals);
        }

        if let Err(err) = outcome {
            sfwarn!(%err, "Tracker::tick aborted");
            return Err(err);
        }
        self.last_scroll_position = viewport.scroll_top;
        sftrace!(
            callbacks = pass.report.callbacks,
            one_shots = pass.report.one_shots,
            parallax_requests = pass.report.parallax_requests,
            "Tracker::tick done"
        );
        Ok(pass.report)
    }
}

impl<E: PartialEq> Tracker<E> {
    /// Handles of every registration of `element`, in ascending order.
    pub fn handles_for(&self, element: &E) -> Vec<Handle> {
        self.records
            .values()
            .filter(|r| r.element == *element)
            .map(|r| r.handle)
            .collect()
    }

    /// Removes every registration of `element`. Returns the number removed.
    pub fn remove_element(&mut self, element: &E) -> usize {
        let handles = self.handles_for(element);
        self.remove(handles)
    }
}

struct Pass {
    viewport: Viewport,
    direction: ScrollDirection,
    delta: f64,
    removals: Vec<Handle>,
    report: TickReport,
}

impl Pass {
    fn visit<E, G, A>(
        &mut self,
        record: &mut Record<E>,
        geometry: &G,
        animator: &mut A,
    ) -> Result<()>
    where
        G: Geometry<E> + ?Sized,
        A: Animator<E> + ?Sized,
    {
        self.report.records += 1;
        self.emit(Event::ScrollAlways, record, None);

        let Some(element) = geometry
            .element(&record.element)
            .filter(ElementGeometry::is_rendered)
        else {
            self.emit(self.direction.always_event(), record, None);
            return Ok(());
        };

        let offset = record.offsets.resolve(self.direction);
        if !offset.is_finite() {
            return Err(TickError::InvalidOffset {
                handle: record.handle,
                value: offset,
            });
        }
        let visibility = Visibility::new(&self.viewport, &element, offset);

        for event in self.direction.edge_events() {
            self.one_shot(event, record, visibility);
        }

        if visibility.partially_in_bounds() {
            self.emit(Event::Scroll, record, Some(visibility));
            self.emit(self.direction.scroll_event(), record, Some(visibility));
        }

        self.emit(self.direction.always_event(), record, Some(visibility));

        for event in self.direction.full_events() {
            self.one_shot(event, record, visibility);
        }

        if let Some(options) = record.parallax.as_ref().filter(|p| p.active) {
            let requested = parallax::position(
                options,
                &record.element,
                offset,
                &self.viewport,
                geometry,
                animator,
            );
            if requested.is_some() {
                self.report.parallax_requests += 1;
            }
        }

        Ok(())
    }

    fn one_shot<E>(
        &mut self,
        event: OnceEvent,
        record: &mut Record<E>,
        visibility: Visibility,
    ) {
        if !visibility.crossed(event) || !record.flags.is_armed(event) {
            return;
        }
        record.flags.fire(event);
        self.report.one_shots += 1;
        sftrace!(handle = record.handle.get(), event = Event::from(event).name(), "one-shot");
        self.emit(event.into(), record, Some(visibility));
    }

    fn emit<E>(&mut self, event: Event, record: &Record<E>, visibility: Option<Visibility>) {
        let Some(callback) = record.callbacks.get(event) else {
            return;
        };
        let mut cx = CallbackCx {
            event,
            record,
            scroll_top: self.viewport.scroll_top,
            delta: self.delta,
            direction: self.direction,
            visibility,
            removals: &mut self.removals,
        };
        callback(&mut cx);
        self.report.callbacks += 1;
    }
}
