use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::collections::BTreeMap;

use scrollfire::{
    Animator, ElementGeometry, Event, Geometry, ParallaxOptions, TickError, TrackOptions,
    Viewport,
};

#[derive(Debug, Default)]
struct Listeners {
    subscribed: AtomicUsize,
    unsubscribed: AtomicUsize,
}

#[derive(Debug)]
struct Window {
    listeners: Arc<Listeners>,
    viewport: Viewport,
    elements: BTreeMap<u32, ElementGeometry>,
}

impl Window {
    fn new(listeners: &Arc<Listeners>) -> Self {
        Self {
            listeners: Arc::clone(listeners),
            viewport: Viewport {
                scroll_top: 0.0,
                height: 800.0,
            },
            elements: BTreeMap::new(),
        }
    }

    fn with(mut self, id: u32, offset_top: f64, outer_height: f64, margin_top: f64) -> Self {
        self.elements.insert(
            id,
            ElementGeometry {
                offset_top,
                outer_height,
                height: outer_height,
                margin_top,
            },
        );
        self
    }
}

impl EventSource for Window {
    fn subscribe(&mut self) {
        self.listeners.subscribed.fetch_add(1, Ordering::Relaxed);
    }

    fn unsubscribe(&mut self) {
        self.listeners.unsubscribed.fetch_add(1, Ordering::Relaxed);
    }
}

impl Geometry<u32> for Window {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn element(&self, element: &u32) -> Option<ElementGeometry> {
        self.elements.get(element).copied()
    }
}

#[test]
fn controller_subscribes_once_and_unsubscribes_on_drop() {
    let listeners = Arc::new(Listeners::default());
    let window = Window::new(&listeners)
        .with(1, 100.0, 50.0, 0.0)
        .with(2, 900.0, 50.0, 0.0);

    let fired = Arc::new(AtomicUsize::new(0));
    let mut c = Controller::new(window);
    for id in [1u32, 2, 3] {
        let fired = Arc::clone(&fired);
        c.register(
            id,
            TrackOptions::new().on(Event::ScrollAlways, move |_| {
                fired.fetch_add(1, Ordering::Relaxed);
            }),
        );
    }
    assert_eq!(listeners.subscribed.load(Ordering::Relaxed), 1);

    c.host_mut().viewport.scroll_top = 200.0;
    let report = c.on_scroll(0).unwrap();
    assert_eq!(report.records, 3);
    c.on_resize(10).unwrap();
    c.on_load(20).unwrap();
    assert_eq!(fired.load(Ordering::Relaxed), 9);

    assert_eq!(c.remove_element(&3), 1);
    assert_eq!(c.tracker().len(), 2);
    assert_eq!(listeners.unsubscribed.load(Ordering::Relaxed), 0);

    drop(c);
    assert_eq!(listeners.subscribed.load(Ordering::Relaxed), 1);
    assert_eq!(listeners.unsubscribed.load(Ordering::Relaxed), 1);
}

#[test]
fn tween_animator_is_last_write_wins() {
    let mut a = TweenAnimator::<u32>::new();
    a.set_position(1, 0.0);
    a.set_now(0);
    a.animate(&1, 100.0, 100, Easing::Linear);

    let mut seen = Vec::new();
    a.advance(50, |e, top| seen.push((*e, top)));
    assert_eq!(seen, [(1, 50.0)]);

    // Replaces the running move, starting where it currently is.
    a.animate(&1, 0.0, 100, Easing::Linear);
    assert_eq!(a.tween(&1).map(|t| t.from), Some(50.0));

    seen.clear();
    a.advance(100, |e, top| seen.push((*e, top)));
    a.advance(150, |e, top| seen.push((*e, top)));
    assert_eq!(seen, [(1, 25.0), (1, 0.0)]);
    assert!(!a.is_animating());
    assert_eq!(a.position(&1), Some(0.0));
    assert_eq!(a.advance(200, |_, _| {}), 0);
}

#[test]
fn first_move_of_unknown_element_jumps_to_target() {
    let mut a = TweenAnimator::<u32>::new();
    a.animate(&7, 300.0, 400, Easing::Swing);
    let mut seen = Vec::new();
    a.advance(10, |e, top| seen.push((*e, top)));
    assert_eq!(seen, [(7, 300.0)]);
    assert!(a.cancel(&7));
    assert!(!a.cancel(&7));
}

#[test]
fn tween_clamps_duration_and_time() {
    let t = Tween::new(10.0, 20.0, 100, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert_eq!(t.sample(0), 10.0);
    assert!(!t.is_done(100));
    assert!(t.is_done(101));
    assert_eq!(t.sample(500), 20.0);
}

#[test]
fn controller_animates_parallax_child() {
    let listeners = Arc::new(Listeners::default());
    let window = Window::new(&listeners)
        .with(10, 0.0, 1000.0, 0.0)
        .with(11, 100.0, 200.0, 10.0);

    let mut c = Controller::new(window);
    c.register(
        11,
        TrackOptions::new().with_parallax(Some(ParallaxOptions::new(10))),
    );
    c.animator_mut().set_position(11, 0.0);

    c.host_mut().viewport.scroll_top = 100.0;
    let report = c.on_scroll(1_000).unwrap();
    assert_eq!(report.parallax_requests, 1);
    assert!(c.is_animating());

    let mut last = 0.0;
    for now_ms in [1_100u64, 1_200, 1_300, 1_400] {
        let mut moved = Vec::new();
        c.frame(now_ms, |e, top| moved.push((*e, top)));
        assert_eq!(moved.len(), 1);
        assert!(moved[0].1 >= last);
        last = moved[0].1;
    }
    assert_eq!(last, 390.0);
    assert!(!c.is_animating());
    assert_eq!(c.animator().position(&11), Some(390.0));
}

#[test]
fn controller_surfaces_invalid_offsets() {
    let listeners = Arc::new(Listeners::default());
    let window = Window::new(&listeners).with(1, 100.0, 50.0, 0.0);
    let mut c = Controller::new(window);
    let h = c.register(1, TrackOptions::new().with_offset_provider(|| f64::INFINITY));

    c.host_mut().viewport.scroll_top = 40.0;
    let err = c.on_scroll(0).unwrap_err();
    assert_eq!(
        err,
        TickError::InvalidOffset {
            handle: h,
            value: f64::INFINITY,
        }
    );
    assert_eq!(c.tracker().last_scroll_position(), 0.0);
}
