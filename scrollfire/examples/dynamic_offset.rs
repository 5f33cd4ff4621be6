use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use scrollfire::{ElementGeometry, Event, Geometry, TickReason, TrackOptions, Tracker, Viewport};

struct Page {
    scroll_top: f64,
}

impl Geometry<u32> for Page {
    fn viewport(&self) -> Viewport {
        Viewport {
            scroll_top: self.scroll_top,
            height: 800.0,
        }
    }

    fn element(&self, _: &u32) -> Option<ElementGeometry> {
        Some(ElementGeometry {
            offset_top: 1000.0,
            outer_height: 400.0,
            height: 400.0,
            margin_top: 0.0,
        })
    }
}

fn main() {
    // Example: a sticky header whose height changes at runtime. The offset provider is evaluated
    // on every tick, so `topOut` follows the header instead of a stale value.
    let header = Arc::new(AtomicU64::new(0f64.to_bits()));

    let mut tracker = Tracker::new();
    let opts = TrackOptions::new()
        .with_offset_provider({
            let header = Arc::clone(&header);
            move || f64::from_bits(header.load(Ordering::Relaxed))
        })
        .on(Event::TopOut, |cx| {
            let offset = cx.visibility().map(|v| v.offset()).unwrap_or_default();
            println!("topOut at S={} (offset {offset})", cx.scroll_top());
        })
        .on(Event::TopIn, |cx| println!("topIn at S={}", cx.scroll_top()));
    tracker.register(1, opts);

    let mut page = Page { scroll_top: 0.0 };
    for (scroll_top, header_height) in [
        (0.0, 0.0),
        (900.0, 0.0),
        (1000.0, 0.0),
        (500.0, 0.0),
        (500.0, 120.0),
        (880.0, 120.0),
    ] {
        header.store(f64::to_bits(header_height), Ordering::Relaxed);
        page.scroll_top = scroll_top;
        if let Err(err) = tracker.tick(TickReason::Scroll, &page, &mut ()) {
            eprintln!("tick failed: {err}");
        }
    }
}
