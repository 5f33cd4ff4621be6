use scrollfire::{ElementGeometry, Event, Geometry, TickReason, TrackOptions, Tracker, Viewport};

struct Page {
    scroll_top: f64,
}

impl Geometry<&'static str> for Page {
    fn viewport(&self) -> Viewport {
        Viewport {
            scroll_top: self.scroll_top,
            height: 600.0,
        }
    }

    fn element(&self, element: &&'static str) -> Option<ElementGeometry> {
        let offset_top = match *element {
            "hero" => 0.0,
            "pricing" => 1200.0,
            "footer" => 2400.0,
            _ => return None,
        };
        Some(ElementGeometry {
            offset_top,
            outer_height: 300.0,
            height: 300.0,
            margin_top: 0.0,
        })
    }
}

fn main() {
    // Example: print every entry/exit of three page sections while scrolling down and back up.
    let mut tracker = Tracker::new();
    for section in ["hero", "pricing", "footer"] {
        let mut opts = TrackOptions::new();
        for event in [
            Event::TopIn,
            Event::TopOut,
            Event::BottomIn,
            Event::BottomOut,
        ] {
            opts = opts.on(event, |cx| {
                println!(
                    "S={:>6.0} {:>8} {}",
                    cx.scroll_top(),
                    cx.element(),
                    cx.event().name()
                );
            });
        }
        tracker.register(section, opts);
    }

    let mut page = Page { scroll_top: 0.0 };
    let down = (0..=27).map(|i| i as f64 * 100.0);
    let up = (0..27).rev().map(|i| i as f64 * 100.0);
    for scroll_top in down.chain(up) {
        page.scroll_top = scroll_top;
        if let Err(err) = tracker.tick(TickReason::Scroll, &page, &mut ()) {
            eprintln!("tick failed: {err}");
        }
    }
}
