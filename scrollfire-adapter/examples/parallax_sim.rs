use std::collections::HashMap;

use scrollfire::{ElementGeometry, Geometry, ParallaxOptions, TrackOptions, Viewport};
use scrollfire_adapter::{Controller, Easing, EventSource};

struct Window {
    scroll_top: f64,
    elements: HashMap<&'static str, ElementGeometry>,
    listening: bool,
}

impl EventSource for Window {
    fn subscribe(&mut self) {
        self.listening = true;
        println!("subscribed");
    }

    fn unsubscribe(&mut self) {
        self.listening = false;
        println!("unsubscribed");
    }
}

impl Geometry<&'static str> for Window {
    fn viewport(&self) -> Viewport {
        Viewport {
            scroll_top: self.scroll_top,
            height: 800.0,
        }
    }

    fn element(&self, element: &&'static str) -> Option<ElementGeometry> {
        self.elements.get(element).copied()
    }
}

fn main() {
    // Example: a banner inside a tall section drifts as the page scrolls.
    //
    // An adapter would:
    // - forward scroll events to `on_scroll(now_ms)`
    // - call `frame(now_ms, ..)` from its frame loop while `is_animating()`
    // - write each sampled `top` back to the element's style
    let mut elements = HashMap::new();
    elements.insert(
        "section",
        ElementGeometry {
            offset_top: 600.0,
            outer_height: 1600.0,
            height: 1600.0,
            margin_top: 0.0,
        },
    );
    elements.insert(
        "banner",
        ElementGeometry {
            offset_top: 600.0,
            outer_height: 300.0,
            height: 300.0,
            margin_top: 0.0,
        },
    );
    let window = Window {
        scroll_top: 0.0,
        elements,
        listening: false,
    };

    let mut c = Controller::new(window);
    c.register(
        "banner",
        TrackOptions::new().with_parallax(Some(
            ParallaxOptions::new("section")
                .with_speed_ms(240)
                .with_easing(Easing::SmoothStep),
        )),
    );
    c.animator_mut().set_position("banner", 0.0);

    let mut now_ms = 0u64;
    for scroll_top in [200.0, 400.0, 600.0, 800.0, 1000.0] {
        c.host_mut().scroll_top = scroll_top;
        if let Err(err) = c.on_scroll(now_ms) {
            eprintln!("tick failed: {err}");
            continue;
        }
        while c.is_animating() {
            now_ms += 16;
            c.frame(now_ms, |_, top| {
                if now_ms.is_multiple_of(80) {
                    println!("t={now_ms} S={scroll_top} banner.top={top:.1}");
                }
            });
        }
        println!(
            "settled S={scroll_top} banner.top={:?}",
            c.animator().position(&"banner")
        );
    }
    println!("listening={}", c.host().listening);
}
