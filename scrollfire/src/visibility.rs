use crate::math;
use crate::{ElementGeometry, OnceEvent, ScrollDirection, Viewport};

/// Normalizes the remaining distance of an edge to its boundary by the element height.
///
/// The result is clamped to `[0, 1]` and rounded to two decimals: `1` means the transition has
/// not begun, `0` means it is complete.
pub fn progress_fraction(remaining: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return 1.0;
    }
    let f = (remaining / height).clamp(0.0, 1.0);
    math::round(f * 100.0) / 100.0
}

/// Whether a progress fraction marks a completed full-visibility transition.
///
/// Only an exact (rounded) `0` counts; `1` and anything in between never do.
pub fn is_transition_complete(fraction: f64) -> bool {
    fraction <= 0.0
}

/// Boundary predicates of one element for one tick.
///
/// With `S` the scroll offset, `V` the viewport height, `T`/`H` the element's top and outer
/// height and `O` the resolved offset. Comparisons are non-strict, so an element exactly on a
/// boundary counts as in bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    scroll_top: f64,
    viewport_height: f64,
    top: f64,
    height: f64,
    offset: f64,
}

impl Visibility {
    pub fn new(viewport: &Viewport, element: &ElementGeometry, offset: f64) -> Self {
        Self {
            scroll_top: viewport.scroll_top,
            viewport_height: viewport.height,
            top: element.offset_top,
            height: element.outer_height,
            offset,
        }
    }

    /// The offset these predicates were computed with.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn viewport_bottom(&self) -> f64 {
        self.scroll_top + self.viewport_height
    }

    /// `S <= T + H - O`
    pub fn partially_visible_top(&self) -> bool {
        self.scroll_top <= self.bottom() - self.offset
    }

    /// `S + V >= T + O`
    pub fn partially_visible_bottom(&self) -> bool {
        self.viewport_bottom() >= self.top + self.offset
    }

    /// `S <= T - O`
    pub fn fully_visible_top(&self) -> bool {
        self.scroll_top <= self.top - self.offset
    }

    /// `S + V >= T + H + O`
    pub fn fully_visible_bottom(&self) -> bool {
        self.viewport_bottom() >= self.bottom() + self.offset
    }

    pub fn partially_in_bounds(&self) -> bool {
        self.partially_visible_top() && self.partially_visible_bottom()
    }

    /// How much of the viewport height is left before the element leaves at the top.
    ///
    /// Scrolling down measures from the element's bottom edge, scrolling up from its top edge.
    /// Capped at `1` and rounded to two decimals; negative once that edge is above the viewport.
    pub fn percent_from_top(&self, direction: ScrollDirection) -> f64 {
        if self.viewport_height <= 0.0 {
            return 1.0;
        }
        let edge = match direction {
            ScrollDirection::Down => self.bottom(),
            ScrollDirection::Up => self.top,
        };
        let perc = (edge - self.scroll_top) / self.viewport_height;
        if perc > 1.0 {
            return 1.0;
        }
        math::round(perc * 100.0) / 100.0
    }

    /// Progress fraction of a full-visibility event, `None` for entry/exit events.
    pub fn fraction(&self, event: OnceEvent) -> Option<f64> {
        let remaining = match event {
            OnceEvent::BottomVisible => self.bottom() + self.offset - self.viewport_bottom(),
            OnceEvent::TopHidden => self.bottom() - self.offset - self.scroll_top,
            OnceEvent::TopVisible => self.scroll_top - (self.top - self.offset),
            OnceEvent::BottomHidden => self.viewport_bottom() - (self.top + self.offset),
            OnceEvent::TopIn | OnceEvent::TopOut | OnceEvent::BottomIn | OnceEvent::BottomOut => {
                return None;
            }
        };
        Some(progress_fraction(remaining, self.height))
    }

    /// Whether the boundary condition of `event` holds.
    ///
    /// This ignores direction and armed state; the tracker checks both.
    pub fn crossed(&self, event: OnceEvent) -> bool {
        match event {
            OnceEvent::TopOut => self.scroll_top >= self.top - self.offset,
            OnceEvent::BottomIn => self.viewport_bottom() >= self.top + self.offset,
            OnceEvent::TopIn => self.scroll_top <= self.bottom() - self.offset,
            OnceEvent::BottomOut => self.viewport_bottom() <= self.bottom() + self.offset,
            OnceEvent::TopVisible
            | OnceEvent::TopHidden
            | OnceEvent::BottomVisible
            | OnceEvent::BottomHidden => self.fraction(event).is_some_and(is_transition_complete),
        }
    }
}
