/// Identifies one registration inside a [`crate::Tracker`].
///
/// Handles are allocated in ascending order and never reused by the same tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Handle(pub(crate) u64);

impl Handle {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// The scroll direction of a tick.
///
/// `Down` only when the scroll position strictly increased; a tick at rest counts as `Up`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Down,
    Up,
}

impl ScrollDirection {
    pub fn between(previous: f64, current: f64) -> Self {
        if current > previous {
            Self::Down
        } else {
            Self::Up
        }
    }

    /// Entry/exit events evaluated for this direction, in firing order.
    pub fn edge_events(self) -> [OnceEvent; 2] {
        match self {
            Self::Down => [OnceEvent::TopOut, OnceEvent::BottomIn],
            Self::Up => [OnceEvent::TopIn, OnceEvent::BottomOut],
        }
    }

    /// Full-visibility events evaluated for this direction, in firing order.
    pub fn full_events(self) -> [OnceEvent; 2] {
        match self {
            Self::Down => [OnceEvent::BottomVisible, OnceEvent::TopHidden],
            Self::Up => [OnceEvent::TopVisible, OnceEvent::BottomHidden],
        }
    }

    /// The continuous event fired while the element is partially in bounds.
    pub fn scroll_event(self) -> Event {
        match self {
            Self::Down => Event::ScrollDown,
            Self::Up => Event::ScrollUp,
        }
    }

    /// The continuous event fired on every tick regardless of visibility.
    pub fn always_event(self) -> Event {
        match self {
            Self::Down => Event::ScrollDownAlways,
            Self::Up => Event::ScrollUpAlways,
        }
    }
}

/// What made the host deliver a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickReason {
    Scroll,
    Resize,
    Load,
}

/// Viewport geometry as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Document scroll offset of the viewport's top edge.
    pub scroll_top: f64,
    pub height: f64,
}

/// Element geometry as reported by the host, in document coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementGeometry {
    /// Distance from the document top to the element's border box.
    pub offset_top: f64,
    /// Border-box height, including padding and border.
    pub outer_height: f64,
    /// Content height.
    pub height: f64,
    pub margin_top: f64,
}

impl ElementGeometry {
    pub fn bottom(&self) -> f64 {
        self.offset_top + self.outer_height
    }

    /// Whether the element has usable layout.
    ///
    /// Detached or hidden nodes report zero height (or garbage); such records stay inert.
    pub fn is_rendered(&self) -> bool {
        self.outer_height > 0.0
            && self.offset_top.is_finite()
            && self.outer_height.is_finite()
            && self.height.is_finite()
            && self.margin_top.is_finite()
    }
}

/// One-shot events. Each has an armed flag in [`crate::OnceFlags`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OnceEvent {
    /// Scrolling up, the element's bottom edge comes back in at the top.
    TopIn,
    /// Scrolling down, the element's top edge goes out at the top.
    TopOut,
    /// Scrolling down, the element's top edge comes in at the bottom.
    BottomIn,
    /// Scrolling up, the element's bottom edge goes out at the bottom.
    BottomOut,
    /// Scrolling up, the element's top edge is back inside the top.
    TopVisible,
    /// Scrolling down, the element's bottom edge has left at the top.
    TopHidden,
    /// Scrolling down, the element's bottom edge is inside the bottom.
    BottomVisible,
    /// Scrolling up, the element's top edge has left at the bottom.
    BottomHidden,
}

impl OnceEvent {
    pub const ALL: [Self; 8] = [
        Self::TopIn,
        Self::TopOut,
        Self::BottomIn,
        Self::BottomOut,
        Self::TopVisible,
        Self::TopHidden,
        Self::BottomVisible,
        Self::BottomHidden,
    ];

    /// The only event whose firing re-arms `self`.
    pub fn rearmed_by(self) -> Self {
        match self {
            Self::TopIn => Self::TopOut,
            Self::TopOut => Self::TopIn,
            Self::BottomIn => Self::BottomOut,
            Self::BottomOut => Self::BottomIn,
            Self::TopVisible => Self::TopIn,
            Self::TopHidden => Self::TopOut,
            Self::BottomVisible => Self::BottomIn,
            Self::BottomHidden => Self::BottomOut,
        }
    }
}

/// Every callback slot of a registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    TopIn,
    TopOut,
    BottomIn,
    BottomOut,
    TopVisible,
    TopHidden,
    BottomVisible,
    BottomHidden,
    /// Every tick while the element is partially in bounds.
    Scroll,
    /// Every down tick while the element is partially in bounds.
    ScrollDown,
    /// Every up tick while the element is partially in bounds.
    ScrollUp,
    /// Every tick.
    ScrollAlways,
    /// Every down tick.
    ScrollDownAlways,
    /// Every up tick.
    ScrollUpAlways,
}

impl Event {
    pub const COUNT: usize = 14;

    pub const ALL: [Self; Self::COUNT] = [
        Self::TopIn,
        Self::TopOut,
        Self::BottomIn,
        Self::BottomOut,
        Self::TopVisible,
        Self::TopHidden,
        Self::BottomVisible,
        Self::BottomHidden,
        Self::Scroll,
        Self::ScrollDown,
        Self::ScrollUp,
        Self::ScrollAlways,
        Self::ScrollDownAlways,
        Self::ScrollUpAlways,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::TopIn => "topIn",
            Self::TopOut => "topOut",
            Self::BottomIn => "bottomIn",
            Self::BottomOut => "bottomOut",
            Self::TopVisible => "topVisible",
            Self::TopHidden => "topHidden",
            Self::BottomVisible => "bottomVisible",
            Self::BottomHidden => "bottomHidden",
            Self::Scroll => "scroll",
            Self::ScrollDown => "scrollDown",
            Self::ScrollUp => "scrollUp",
            Self::ScrollAlways => "scrollAlways",
            Self::ScrollDownAlways => "scrollDownAlways",
            Self::ScrollUpAlways => "scrollUpAlways",
        }
    }

    pub fn as_once(self) -> Option<OnceEvent> {
        Some(match self {
            Self::TopIn => OnceEvent::TopIn,
            Self::TopOut => OnceEvent::TopOut,
            Self::BottomIn => OnceEvent::BottomIn,
            Self::BottomOut => OnceEvent::BottomOut,
            Self::TopVisible => OnceEvent::TopVisible,
            Self::TopHidden => OnceEvent::TopHidden,
            Self::BottomVisible => OnceEvent::BottomVisible,
            Self::BottomHidden => OnceEvent::BottomHidden,
            _ => return None,
        })
    }

    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl From<OnceEvent> for Event {
    fn from(event: OnceEvent) -> Self {
        match event {
            OnceEvent::TopIn => Self::TopIn,
            OnceEvent::TopOut => Self::TopOut,
            OnceEvent::BottomIn => Self::BottomIn,
            OnceEvent::BottomOut => Self::BottomOut,
            OnceEvent::TopVisible => Self::TopVisible,
            OnceEvent::TopHidden => Self::TopHidden,
            OnceEvent::BottomVisible => Self::BottomVisible,
            OnceEvent::BottomHidden => Self::BottomHidden,
        }
    }
}

/// Summary of one dispatched tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub reason: TickReason,
    pub direction: ScrollDirection,
    pub scroll_top: f64,
    /// Distance scrolled since the previous successful tick.
    pub delta: f64,
    /// Records visited.
    pub records: usize,
    /// Callbacks invoked (unset callbacks are not counted).
    pub callbacks: usize,
    /// One-shot transitions applied, whether or not a callback was set.
    pub one_shots: usize,
    pub parallax_requests: usize,
}

/// The tracker's process-wide scroll state, for hosts that rebuild a tracker in-session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerState {
    pub last_scroll_position: f64,
}
