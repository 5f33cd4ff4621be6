use crate::OnceEvent;

/// Armed state of every one-shot event of a registration.
///
/// `true` means the event may fire the next time its boundary condition holds. Firing an event
/// disarms it; only [`OnceEvent::rearmed_by`] arms it again.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OnceFlags {
    pub top_in: bool,
    pub top_out: bool,
    pub bottom_in: bool,
    pub bottom_out: bool,
    pub top_visible: bool,
    pub top_hidden: bool,
    pub bottom_visible: bool,
    pub bottom_hidden: bool,
}

impl Default for OnceFlags {
    fn default() -> Self {
        Self::armed()
    }
}

impl OnceFlags {
    pub fn armed() -> Self {
        Self {
            top_in: true,
            top_out: true,
            bottom_in: true,
            bottom_out: true,
            top_visible: true,
            top_hidden: true,
            bottom_visible: true,
            bottom_hidden: true,
        }
    }

    pub fn is_armed(&self, event: OnceEvent) -> bool {
        match event {
            OnceEvent::TopIn => self.top_in,
            OnceEvent::TopOut => self.top_out,
            OnceEvent::BottomIn => self.bottom_in,
            OnceEvent::BottomOut => self.bottom_out,
            OnceEvent::TopVisible => self.top_visible,
            OnceEvent::TopHidden => self.top_hidden,
            OnceEvent::BottomVisible => self.bottom_visible,
            OnceEvent::BottomHidden => self.bottom_hidden,
        }
    }

    pub fn all_armed(&self) -> bool {
        OnceEvent::ALL.iter().all(|&e| self.is_armed(e))
    }

    fn slot(&mut self, event: OnceEvent) -> &mut bool {
        match event {
            OnceEvent::TopIn => &mut self.top_in,
            OnceEvent::TopOut => &mut self.top_out,
            OnceEvent::BottomIn => &mut self.bottom_in,
            OnceEvent::BottomOut => &mut self.bottom_out,
            OnceEvent::TopVisible => &mut self.top_visible,
            OnceEvent::TopHidden => &mut self.top_hidden,
            OnceEvent::BottomVisible => &mut self.bottom_visible,
            OnceEvent::BottomHidden => &mut self.bottom_hidden,
        }
    }

    pub(crate) fn set(&mut self, event: OnceEvent, armed: bool) {
        *self.slot(event) = armed;
    }

    /// Applies the flag transition of `event` firing.
    ///
    /// Entry/exit events also re-arm the full-visibility event that follows them and disarm the
    /// one that can no longer happen before the opposite crossing.
    pub fn fire(&mut self, event: OnceEvent) {
        self.set(event, false);
        match event {
            OnceEvent::TopOut => {
                self.set(OnceEvent::TopVisible, false);
                self.set(OnceEvent::TopIn, true);
                self.set(OnceEvent::TopHidden, true);
            }
            OnceEvent::TopIn => {
                self.set(OnceEvent::TopHidden, false);
                self.set(OnceEvent::TopOut, true);
                self.set(OnceEvent::TopVisible, true);
            }
            OnceEvent::BottomIn => {
                self.set(OnceEvent::BottomHidden, false);
                self.set(OnceEvent::BottomOut, true);
                self.set(OnceEvent::BottomVisible, true);
            }
            OnceEvent::BottomOut => {
                self.set(OnceEvent::BottomVisible, false);
                self.set(OnceEvent::BottomIn, true);
                self.set(OnceEvent::BottomHidden, true);
            }
            OnceEvent::TopVisible
            | OnceEvent::TopHidden
            | OnceEvent::BottomVisible
            | OnceEvent::BottomHidden => {}
        }
    }
}
