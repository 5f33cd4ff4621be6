use scrollfire::{Animator, Easing};

use crate::{ElementKey, Tween};

#[cfg(feature = "std")]
type Map<K, V> = std::collections::HashMap<K, V>;
#[cfg(not(feature = "std"))]
type Map<K, V> = alloc::collections::BTreeMap<K, V>;

/// An [`Animator`] that keeps one tween per element and samples them on demand.
///
/// A new request for an element replaces its in-flight tween, starting from wherever the old one
/// currently is. There is no queue. An element with no known position jumps straight to its
/// first target.
///
/// The animator never touches UI objects: call [`TweenAnimator::advance`] from your frame loop
/// and apply the sampled positions yourself.
#[derive(Clone, Debug)]
pub struct TweenAnimator<E> {
    now_ms: u64,
    tweens: Map<E, Tween>,
    positions: Map<E, f64>,
}

impl<E: ElementKey> Default for TweenAnimator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ElementKey> TweenAnimator<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            tweens: Map::new(),
            positions: Map::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Sets the clock used to start tweens requested from now on.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    /// Last applied `top` of `element`, if any.
    pub fn position(&self, element: &E) -> Option<f64> {
        self.positions.get(element).copied()
    }

    /// Seeds the known position of `element`, e.g. from its initial layout.
    pub fn set_position(&mut self, element: E, top: f64) {
        self.positions.insert(element, top);
    }

    pub fn tween(&self, element: &E) -> Option<&Tween> {
        self.tweens.get(element)
    }

    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    pub fn cancel(&mut self, element: &E) -> bool {
        self.tweens.remove(element).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.tweens.clear();
    }

    /// Forgets both the tween and the known position of `element`.
    pub fn forget(&mut self, element: &E) {
        self.tweens.remove(element);
        self.positions.remove(element);
    }

    /// Samples every in-flight tween at `now_ms` and hands each position to `apply`.
    ///
    /// Finished tweens are dropped after their final sample. Returns how many elements moved.
    pub fn advance(&mut self, now_ms: u64, mut apply: impl FnMut(&E, f64)) -> usize {
        self.now_ms = now_ms;
        let mut moved = 0usize;
        for (element, tween) in &self.tweens {
            let top = tween.sample(now_ms);
            apply(element, top);
            self.positions.insert(element.clone(), top);
            moved += 1;
        }
        self.tweens.retain(|_, tween| !tween.is_done(now_ms));
        if moved > 0 && self.tweens.is_empty() {
            adebug!(now_ms, "TweenAnimator::advance settled");
        }
        moved
    }
}

impl<E: ElementKey> Animator<E> for TweenAnimator<E> {
    fn animate(&mut self, element: &E, top: f64, duration_ms: u64, easing: Easing) {
        let now_ms = self.now_ms;
        if let Some(tween) = self.tweens.get_mut(element) {
            atrace!(
                from = tween.sample(now_ms),
                previous_to = tween.to,
                to = top,
                duration_ms,
                "TweenAnimator::animate retarget"
            );
            tween.retarget(now_ms, top, duration_ms, easing);
            return;
        }
        let from = self.positions.get(element).copied().unwrap_or(top);
        atrace!(from, to = top, duration_ms, ?easing, "TweenAnimator::animate start");
        self.tweens.insert(
            element.clone(),
            Tween::new(from, top, now_ms, duration_ms, easing),
        );
    }
}
