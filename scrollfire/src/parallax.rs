use crate::{Animator, Easing, ElementGeometry, Geometry, Viewport};

/// Parallax configuration of a registration.
///
/// The tracked element is the child that moves; `parent` is the container its motion is
/// relative to.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxOptions<E> {
    /// Parallax runs only while `true`; visibility events are unaffected.
    pub active: bool,
    pub parent: E,
    /// When set, the child's own top margin is not subtracted from the target.
    pub bound: bool,
    /// Duration of each animated move.
    pub speed_ms: u64,
    pub easing: Easing,
    pub invert: bool,
    pub scalar: f64,
}

impl<E> ParallaxOptions<E> {
    /// Active, unbound, 400ms swing moves, not inverted, scalar `1`.
    pub fn new(parent: E) -> Self {
        Self {
            active: true,
            parent,
            bound: false,
            speed_ms: 400,
            easing: Easing::Swing,
            invert: false,
            scalar: 1.0,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_bound(mut self, bound: bool) -> Self {
        self.bound = bound;
        self
    }

    pub fn with_speed_ms(mut self, speed_ms: u64) -> Self {
        self.speed_ms = speed_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn with_scalar(mut self, scalar: f64) -> Self {
        self.scalar = scalar;
        self
    }

    /// Scroll-relative progress `c_pos` of the container.
    ///
    /// Returns `None` when the container is exactly as tall as the viewport (the ratio has no
    /// denominator) or the result is not finite.
    pub fn progress(
        &self,
        container: &ElementGeometry,
        viewport: &Viewport,
        offset: f64,
    ) -> Option<f64> {
        let span = viewport.height - container.outer_height;
        if span == 0.0 {
            return None;
        }
        let c_pos = (container.offset_top - viewport.scroll_top - offset) / span * self.scalar;
        // Inversion mirrors the scaled progress and scales it again.
        let c_pos = if self.invert {
            (1.0 - c_pos) * self.scalar
        } else {
            c_pos
        };
        c_pos.is_finite().then_some(c_pos)
    }

    /// Maps `c_pos` to the child's target `top` offset inside the container.
    ///
    /// Outside `[0, 1]` the target is clamped to the container edges only for `scalar == 1`;
    /// scaled parallax keeps extrapolating linearly.
    pub fn target_top(
        &self,
        c_pos: f64,
        container: &ElementGeometry,
        child: &ElementGeometry,
    ) -> f64 {
        let margin = if self.bound { 0.0 } else { child.margin_top };
        let travel = container.height - child.outer_height;
        if self.scalar == 1.0 {
            if c_pos < 0.0 {
                return -margin;
            }
            if c_pos > 1.0 {
                return travel - margin;
            }
        }
        c_pos * travel - margin
    }
}

/// Computes the child's target and requests the animated move.
///
/// Returns the requested target, or `None` when nothing was requested.
pub(crate) fn position<E, G, A>(
    options: &ParallaxOptions<E>,
    child: &E,
    offset: f64,
    viewport: &Viewport,
    geometry: &G,
    animator: &mut A,
) -> Option<f64>
where
    G: Geometry<E> + ?Sized,
    A: Animator<E> + ?Sized,
{
    let container = geometry
        .element(&options.parent)
        .filter(ElementGeometry::is_rendered)?;
    let child_geometry = geometry
        .element(child)
        .filter(ElementGeometry::is_rendered)?;
    let Some(c_pos) = options.progress(&container, viewport, offset) else {
        sfdebug!(
            viewport_height = viewport.height,
            container_height = container.outer_height,
            "parallax: degenerate container span"
        );
        return None;
    };
    let target = options.target_top(c_pos, &container, &child_geometry);
    sftrace!(c_pos, target, speed_ms = options.speed_ms, "parallax: animate");
    animator.animate(child, target, options.speed_ms, options.easing);
    Some(target)
}
