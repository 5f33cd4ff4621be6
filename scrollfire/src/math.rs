//! Float helpers that are not available in `core`.

#[cfg(feature = "std")]
pub(crate) fn abs(x: f64) -> f64 {
    x.abs()
}

#[cfg(not(feature = "std"))]
pub(crate) fn abs(x: f64) -> f64 {
    libm::fabs(x)
}

#[cfg(feature = "std")]
pub(crate) fn round(x: f64) -> f64 {
    x.round()
}

#[cfg(not(feature = "std"))]
pub(crate) fn round(x: f64) -> f64 {
    libm::round(x)
}

#[cfg(feature = "std")]
pub(crate) fn cos(x: f64) -> f64 {
    x.cos()
}

#[cfg(not(feature = "std"))]
pub(crate) fn cos(x: f64) -> f64 {
    libm::cos(x)
}
