/// Bound for elements tracked by the adapter's per-element maps.
#[cfg(feature = "std")]
pub trait ElementKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> ElementKey for T {}

#[cfg(not(feature = "std"))]
pub trait ElementKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> ElementKey for T {}
