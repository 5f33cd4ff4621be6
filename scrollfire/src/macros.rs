#[cfg(feature = "tracing")]
macro_rules! sftrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scrollfire", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sftrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! sfdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scrollfire", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sfdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! sfwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "scrollfire", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sfwarn {
    ($($tt:tt)*) => {};
}
