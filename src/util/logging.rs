//! Thin wrappers over the [`log`](https://docs.rs/log) facade that disappear when the `log` feature
//! is disabled. Arguments are still type checked either way.

macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::trace!(target: "fixed_array", $($arg)+);
        #[cfg(not(feature = "log"))]
        let _ = format_args!($($arg)+);
    }};
}

macro_rules! debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::debug!(target: "fixed_array", $($arg)+);
        #[cfg(not(feature = "log"))]
        let _ = format_args!($($arg)+);
    }};
}

pub(crate) use debug;
pub(crate) use trace;
