/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Logging macros for builds without the `log` feature
//!
//! The macros take the same arguments as their `log` crate
//! counterparts. Arguments are still checked by `format_args!`,
//! so a value read only by a log call keeps counting as used,
//! but no record is ever emitted.

// Exported macros always land in the crate root, re-exporting
// them here keeps `imageops_core::log::trace` and friends working
// the same way with or without the feature.
pub use crate::{
    __imageops_debug as debug, __imageops_error as error, __imageops_info as info,
    __imageops_log_enabled as log_enabled, __imageops_trace as trace, __imageops_warn as warn
};

/// Verbosity of a record, from least to most verbose
#[repr(usize)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Level {
    Error = 1,
    Warn,
    Info,
    Debug,
    Trace
}

/// Always false, nothing is logged without the feature
#[doc(hidden)]
#[macro_export]
macro_rules! __imageops_log_enabled {
    ($lvl:expr) => {{
        let _: $crate::log::Level = $lvl;
        false
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __imageops_discard {
    ($($arg:tt)+) => {{
        let _ = ::core::format_args!($($arg)+);
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __imageops_error {
    ($($arg:tt)+) => {
        $crate::__imageops_discard!($($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __imageops_warn {
    ($($arg:tt)+) => {
        $crate::__imageops_discard!($($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __imageops_info {
    ($($arg:tt)+) => {
        $crate::__imageops_discard!($($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __imageops_debug {
    ($($arg:tt)+) => {
        $crate::__imageops_discard!($($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __imageops_trace {
    ($($arg:tt)+) => {
        $crate::__imageops_discard!($($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::log::Level::{Trace, Warn};
    use crate::log::{debug, error, info, log_enabled, trace, warn};

    #[test]
    fn macros_accept_log_arguments() {
        let width = 4;
        let name = "blur";

        error!("error {width}");
        warn!("{} of {}", name, width);
        info!("plain message");
        debug!("{:?}", (width, name));
        trace!("done with `{name}`",);

        assert!(!log_enabled!(Trace));
        assert!(!log_enabled!(Warn));
    }
}
