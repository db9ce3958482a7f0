//! Macros for timestamped console logging.
//!
//! In the browser these forward to `gloo_console` so messages land in the
//! devtools console. On native targets (tests, server-side rendering) they
//! forward to `tracing` instead, since the JS console bindings are only
//! callable from wasm32.

/// Paths the macros expand to, so downstream crates need no direct
/// dependency on the logging backends.
#[doc(hidden)]
pub mod __private {
    pub use gloo_console;
    pub use js_sys;
    pub use tracing;
}

#[doc(hidden)]
#[macro_export]
macro_rules! __console_emit {
    ($level:ident, $msg:expr) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::utils::console_macros::__private::gloo_console::$level!(format!(
                "[{}] {}",
                $crate::utils::console_macros::__private::js_sys::Date::now(),
                $msg
            ));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            $crate::__console_emit!(@native $level, $msg);
        }
    }};
    (@native info, $msg:expr) => { $crate::utils::console_macros::__private::tracing::info!("{}", $msg) };
    (@native log, $msg:expr) => { $crate::utils::console_macros::__private::tracing::info!("{}", $msg) };
    (@native warn, $msg:expr) => { $crate::utils::console_macros::__private::tracing::warn!("{}", $msg) };
    (@native error, $msg:expr) => { $crate::utils::console_macros::__private::tracing::error!("{}", $msg) };
    (@native debug, $msg:expr) => { $crate::utils::console_macros::__private::tracing::debug!("{}", $msg) };
}

#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::__console_emit!(info, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_log {
    ($fmt:expr) => {
        $crate::__console_emit!(log, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(log, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::__console_emit!(warn, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(warn, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::__console_emit!(error, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(error, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::__console_emit!(debug, $fmt)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(debug, format!($fmt, $($arg)*))
    };
}
