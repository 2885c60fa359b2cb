//! Console logging
//!
//! On wasm32 the macros forward to `console.log` / `console.warn`.
//! Elsewhere the message is formatted and dropped, so native tests never call
//! into JS imports.

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&message.into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = message;
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&message.into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = message;
    }};
}
