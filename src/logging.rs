//! Optional serial logging
//!
//! Prints through `esp-println` when the `esp32-log` feature is enabled and
//! compiles to nothing otherwise.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!($($arg)*);
        #[cfg(not(feature = "esp32-log"))]
        let _ = core::format_args!($($arg)*);
    }};
}

pub(crate) use debug;
