//! Logging macros shared by the workspace crates
//!
//! Messages go to stderr with a level prefix. They are only emitted when the
//! crate invoking the macro is built with its `trace` feature, which keeps
//! the diagnostics stream of the binary down to its documented output.

#[macro_export]
macro_rules! debug {
    ($str: expr) => {
        if cfg!(feature = "trace") {
            eprintln!(concat!("[DEBUG] ", $str))
        }
    };
    ($str: expr, $($rest: expr),+) => {
        if cfg!(feature = "trace") {
            eprintln!(concat!("[DEBUG] ", $str), $($rest),+)
        }
    };
}

#[macro_export]
macro_rules! warn {
    ($str: expr) => {
        if cfg!(feature = "trace") {
            eprintln!(concat!("[WARN] ", $str))
        }
    };
    ($str: expr, $($rest: expr),+) => {
        if cfg!(feature = "trace") {
            eprintln!(concat!("[WARN] ", $str), $($rest),+)
        }
    };
}
