//! Status-line macros shared by every crate in the workspace.
//!
//! These are thin wrappers over `tracing`; the binary's subscriber decides
//! how each level is rendered (symbols, colors).

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
