//! Logging macros.
//!
//! Each macro converts its arguments with `Value::from` and records the
//! call's file, line and module path.

/// Log at an explicit level: `log!(logger, Level::Info, "a", 1)`.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_at(
            $level,
            $crate::__private::Callsite::new(file!(), line!()).with_function(module_path!()),
            &[$($crate::__private::Value::from($arg)),*],
        )
    };
}

/// Log at `error`.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::__private::Level::Error $(, $arg)*)
    };
}

/// Log at `warn`.
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::__private::Level::Warn $(, $arg)*)
    };
}

/// Log at `info`.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::__private::Level::Info $(, $arg)*)
    };
}

/// Log at `debug`.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::__private::Level::Debug $(, $arg)*)
    };
}

/// Log at `trace`.
#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::__private::Level::Trace $(, $arg)*)
    };
}
