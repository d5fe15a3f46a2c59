//! Error macros for fringe

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::FringeError::UsageError($msg.to_string()))
    };
}

/// Macro for returning a parse error at a line of an input file
#[macro_export]
macro_rules! bail_parse {
    ($file:expr, $line:expr, $($reason:tt)+) => {
        return Err($crate::error::FringeError::parse($file, $line, format!($($reason)+)))
    };
}
