use std::borrow::Cow;

use crate::error::{DTDError, DTDErrorLevel};

/// An error report delivered through the
/// [`ErrorHandler`](crate::scan::handler::ErrorHandler) channel.
///
/// Positions refer to the furthest original source character consumed at
/// the time of the report; entity expansion does not disturb them.
#[derive(Debug, Clone)]
pub struct DTDParseError {
    pub error: DTDError,
    pub level: DTDErrorLevel,
    pub line: usize,
    pub column: usize,
    /// Insertion point in the original source.
    pub offset: usize,
    pub message: Cow<'static, str>,
}

impl std::fmt::Display for DTDParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[line:{},column:{}][{}] {}",
            self.line, self.column, self.level, self.message,
        )
    }
}

impl std::error::Error for DTDParseError {}

macro_rules! generic_error {
    ($method:ident, $handler:expr, $code:expr, $level:expr, $stream:expr, $message:literal, $( $args:expr ),+) => {
        $handler.$method($crate::scan::error::DTDParseError {
            error: $code,
            level: $level,
            line: $stream.line(),
            column: $stream.column(),
            offset: $stream.source_offset(),
            message: ::std::borrow::Cow::Owned(format!($message, $( $args ),+)),
        })
    };
    ($method:ident, $handler:expr, $code:expr, $level:expr, $stream:expr, $message:literal) => {
        $handler.$method($crate::scan::error::DTDParseError {
            error: $code,
            level: $level,
            line: $stream.line(),
            column: $stream.column(),
            offset: $stream.source_offset(),
            message: ::std::borrow::Cow::Borrowed($message),
        })
    };
    ($method:ident, $handler:expr, $code:expr, $level:expr, $stream:expr, $message:expr) => {
        $handler.$method($crate::scan::error::DTDParseError {
            error: $code,
            level: $level,
            line: $stream.line(),
            column: $stream.column(),
            offset: $stream.source_offset(),
            message: ::std::borrow::Cow::Owned($message.into()),
        })
    };
}

macro_rules! fatal_error {
    ($tokenizer:expr, $code:ident, $message:literal, $( $args:expr ),+) => {
        $crate::scan::error::generic_error!(fatal_error, $tokenizer.error_handler, $crate::error::DTDError::$code, $crate::error::DTDErrorLevel::FatalError, $tokenizer.stream, $message, $( $args ),+);
        $tokenizer.fatal_error_occurred = true;
    };
    ($tokenizer:expr, $code:ident, $message:literal) => {
        $crate::scan::error::generic_error!(fatal_error, $tokenizer.error_handler, $crate::error::DTDError::$code, $crate::error::DTDErrorLevel::FatalError, $tokenizer.stream, $message);
        $tokenizer.fatal_error_occurred = true;
    };
    ($tokenizer:expr, $code:ident, $message:expr) => {
        $crate::scan::error::generic_error!(fatal_error, $tokenizer.error_handler, $crate::error::DTDError::$code, $crate::error::DTDErrorLevel::FatalError, $tokenizer.stream, $message);
        $tokenizer.fatal_error_occurred = true;
    };
}

macro_rules! error {
    ($tokenizer:expr, $code:ident, $message:literal, $( $args:expr ),+) => {
        $crate::scan::error::generic_error!(error, $tokenizer.error_handler, $crate::error::DTDError::$code, $crate::error::DTDErrorLevel::Error, $tokenizer.stream, $message, $( $args ),+);
    };
    ($tokenizer:expr, $code:ident, $message:literal) => {
        $crate::scan::error::generic_error!(error, $tokenizer.error_handler, $crate::error::DTDError::$code, $crate::error::DTDErrorLevel::Error, $tokenizer.stream, $message);
    };
    ($tokenizer:expr, $code:ident, $message:expr) => {
        $crate::scan::error::generic_error!(error, $tokenizer.error_handler, $crate::error::DTDError::$code, $crate::error::DTDErrorLevel::Error, $tokenizer.stream, $message);
    };
}

macro_rules! warning {
    ($tokenizer:expr, $code:ident, $message:literal, $( $args:expr ),+) => {
        $crate::scan::error::generic_error!(warning, $tokenizer.error_handler, $crate::error::DTDError::$code, $crate::error::DTDErrorLevel::Warning, $tokenizer.stream, $message, $( $args ),+);
    };
    ($tokenizer:expr, $code:ident, $message:literal) => {
        $crate::scan::error::generic_error!(warning, $tokenizer.error_handler, $crate::error::DTDError::$code, $crate::error::DTDErrorLevel::Warning, $tokenizer.stream, $message);
    };
}

pub(crate) use {error, fatal_error, generic_error, warning};
