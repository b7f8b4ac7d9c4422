use crate::scan::error::DTDParseError;

/// The callback channel for errors found while scanning.
///
/// Reports at [`FatalError`](crate::error::DTDErrorLevel::FatalError) level
/// are followed by an `Err` from the scanner; reports at the other levels
/// are informational and scanning continues past them.
pub trait ErrorHandler {
    fn error(&self, error: DTDParseError) {
        let _ = error;
    }

    fn fatal_error(&self, error: DTDParseError) {
        let _ = error;
    }

    fn warning(&self, error: DTDParseError) {
        let _ = error;
    }
}

/// Writes every report to stderr.
pub struct DefaultErrorHandler;

impl ErrorHandler for DefaultErrorHandler {
    fn error(&self, error: DTDParseError) {
        eprintln!("{error}")
    }

    fn fatal_error(&self, error: DTDParseError) {
        eprintln!("{error}")
    }

    fn warning(&self, error: DTDParseError) {
        eprintln!("{error}")
    }
}
