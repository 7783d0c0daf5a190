//! Internal helpers shared by the decoders.

/// Returns `Err($error)` from the enclosing function unless `$predicate` holds.
///
/// The error expression is only evaluated when the check fails, so it may
/// allocate freely:
///
/// ```ignore
/// ensure!(is_valid_version(version), ParseError::bad_request(text));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr $(,)?) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
