use thiserror::Error;

/// Errors raised while probing the platform.
///
/// None of these escape [`fix_qt_hidpi_non_integer_scaling`](crate::fix_qt_hidpi_non_integer_scaling);
/// they are folded into a [`FixOutcome`](crate::FixOutcome) instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A system library could not be loaded
    #[error("unable to load {library}")]
    LibraryUnavailable {
        /// Library name as passed to the loader
        library: &'static str,
    },

    /// A library was loaded but does not export the requested symbol
    #[error("{library} does not export {symbol}")]
    MissingEntryPoint {
        /// Library name as passed to the loader
        library: &'static str,
        /// Exported function name
        symbol: &'static str,
    },

    /// A Win32 call failed
    #[cfg(windows)]
    #[error(transparent)]
    Win32(#[from] windows::core::Error),

    /// The operation has no implementation on this platform
    #[error("not supported on this platform")]
    Unsupported,
}

impl Error {
    /// Whether this error means an optional OS capability is absent,
    /// as opposed to a call into an available API failing.
    pub fn is_missing_capability(&self) -> bool {
        match self {
            Error::LibraryUnavailable { .. } | Error::MissingEntryPoint { .. } | Error::Unsupported => true,
            #[cfg(windows)]
            Error::Win32(..) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entry_point_message() {
        let err = Error::MissingEntryPoint {
            library: "SHCore",
            symbol: "GetDpiForMonitor",
        };
        assert_eq!(err.to_string(), "SHCore does not export GetDpiForMonitor");
        assert!(err.is_missing_capability());
    }

    #[test]
    fn unsupported_is_missing_capability() {
        assert!(Error::Unsupported.is_missing_capability());
        assert!(Error::LibraryUnavailable { library: "user32" }.is_missing_capability());
    }
}
