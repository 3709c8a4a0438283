#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/hidpi-winapi/0.1.0/")]
#![cfg_attr(feature = "doc", feature(doc_cfg))]

//! Windows version probing and a workaround for Qt's integer-only HiDPI scaling.
//!
//! Qt rounds its automatic scale factor to whole numbers, so a 150% display
//! ends up at either 100% or 200%. `QT_SCALE_FACTOR` accepts fractions, so
//! this crate reads the monitor DPI and sets that variable before Qt starts.
//!
//! # Example
//!
//! ```rust,no_run
//! use hidpi_winapi::OsVersion;
//!
//! let version = OsVersion::query();
//! if version.is_windows7_or_higher() {
//!     println!("running on Windows {}", version.system_version());
//! }
//!
//! // must happen before the toolkit reads its environment
//! let handled = hidpi_winapi::fix_qt_hidpi_non_integer_scaling(&version);
//! println!("HiDPI scaling handled: {handled}");
//! ```

pub use self::{
    backend::{output_dpi, read_dpi, DisplayBackend, DpiApi},
    config::ScalingConfig,
    dpi::{Dpi, ScaleFactor, BASE_DPI},
    env::{Environment, MemoryEnvironment, ProcessEnvironment},
    error::Error,
    fix::{FixOutcome, ScalingFix},
    version::{OsVersion, SystemVersion},
};
#[cfg(windows)]
pub use self::{
    output::Output,
    system::{query_system_version, Win32Display, Win32DpiApi},
};
#[cfg(not(windows))]
pub use self::unsupported::{NoDpiApi, NoOutput, UnsupportedDisplay};

mod backend;
mod config;
mod dpi;
mod env;
mod error;
mod fix;
#[cfg(windows)]
mod output;
#[cfg(windows)]
mod system;
#[cfg(not(windows))]
mod unsupported;
mod version;

/// The [display backend](DisplayBackend) for the target platform
#[cfg(windows)]
pub type SystemBackend = Win32Display;

/// The [display backend](DisplayBackend) for the target platform
#[cfg(not(windows))]
pub type SystemBackend = UnsupportedDisplay;

/// Set `QT_SCALE_FACTOR` to the primary monitor's fractional scale factor.
///
/// Returns `true` if the variable was set, or if the user already set
/// `QT_SCALE_FACTOR` or `QT_AUTO_SCREEN_SCALE_FACTOR` themselves. Returns
/// `false` when the system is older than Windows 8, the DPI functions are
/// missing, no DPI could be read, or the display runs at 100%.
///
/// See [`ScalingFix`] to customize the variables or observe the outcome.
pub fn fix_qt_hidpi_non_integer_scaling(version: &OsVersion) -> bool {
    let config = ScalingConfig::default();
    ScalingFix::new(version, &config)
        .apply(&SystemBackend::default(), &mut ProcessEnvironment)
        .is_handled()
}

#[cfg(windows)]
#[cfg_attr(feature = "doc", doc(cfg(feature = "win32")))]
pub mod win32 {
    //! [`windows`] API re-exports

    #[allow(missing_docs)]
    #[cfg_attr(feature = "doc", doc(cfg(feature = "win32")))]
    #[cfg_attr(not(feature = "win32"), doc(hidden))]
    #[doc(no_inline)]
    pub use windows::{
        core::HRESULT,
        Win32::{
            Graphics::Gdi::{HMONITOR, MONITORINFOEXW},
            System::SystemInformation::OSVERSIONINFOEXW,
        },
    };
    pub use {
        libloading,
        widestring::{self, WideCStr, WideStr},
        windows::{self, core, Win32},
    };

    pub(crate) fn wide_str_from_slice_truncated(sz: &[u16]) -> &WideStr {
        match WideCStr::from_slice_truncate(sz) {
            Ok(str) => str.as_ref(),
            Err(_) => WideStr::from_slice(sz),
        }
    }

}
