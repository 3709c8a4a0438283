use {
    crate::{
        backend::{DisplayBackend, DpiApi},
        Dpi, Error, Output, SystemVersion,
    },
    libloading::Library,
    std::{
        fmt::{self, Debug, Formatter},
        mem, ptr,
    },
    widestring::WideCString,
    windows::{
        core::{Result as WinResult, HRESULT, PCWSTR},
        Win32::{
            Foundation::BOOL,
            Graphics::Gdi::{CreateDCW, DeleteDC, GetDeviceCaps, HDC, HMONITOR, LOGPIXELSX, LOGPIXELSY},
            System::SystemInformation::{GetVersionExW, OSVERSIONINFOEXW, OSVERSIONINFOW},
        },
    },
};

/// `MDT_EFFECTIVE_DPI` from `MONITOR_DPI_TYPE`
const MDT_EFFECTIVE_DPI: i32 = 0;

type GetDpiForMonitor = unsafe extern "system" fn(HMONITOR, i32, *mut u32, *mut u32) -> HRESULT;
type SetProcessDpiAware = unsafe extern "system" fn() -> BOOL;

/// Retrieves the running OS version via [`GetVersionExW`][getversionexw].
///
/// Newer systems report whatever version the executable manifest declares
/// support for, which is at most 6.2 without one.
///
/// [getversionexw]: https://learn.microsoft.com/en-us/windows/win32/api/sysinfoapi/nf-sysinfoapi-getversionexw
#[doc(alias = "GetVersionExW")]
#[allow(deprecated)]
pub fn query_system_version() -> WinResult<SystemVersion> {
    let mut info = OSVERSIONINFOEXW::default();
    info.dwOSVersionInfoSize = mem::size_of::<OSVERSIONINFOEXW>() as _;
    unsafe { GetVersionExW(ptr::addr_of_mut!(info) as *mut OSVERSIONINFOW) }.ok()?;
    Ok(SystemVersion::new(
        info.dwMajorVersion,
        info.dwMinorVersion,
        info.wServicePackMajor.into(),
    ))
}

fn open_library(library: &'static str) -> Result<Library, Error> {
    unsafe { Library::new(library) }.map_err(|e| {
        log::debug!("failed to load {library}: {e}");
        Error::LibraryUnavailable { library }
    })
}

/// Looks up `symbol` in `lib`; `T` must be the symbol's real function pointer type.
unsafe fn resolve<T: Copy>(lib: &Library, library: &'static str, symbol: &'static str) -> Result<T, Error> {
    match lib.get::<T>(symbol.as_bytes()) {
        Ok(sym) => Ok(*sym),
        Err(e) => {
            log::debug!("{library} has no {symbol}: {e}");
            Err(Error::MissingEntryPoint { library, symbol })
        },
    }
}

/// `GetDpiForMonitor` and `SetProcessDPIAware`, resolved at runtime.
///
/// `GetDpiForMonitor` lives in `SHCore.dll`, which only exists since Windows 8.1.
/// The libraries stay loaded for as long as this value lives.
pub struct Win32DpiApi {
    get_dpi_for_monitor: GetDpiForMonitor,
    set_process_dpi_aware: SetProcessDpiAware,
    _shcore: Library,
    _user32: Library,
}

impl Win32DpiApi {
    const SHCORE: &'static str = "SHCore.dll";
    const USER32: &'static str = "user32.dll";

    /// Resolve both functions, failing if either is missing
    pub fn load() -> Result<Self, Error> {
        let shcore = open_library(Self::SHCORE)?;
        let get_dpi_for_monitor = unsafe { resolve::<GetDpiForMonitor>(&shcore, Self::SHCORE, "GetDpiForMonitor")? };
        let user32 = open_library(Self::USER32)?;
        let set_process_dpi_aware =
            unsafe { resolve::<SetProcessDpiAware>(&user32, Self::USER32, "SetProcessDPIAware")? };

        Ok(Self {
            get_dpi_for_monitor,
            set_process_dpi_aware,
            _shcore: shcore,
            _user32: user32,
        })
    }
}

#[allow(missing_docs)]
#[cfg_attr(feature = "doc", doc(cfg(feature = "win32")))]
#[cfg_attr(not(feature = "win32"), doc(hidden))]
impl Win32DpiApi {
    /// The effective DPI of a monitor
    #[doc(alias = "GetDpiForMonitor")]
    pub fn win32_get_dpi_for_monitor(&self, monitor: HMONITOR) -> WinResult<Dpi> {
        let (mut x, mut y) = (0, 0);
        unsafe { (self.get_dpi_for_monitor)(monitor, MDT_EFFECTIVE_DPI, &mut x, &mut y) }.ok()?;
        Ok(Dpi::new(x, y))
    }

    #[doc(alias = "SetProcessDPIAware")]
    pub fn win32_set_process_dpi_aware(&self) -> WinResult<()> {
        unsafe { (self.set_process_dpi_aware)() }.ok()
    }
}

impl DpiApi for Win32DpiApi {
    type Output = Output;

    fn set_process_dpi_aware(&self) -> bool {
        self.win32_set_process_dpi_aware().is_ok()
    }

    fn monitor_dpi(&self, output: &Output) -> Option<Dpi> {
        match self.win32_get_dpi_for_monitor(output.win32_handle()) {
            Ok(dpi) => Some(dpi),
            Err(e) => {
                log::debug!("GetDpiForMonitor failed for {output:?}: {e}");
                None
            },
        }
    }
}

impl Debug for Win32DpiApi {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Win32DpiApi")
            .field("get_dpi_for_monitor", &(self.get_dpi_for_monitor as *const ()))
            .field("set_process_dpi_aware", &(self.set_process_dpi_aware as *const ()))
            .finish()
    }
}

/// The Win32 display backend
#[derive(Copy, Clone, Debug, Default)]
pub struct Win32Display;

impl DisplayBackend for Win32Display {
    type Output = Output;
    type DpiApi = Win32DpiApi;

    fn load_dpi_api(&self) -> Result<Win32DpiApi, Error> {
        Win32DpiApi::load()
    }

    fn outputs(&self) -> Result<Vec<Output>, Error> {
        Ok(Output::enumerate()?)
    }

    fn device_name(&self, output: &Output) -> Result<String, Error> {
        Ok(output.device_name()?)
    }

    fn device_context_dpi(&self, device_name: &str) -> Option<Dpi> {
        let device_name = WideCString::from_str(device_name).ok()?;
        let hdc = unsafe { CreateDCW(PCWSTR(device_name.as_ptr()), PCWSTR::null(), PCWSTR::null(), None) };
        if hdc.0 == 0 {
            return None
        }

        let caps = HDC(hdc.0);
        let (x, y) = unsafe { (GetDeviceCaps(caps, LOGPIXELSX), GetDeviceCaps(caps, LOGPIXELSY)) };
        let _ = unsafe { DeleteDC(hdc) };
        Some(Dpi::new(x.try_into().unwrap_or(0), y.try_into().unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_library() {
        assert!(matches!(
            open_library("hidpi-winapi-no-such-library.dll"),
            Err(Error::LibraryUnavailable { .. })
        ));
    }

    #[test]
    fn missing_symbol() {
        let user32 = open_library(Win32DpiApi::USER32).unwrap();
        let res = unsafe { resolve::<SetProcessDpiAware>(&user32, Win32DpiApi::USER32, "NoSuchDpiFunction") };
        assert!(matches!(
            res,
            Err(Error::MissingEntryPoint {
                library: "user32.dll",
                symbol: "NoSuchDpiFunction",
            })
        ));
    }

    #[test]
    fn resolves_dpi_awareness() {
        let user32 = open_library(Win32DpiApi::USER32).unwrap();
        assert!(unsafe { resolve::<SetProcessDpiAware>(&user32, Win32DpiApi::USER32, "SetProcessDPIAware") }.is_ok());
    }
}
