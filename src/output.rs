use {
    crate::win32::wide_str_from_slice_truncated,
    std::{
        fmt::{self, Debug, Formatter},
        mem, ptr,
    },
    windows::{
        core::Result as WinResult,
        Win32::{
            Foundation::{BOOL, LPARAM, RECT},
            Graphics::Gdi::{EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFOEXW},
        },
    },
};

/// A desktop display monitor, as handed out by [`EnumDisplayMonitors`][enumdisplaymonitors].
///
/// [enumdisplaymonitors]: https://learn.microsoft.com/en-us/windows/win32/api/winuser/nf-winuser-enumdisplaymonitors
#[derive(Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
#[doc(alias = "HMONITOR")]
pub struct Output {
    handle: HMONITOR,
}

impl Output {
    /// All display monitors, in the order the system reports them
    #[doc(alias = "EnumDisplayMonitors")]
    pub fn enumerate() -> WinResult<Vec<Self>> {
        unsafe extern "system" fn push_output(handle: HMONITOR, _hdc: HDC, _rect: *mut RECT, outputs: LPARAM) -> BOOL {
            let outputs = &mut *(outputs.0 as *mut Vec<Output>);
            outputs.push(Output::from_win32(handle));
            BOOL::from(true)
        }

        let mut outputs = Vec::new();
        let userdata = LPARAM(ptr::addr_of_mut!(outputs) as isize);
        unsafe { EnumDisplayMonitors(None, None, Some(push_output), userdata) }.ok()?;
        Ok(outputs)
    }

    /// The GDI device name, such as `\\.\DISPLAY1`
    ///
    /// A device context for the monitor is created by this name.
    #[doc(alias = "szDevice")]
    pub fn device_name(&self) -> WinResult<String> {
        let info = self.win32_monitor_info()?;
        Ok(wide_str_from_slice_truncated(&info.szDevice).to_string_lossy())
    }
}

#[allow(missing_docs)]
#[cfg_attr(feature = "doc", doc(cfg(feature = "win32")))]
#[cfg_attr(not(feature = "win32"), doc(hidden))]
impl Output {
    pub const fn from_win32(handle: HMONITOR) -> Self {
        Self { handle }
    }

    pub const fn win32_handle(&self) -> HMONITOR {
        self.handle
    }

    #[doc(alias = "GetMonitorInfoW")]
    pub fn win32_monitor_info(&self) -> WinResult<MONITORINFOEXW> {
        let mut info = MONITORINFOEXW::default();
        info.monitorInfo.cbSize = mem::size_of::<MONITORINFOEXW>() as _;
        unsafe { GetMonitorInfoW(self.handle, ptr::addr_of_mut!(info.monitorInfo)) }.ok()?;
        Ok(info)
    }
}

impl Debug for Output {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut debug = f.debug_struct("Output");
        debug.field("handle", &self.handle);
        if let Ok(name) = self.device_name() {
            debug.field("device", &name);
        }
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outputs_have_device_names() {
        for output in Output::enumerate().unwrap() {
            let name = output.device_name().unwrap();
            assert!(name.starts_with("\\\\.\\"), "{name}");
            assert!(format!("{output:?}").contains("device"));
        }
    }
}
