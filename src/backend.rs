use crate::{Dpi, Error, ScalingConfig};

/// DPI functions that only exist on newer systems and must be looked up at runtime.
///
/// Obtained from [`DisplayBackend::load_dpi_api`].
pub trait DpiApi {
    /// A display monitor handle
    type Output;

    /// Opt the process out of DPI virtualization.
    ///
    /// Returns whether the call succeeded.
    #[doc(alias = "SetProcessDPIAware")]
    fn set_process_dpi_aware(&self) -> bool;

    /// The effective DPI of a monitor, if it could be queried.
    #[doc(alias = "GetDpiForMonitor")]
    fn monitor_dpi(&self, output: &Self::Output) -> Option<Dpi>;
}

/// The display facilities the scaling fix needs from the platform.
pub trait DisplayBackend {
    /// A display monitor handle
    type Output;

    /// The runtime-resolved DPI functions
    type DpiApi: DpiApi<Output = Self::Output>;

    /// Resolve the optional DPI functions.
    ///
    /// Fails when the running system does not provide them.
    fn load_dpi_api(&self) -> Result<Self::DpiApi, Error>;

    /// All display monitors, in system order
    #[doc(alias = "EnumDisplayMonitors")]
    fn outputs(&self) -> Result<Vec<Self::Output>, Error>;

    /// The device name of a monitor, such as `\\.\DISPLAY1`
    #[doc(alias = "GetMonitorInfoW")]
    fn device_name(&self, output: &Self::Output) -> Result<String, Error>;

    /// The DPI a device context for `device_name` reports, if one could be created.
    #[doc(alias = "GetDeviceCaps")]
    fn device_context_dpi(&self, device_name: &str) -> Option<Dpi>;
}

/// The DPI of a single monitor.
///
/// Prefers the per-monitor API and falls back to a device context.
/// Ignored devices, and monitors whose info cannot be read, yield nothing.
pub fn output_dpi<B: DisplayBackend>(
    backend: &B,
    api: &B::DpiApi,
    config: &ScalingConfig,
    output: &B::Output,
) -> Option<Dpi> {
    let device_name = match backend.device_name(output) {
        Ok(name) => name,
        Err(e) => {
            log::debug!("skipping monitor without info: {e}");
            return None
        },
    };

    if config.is_ignored_device(&device_name) {
        log::debug!("skipping virtual display {device_name:?}");
        return None
    }

    let dpi = match api.monitor_dpi(output) {
        Some(dpi) if dpi.is_known() => Some(dpi),
        _ => {
            log::debug!("no per-monitor DPI for {device_name:?}, asking its device context");
            backend.device_context_dpi(&device_name)
        },
    };

    let dpi = dpi.filter(Dpi::is_known)?;
    log::debug!("monitor {device_name:?} reports {dpi} DPI");
    Some(dpi)
}

/// The DPI of the first monitor that reports one.
///
/// Only a single monitor is considered; mixed-DPI setups get whichever
/// monitor the system enumerates first.
pub fn read_dpi<B: DisplayBackend>(backend: &B, api: &B::DpiApi, config: &ScalingConfig) -> Option<Dpi> {
    let outputs = match backend.outputs() {
        Ok(outputs) => outputs,
        Err(e) => {
            log::warn!("failed to enumerate display monitors: {e}");
            return None
        },
    };

    outputs
        .iter()
        .find_map(|output| output_dpi(backend, api, config, output))
}
