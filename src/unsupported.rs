use crate::{
    backend::{DisplayBackend, DpiApi},
    Dpi, Error,
};

/// A display backend for platforms without Win32; every probe fails.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnsupportedDisplay;

/// A monitor handle that can never exist
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoOutput {}

/// DPI functions that can never be resolved
#[derive(Copy, Clone, Debug)]
pub enum NoDpiApi {}

impl DpiApi for NoDpiApi {
    type Output = NoOutput;

    fn set_process_dpi_aware(&self) -> bool {
        match *self {}
    }

    fn monitor_dpi(&self, output: &NoOutput) -> Option<Dpi> {
        match *output {}
    }
}

impl DisplayBackend for UnsupportedDisplay {
    type Output = NoOutput;
    type DpiApi = NoDpiApi;

    fn load_dpi_api(&self) -> Result<NoDpiApi, Error> {
        Err(Error::Unsupported)
    }

    fn outputs(&self) -> Result<Vec<NoOutput>, Error> {
        Err(Error::Unsupported)
    }

    fn device_name(&self, output: &NoOutput) -> Result<String, Error> {
        match *output {}
    }

    fn device_context_dpi(&self, _device_name: &str) -> Option<Dpi> {
        None
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{MemoryEnvironment, OsVersion, ScalingConfig, ScalingFix, SystemVersion},
    };

    #[test]
    fn nothing_to_probe() {
        assert!(matches!(UnsupportedDisplay.load_dpi_api(), Err(Error::Unsupported)));
        assert!(UnsupportedDisplay.outputs().is_err());
        assert_eq!(UnsupportedDisplay.device_context_dpi("\\\\.\\DISPLAY1"), None);
    }

    #[test]
    fn fix_reports_missing_api() {
        let version = OsVersion::known(SystemVersion::WINDOWS_8_1);
        let config = ScalingConfig::default();
        let mut env = MemoryEnvironment::new();
        let outcome = ScalingFix::new(&version, &config).apply(&UnsupportedDisplay, &mut env);
        assert!(matches!(outcome, crate::FixOutcome::MissingApi(Error::Unsupported)));
        assert!(env.is_empty());
    }
}
