use crate::{SystemVersion, BASE_DPI};

/// Knobs for [`ScalingFix`](crate::ScalingFix).
///
/// [`Default`] gives the behaviour Qt applications expect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalingConfig {
    /// Variable the computed scale factor is written to
    pub scale_factor_var: String,
    /// Variables whose presence means the user already chose a scaling,
    /// [`scale_factor_var`](Self::scale_factor_var) is always checked as well
    pub override_vars: Vec<String>,
    /// DPI corresponding to 100% scaling, must be nonzero
    pub baseline_dpi: u32,
    /// Oldest system the per-monitor DPI API is expected on
    pub minimum_version: SystemVersion,
    /// Monitor device names that never report a usable DPI
    pub ignored_devices: Vec<String>,
}

impl ScalingConfig {
    /// `QT_SCALE_FACTOR`
    pub const QT_SCALE_FACTOR: &'static str = "QT_SCALE_FACTOR";
    /// `QT_AUTO_SCREEN_SCALE_FACTOR`
    pub const QT_AUTO_SCREEN_SCALE_FACTOR: &'static str = "QT_AUTO_SCREEN_SCALE_FACTOR";
    /// Placeholder monitor some display drivers register
    pub const VIRTUAL_DISPLAY: &'static str = "WinDisc";

    /// Every variable that indicates a user-chosen scaling
    pub fn user_override_vars(&self) -> impl Iterator<Item = &str> {
        Some(&self.scale_factor_var[..])
            .into_iter()
            .chain(self.override_vars.iter().map(|var| &var[..]))
    }

    /// Whether a monitor with this device name should be skipped
    pub fn is_ignored_device(&self, device_name: &str) -> bool {
        self.ignored_devices.iter().any(|ignored| ignored == device_name)
    }
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            scale_factor_var: Self::QT_SCALE_FACTOR.into(),
            override_vars: vec![Self::QT_AUTO_SCREEN_SCALE_FACTOR.into()],
            baseline_dpi: BASE_DPI,
            minimum_version: SystemVersion::WINDOWS_8,
            ignored_devices: vec![Self::VIRTUAL_DISPLAY.into()],
        }
    }
}
