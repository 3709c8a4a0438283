use {
    crate::{
        backend::{read_dpi, DisplayBackend, DpiApi},
        Dpi, Environment, Error, OsVersion, ScaleFactor, ScalingConfig, SystemVersion,
    },
    std::fmt::{self, Display, Formatter},
};

/// What [`ScalingFix::apply`] ended up doing.
#[derive(Debug)]
pub enum FixOutcome {
    /// The scale factor was written to the environment
    Applied(ScaleFactor),
    /// The user already chose a scaling through this variable; nothing was changed
    UserOverride(String),
    /// The system is older than the configured minimum
    UnsupportedSystem(SystemVersion),
    /// The configured baseline DPI is zero, so no scale factor can be computed
    InvalidBaseline,
    /// The runtime DPI functions could not be resolved
    MissingApi(Error),
    /// No monitor reported a DPI
    NoMonitorDpi,
    /// The monitor is at or below 100% scaling
    NotScaled(Dpi),
}

impl FixOutcome {
    /// Whether the scaling is taken care of, either by us or by the user.
    ///
    /// A `false` leaves Qt with its default integer scaling.
    pub fn is_handled(&self) -> bool {
        matches!(self, FixOutcome::Applied(..) | FixOutcome::UserOverride(..))
    }

    /// The scale factor written, if any
    pub fn scale_factor(&self) -> Option<ScaleFactor> {
        match *self {
            FixOutcome::Applied(factor) => Some(factor),
            _ => None,
        }
    }
}

impl Display for FixOutcome {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FixOutcome::Applied(factor) => write!(f, "scale factor set to {factor}"),
            FixOutcome::UserOverride(var) => write!(f, "{var} is set by the user"),
            FixOutcome::UnsupportedSystem(version) => write!(f, "Windows {version} is too old"),
            FixOutcome::MissingApi(e) => write!(f, "DPI functions unavailable: {e}"),
            FixOutcome::InvalidBaseline => write!(f, "baseline DPI must not be zero"),
            FixOutcome::NoMonitorDpi => write!(f, "no monitor reported a DPI"),
            FixOutcome::NotScaled(dpi) => write!(f, "{dpi} DPI needs no scaling"),
        }
    }
}

impl From<FixOutcome> for bool {
    fn from(outcome: FixOutcome) -> Self {
        outcome.is_handled()
    }
}

/// Works around Qt's integer-only HiDPI scaling by computing the monitor's
/// real scale factor and handing it to Qt through `QT_SCALE_FACTOR`.
///
/// Must run before Qt reads its environment.
#[derive(Copy, Clone, Debug)]
pub struct ScalingFix<'a> {
    version: &'a OsVersion,
    config: &'a ScalingConfig,
}

impl<'a> ScalingFix<'a> {
    /// Prepare a fix for the given system
    pub const fn new(version: &'a OsVersion, config: &'a ScalingConfig) -> Self {
        Self { version, config }
    }

    /// The configuration in use
    pub const fn config(&self) -> &'a ScalingConfig {
        self.config
    }

    /// Run the fix against a display backend and an environment.
    ///
    /// Steps stop at the first one that fails; the environment is only ever
    /// written in the [`Applied`](FixOutcome::Applied) case.
    pub fn apply<B: DisplayBackend, E: Environment>(&self, backend: &B, env: &mut E) -> FixOutcome {
        let outcome = self.apply_(backend, env);
        match &outcome {
            FixOutcome::Applied(..) => log::info!("HiDPI fix: {outcome}"),
            _ => log::debug!("HiDPI fix skipped: {outcome}"),
        }
        outcome
    }

    fn apply_<B: DisplayBackend, E: Environment>(&self, backend: &B, env: &mut E) -> FixOutcome {
        let config = self.config;

        if config.baseline_dpi == 0 {
            return FixOutcome::InvalidBaseline
        }

        if !self.version.is_at_least(config.minimum_version) {
            return FixOutcome::UnsupportedSystem(self.version.system_version())
        }

        if let Some(var) = config.user_override_vars().find(|var| env.is_set(var)) {
            return FixOutcome::UserOverride(var.into())
        }

        let api = match backend.load_dpi_api() {
            Ok(api) => api,
            Err(e) => {
                if !e.is_missing_capability() {
                    log::warn!("failed to resolve DPI functions: {e}");
                }
                return FixOutcome::MissingApi(e)
            },
        };

        // without this every monitor looks like 96 DPI
        if !api.set_process_dpi_aware() {
            log::warn!("SetProcessDPIAware failed, monitor DPI may be virtualized");
        }

        let dpi = match read_dpi(backend, &api, config) {
            Some(dpi) => dpi,
            None => return FixOutcome::NoMonitorDpi,
        };

        if dpi.x <= config.baseline_dpi {
            return FixOutcome::NotScaled(dpi)
        }

        let factor = dpi.scale_factor(config.baseline_dpi);
        env.set_var(&config.scale_factor_var, &factor.to_string());
        FixOutcome::Applied(factor)
    }
}
