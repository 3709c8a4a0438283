use {
    crate::Error,
    std::fmt::{self, Display, Formatter},
};

/// A Windows version number: `major.minor` plus the major service pack number.
///
/// Ordering compares `major`, then `minor`, then `service_pack`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SystemVersion {
    /// `dwMajorVersion`
    pub major: u32,
    /// `dwMinorVersion`
    pub minor: u32,
    /// `wServicePackMajor`
    pub service_pack: u32,
}

impl SystemVersion {
    /// Windows XP, also reported when the version query fails
    pub const WINDOWS_XP: Self = Self::new(5, 1, 0);
    /// Windows Vista
    pub const WINDOWS_VISTA: Self = Self::new(6, 0, 0);
    /// Windows 7
    pub const WINDOWS_7: Self = Self::new(6, 1, 0);
    /// Windows 8
    pub const WINDOWS_8: Self = Self::new(6, 2, 0);
    /// Windows 8.1
    pub const WINDOWS_8_1: Self = Self::new(6, 3, 0);

    /// Construct a version from its parts
    pub const fn new(major: u32, minor: u32, service_pack: u32) -> Self {
        Self {
            major,
            minor,
            service_pack,
        }
    }

    /// `(major, minor, service_pack)`
    pub const fn into_tuple(self) -> (u32, u32, u32) {
        (self.major, self.minor, self.service_pack)
    }
}

impl Display for SystemVersion {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.service_pack)
    }
}

impl From<(u32, u32, u32)> for SystemVersion {
    fn from((major, minor, service_pack): (u32, u32, u32)) -> Self {
        Self::new(major, minor, service_pack)
    }
}

impl From<SystemVersion> for (u32, u32, u32) {
    fn from(version: SystemVersion) -> Self {
        version.into_tuple()
    }
}

/// The result of asking the OS for its version.
///
/// Query it once during startup with [`OsVersion::query`] and hand the value
/// to whatever needs it; nothing here caches globally.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OsVersion {
    detected: Option<SystemVersion>,
}

impl OsVersion {
    /// Ask the running system for its version.
    ///
    /// Uses [`GetVersionExW`][getversionexw] on Windows. Any failure, or any
    /// other platform, produces an [unknown](Self::unknown) version.
    ///
    /// [getversionexw]: https://learn.microsoft.com/en-us/windows/win32/api/sysinfoapi/nf-sysinfoapi-getversionexw
    #[doc(alias = "GetVersionExW")]
    pub fn query() -> Self {
        Self::from_query(query_system_version())
    }

    /// Build from the outcome of a version query, logging it.
    pub fn from_query(res: Result<SystemVersion, Error>) -> Self {
        match res {
            Ok(version) => {
                log::debug!("detected Windows version {version}");
                Self::known(version)
            },
            Err(e) => {
                log::warn!("failed to query the Windows version: {e}");
                Self::unknown()
            },
        }
    }

    /// A successfully detected version
    pub const fn known(version: SystemVersion) -> Self {
        Self {
            detected: Some(version),
        }
    }

    /// A failed version query
    pub const fn unknown() -> Self {
        Self { detected: None }
    }

    /// The detected version, if the query succeeded
    pub const fn detected(&self) -> Option<SystemVersion> {
        self.detected
    }

    /// Whether the version query failed
    pub const fn is_unknown(&self) -> bool {
        self.detected.is_none()
    }

    /// The system version, or [Windows XP](SystemVersion::WINDOWS_XP) if it
    /// could not be determined.
    pub fn system_version(&self) -> SystemVersion {
        self.detected.unwrap_or(SystemVersion::WINDOWS_XP)
    }

    /// Whether the system is at least `version`.
    ///
    /// Always `false` if the version could not be determined.
    pub fn is_at_least(&self, version: SystemVersion) -> bool {
        match self.detected {
            Some(detected) => detected >= version,
            None => false,
        }
    }

    /// [`is_at_least`](Self::is_at_least) taking the version parts separately
    pub fn is_at_least_system_version(&self, major: u32, minor: u32, service_pack: u32) -> bool {
        self.is_at_least(SystemVersion::new(major, minor, service_pack))
    }

    /// Windows Vista (6.0) or newer
    pub fn is_windows_vista_or_higher(&self) -> bool {
        self.is_at_least(SystemVersion::WINDOWS_VISTA)
    }

    /// Windows 7 (6.1) or newer
    pub fn is_windows7_or_higher(&self) -> bool {
        self.is_at_least(SystemVersion::WINDOWS_7)
    }

    /// Windows 8 (6.2) or newer
    pub fn is_windows8_or_higher(&self) -> bool {
        self.is_at_least(SystemVersion::WINDOWS_8)
    }

    /// Windows 8.1 (6.3) or newer
    pub fn is_windows8_point1_or_higher(&self) -> bool {
        self.is_at_least(SystemVersion::WINDOWS_8_1)
    }
}

impl From<SystemVersion> for OsVersion {
    fn from(version: SystemVersion) -> Self {
        Self::known(version)
    }
}

#[cfg(windows)]
fn query_system_version() -> Result<SystemVersion, Error> {
    crate::system::query_system_version().map_err(Error::from)
}

#[cfg(not(windows))]
fn query_system_version() -> Result<SystemVersion, Error> {
    Err(Error::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIN7_SP1: SystemVersion = SystemVersion::new(6, 1, 1);

    #[test]
    fn system_version_is_stable() {
        let os = OsVersion::known(WIN7_SP1);
        let first = os.system_version();
        for _ in 0..4 {
            assert_eq!(os.system_version(), first);
        }
        assert_eq!(first.into_tuple(), (6, 1, 1));
    }

    #[test]
    fn thresholds_around_known_version() {
        let os = OsVersion::known(WIN7_SP1);

        assert!(os.is_at_least_system_version(6, 1, 1));
        assert!(os.is_at_least_system_version(6, 1, 0));
        assert!(os.is_at_least_system_version(6, 0, 5));
        assert!(os.is_at_least_system_version(5, 1, 3));

        assert!(!os.is_at_least_system_version(6, 1, 2));
        assert!(!os.is_at_least_system_version(6, 2, 0));
        assert!(!os.is_at_least_system_version(10, 0, 0));
    }

    #[test]
    fn named_predicates() {
        let win8 = OsVersion::known(SystemVersion::WINDOWS_8);
        assert!(win8.is_windows_vista_or_higher());
        assert!(win8.is_windows7_or_higher());
        assert!(win8.is_windows8_or_higher());
        assert!(!win8.is_windows8_point1_or_higher());

        let win10 = OsVersion::known(SystemVersion::new(10, 0, 0));
        assert!(win10.is_windows8_point1_or_higher());

        let vista = OsVersion::known(SystemVersion::new(6, 0, 2));
        assert!(vista.is_windows_vista_or_higher());
        assert!(!vista.is_windows7_or_higher());
    }

    #[test]
    fn unknown_version_fails_closed() {
        let os = OsVersion::unknown();
        assert!(os.is_unknown());
        assert_eq!(os.system_version(), SystemVersion::WINDOWS_XP);
        assert_eq!(os.system_version().into_tuple(), (5, 1, 0));

        assert!(!os.is_at_least_system_version(0, 0, 0));
        assert!(!os.is_at_least_system_version(5, 1, 0));
        assert!(!os.is_windows_vista_or_higher());
        assert!(!os.is_windows8_point1_or_higher());
    }

    #[test]
    fn fields_are_not_range_limited() {
        // a minor or service pack number past 10 bits must not spill into the next field
        let os = OsVersion::known(SystemVersion::new(6, 1024, 0));
        assert!(!os.is_at_least_system_version(7, 0, 0));
        assert!(os.is_at_least_system_version(6, 1023, 4096));
    }

    #[test]
    fn failed_query_is_unknown() {
        assert!(OsVersion::from_query(Err(Error::Unsupported)).is_unknown());
        assert_eq!(
            OsVersion::from_query(Ok(WIN7_SP1)).detected(),
            Some(WIN7_SP1)
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn query_fails_off_windows() {
        assert_eq!(OsVersion::query(), OsVersion::unknown());
    }

    #[test]
    fn display() {
        assert_eq!(SystemVersion::WINDOWS_8_1.to_string(), "6.3.0");
        assert_eq!(SystemVersion::from((6, 1, 1)), WIN7_SP1);
    }
}
