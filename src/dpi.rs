use std::fmt::{self, Display, Formatter};

/// Logical pixels per inch at 100% scaling.
pub const BASE_DPI: u32 = 96;

/// A horizontal and vertical dots-per-inch pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dpi {
    /// Horizontal DPI
    pub x: u32,
    /// Vertical DPI
    pub y: u32,
}

impl Dpi {
    /// Construct a DPI pair
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Whether a horizontal DPI was actually reported
    pub const fn is_known(&self) -> bool {
        self.x != 0
    }

    /// The scale factor relative to `baseline` DPI
    pub fn scale_factor(&self, baseline: u32) -> ScaleFactor {
        ScaleFactor::from_dpi(*self, baseline)
    }
}

impl Display for Dpi {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

/// A UI scale factor, such as `1.5` for 144 DPI.
///
/// Displays with at most six significant digits and no trailing zeros,
/// which is the form Qt parses out of `QT_SCALE_FACTOR`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    const SIGNIFICANT_DIGITS: i32 = 6;

    /// `dpi.x / baseline`
    pub fn from_dpi(dpi: Dpi, baseline: u32) -> Self {
        Self(dpi.x as f64 / baseline as f64)
    }

    /// Wrap a raw factor
    pub const fn new(factor: f64) -> Self {
        Self(factor)
    }

    /// The raw factor
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for ScaleFactor {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let value = self.0;
        if !value.is_finite() || value == 0.0 {
            return write!(f, "{value}")
        }

        // round to the significant digits first so the exponent reflects any carry
        let precision = (Self::SIGNIFICANT_DIGITS - 1) as usize;
        let scientific = format!("{value:.precision$e}");
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
            None => (&scientific[..], 0),
        };

        if exponent < -4 || exponent >= Self::SIGNIFICANT_DIGITS {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
        } else {
            let decimals = (Self::SIGNIFICANT_DIGITS - 1 - exponent) as usize;
            f.write_str(trim_fraction(&format!("{value:.decimals$}")))
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    match s.contains('.') {
        true => s.trim_end_matches('0').trim_end_matches('.'),
        false => s,
    }
}

impl From<ScaleFactor> for f64 {
    fn from(factor: ScaleFactor) -> Self {
        factor.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(dpi: u32) -> String {
        Dpi::new(dpi, dpi).scale_factor(BASE_DPI).to_string()
    }

    #[test]
    fn common_scaling_levels() {
        assert_eq!(scale(96), "1");
        assert_eq!(scale(120), "1.25");
        assert_eq!(scale(144), "1.5");
        assert_eq!(scale(168), "1.75");
        assert_eq!(scale(192), "2");
        assert_eq!(scale(288), "3");
    }

    #[test]
    fn uneven_dpi_is_rounded_to_six_digits() {
        assert_eq!(scale(100), "1.04167");
        assert_eq!(scale(97), "1.01042");
        assert_eq!(scale(1000), "10.4167");
    }

    #[test]
    fn small_factors() {
        assert_eq!(ScaleFactor::new(0.5).to_string(), "0.5");
        assert_eq!(ScaleFactor::new(0.125).to_string(), "0.125");
        assert_eq!(ScaleFactor::new(0.0).to_string(), "0");
    }

    #[test]
    fn large_and_tiny_factors_use_exponents() {
        assert_eq!(ScaleFactor::new(1e6).to_string(), "1e+06");
        assert_eq!(ScaleFactor::new(1234567.0).to_string(), "1.23457e+06");
        assert_eq!(ScaleFactor::new(999999.0).to_string(), "999999");
        assert_eq!(ScaleFactor::new(9999996.0).to_string(), "1e+07");
        assert_eq!(ScaleFactor::new(0.0001).to_string(), "0.0001");
        assert_eq!(ScaleFactor::new(0.00001).to_string(), "1e-05");
    }

    #[test]
    fn unknown_dpi() {
        assert!(!Dpi::default().is_known());
        assert!(Dpi::new(144, 0).is_known());
        assert_eq!(Dpi::new(144, 120).to_string(), "144x120");
    }
}
