// ws-core/src/units.rs

use uom::si::f64::{Pressure as UomPressure, Time as UomTime};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Time = UomTime;

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn days(v: f64) -> Time {
    use uom::si::time::day;
    Time::new::<day>(v)
}

#[inline]
pub fn as_seconds(t: Time) -> f64 {
    use uom::si::time::second;
    t.get::<second>()
}

#[inline]
pub fn as_pascal(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

/// Scale factors between simulator input (SI) and persisted summary units.
///
/// Rates arrive as volume per second and are reported per report time unit;
/// totals are reported as rate-per-report-time-unit times elapsed report
/// time units. Pressures arrive in pascal.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportUnits {
    /// Seconds per report time unit.
    pub time_scale_s: f64,
    /// Pascal per report pressure unit.
    pub pressure_scale_pa: f64,
}

impl ReportUnits {
    /// Days and bar.
    pub fn metric() -> Self {
        Self {
            time_scale_s: as_seconds(days(1.0)),
            pressure_scale_pa: as_pascal(bar(1.0)),
        }
    }

    /// SI volume/s rate to volume per report time unit.
    #[inline]
    pub fn rate(&self, si_rate: f64) -> f64 {
        si_rate * self.time_scale_s
    }

    /// Seconds to report time units.
    #[inline]
    pub fn time(&self, seconds: f64) -> f64 {
        seconds / self.time_scale_s
    }

    /// Pascal to report pressure units.
    #[inline]
    pub fn pressure(&self, pascal: f64) -> f64 {
        pascal / self.pressure_scale_pa
    }
}

impl Default for ReportUnits {
    fn default() -> Self {
        Self::metric()
    }
}

pub mod constants {
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    pub const PASCAL_PER_BAR: f64 = 100_000.0;
}
