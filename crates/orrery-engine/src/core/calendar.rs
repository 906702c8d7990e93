use std::fmt;

/// Julian date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;
/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

const SECONDS_PER_DAY: f64 = 86_400.0;
/// First Julian day number of the Gregorian calendar (1582-10-15).
const GREGORIAN_START_JDN: i64 = 2_299_161;

/// Convert a Gregorian UTC date and time to a Julian date (Meeus, ch. 7).
pub fn julian_date(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> f64 {
    let (mut y, mut m) = (year as i64, month as i64);
    if m <= 2 {
        y -= 1;
        m += 12;
    }
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    let day_fraction = (hour as f64 + minute as f64 / 60.0 + second as f64 / 3600.0) / 24.0;

    (365.25 * (y + 4716) as f64).floor()
        + (30.6001 * (m + 1) as f64).floor()
        + day as f64
        + b as f64
        - 1524.5
        + day_fraction
}

/// A calendar date and time of day, UTC, to the nearest second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CalendarDate {
    /// Inverse of [`julian_date`]. Rounds to the nearest second first, so
    /// times that went through floating point come back on the same minute.
    pub fn from_julian(jd: f64) -> Self {
        let total_seconds = ((jd + 0.5) * SECONDS_PER_DAY).round() as i64;
        let z = total_seconds.div_euclid(SECONDS_PER_DAY as i64);
        let seconds_of_day = total_seconds.rem_euclid(SECONDS_PER_DAY as i64);

        let a = if z < GREGORIAN_START_JDN {
            z
        } else {
            let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
            z + 1 + alpha - alpha.div_euclid(4)
        };
        let b = a + 1524;
        let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
        let d = (365.25 * c as f64).floor() as i64;
        let e = ((b - d) as f64 / 30.6001).floor() as i64;

        let day = b - d - (30.6001 * e as f64).floor() as i64;
        let month = if e < 14 { e - 1 } else { e - 13 };
        let year = if month > 2 { c - 4716 } else { c - 4715 };

        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
            hour: (seconds_of_day / 3600) as u32,
            minute: (seconds_of_day % 3600 / 60) as u32,
            second: (seconds_of_day % 60) as u32,
        }
    }

    pub fn to_julian(&self) -> f64 {
        julian_date(self.year, self.month, self.day, self.hour, self.minute, self.second)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
