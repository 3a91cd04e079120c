/// Meters in one nautical mile.
pub const METERS_PER_NM: f64 = 1852.0;

/// Meters in one shackle of anchor chain (15 fathoms).
pub const METERS_PER_SHACKLE: f64 = 27.432;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub fn m_to_nm(m: f64) -> f64 {
    m / METERS_PER_NM
}

pub fn nm_to_m(nm: f64) -> f64 {
    nm * METERS_PER_NM
}

pub fn mps_to_kn(mps: f64) -> f64 {
    mps * SECONDS_PER_HOUR / METERS_PER_NM
}

pub fn kn_to_mps(kn: f64) -> f64 {
    nm_to_m(kn) / SECONDS_PER_HOUR
}

/// Reject results that are not finite, which only happens for a zero divisor or an overflow.
pub(crate) fn finite(value: f64, reason: &'static str) -> Result<f64, crate::Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(crate::Error::DomainError(reason))
    }
}
