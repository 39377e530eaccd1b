use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::Rng;
use rust_decimal::Decimal;

use crate::error::DatasetsGenError;
use crate::error::Result;

pub mod activities;
mod batch_builder;
pub mod dictionary;
pub mod orders;
pub mod products;
pub mod report;
pub mod scenario;
pub mod schema;

/// Rounds half to even at `dp` decimal places and pins the scale, so the
/// value always prints with exactly `dp` fractional digits.
pub(crate) fn round_decimal(v: Decimal, dp: u32) -> Decimal {
    let mut v = v.round_dp(dp);
    v.rescale(dp);
    v
}

pub(crate) fn round_float(v: f64, dp: u32) -> Result<Decimal> {
    Ok(round_decimal(Decimal::try_from(v)?, dp))
}

/// Trailing window the event and order dates are drawn from.
#[derive(Debug, Clone, Copy)]
pub struct TimeWindow {
    from: DateTime<Utc>,
    seconds: i64,
}

impl TimeWindow {
    pub fn try_new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self> {
        let seconds = (to - from).num_seconds();
        if seconds <= 0 {
            return Err(DatasetsGenError::General(format!(
                "to date {to} should be after from date {from}"
            )));
        }

        Ok(Self { from, seconds })
    }

    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn to(&self) -> DateTime<Utc> {
        self.from + Duration::seconds(self.seconds)
    }

    /// Uniform second within `[from, to)`.
    pub fn sample(&self, rng: &mut StdRng) -> DateTime<Utc> {
        self.from + Duration::seconds(rng.gen_range(0..self.seconds))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_time_window() {
        let to = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let from = to - Duration::days(365);
        let window = TimeWindow::try_new(from, to).unwrap();
        assert_eq!(window.to(), to);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let ts = window.sample(&mut rng);
            assert!(ts >= from && ts < to);
        }

        assert!(TimeWindow::try_new(to, to).is_err());
        assert!(TimeWindow::try_new(to, from).is_err());
    }

    #[test]
    fn test_round() {
        assert_eq!(round_float(12.345678, 2).unwrap().to_string(), "12.35");
        assert_eq!(round_float(4.96, 1).unwrap().to_string(), "5.0");
        assert_eq!(round_float(0.0, 2).unwrap().to_string(), "0.00");
        assert_eq!(round_float(12.5, 2).unwrap().to_string(), "12.50");
        // half to even
        assert_eq!(round_decimal(Decimal::new(1225, 3), 2).to_string(), "1.22");
        assert_eq!(round_decimal(Decimal::new(1235, 3), 2).to_string(), "1.24");
    }
}
