//! Compound growth rate computation.

use crate::error::{CoreError, CoreResult};

/// Compound annual growth rate implied by two prices, in percent.
///
/// `((end / start) ^ (1 / periods) - 1) * 100`
///
/// # Errors
///
/// Returns an error if `start_price` is not strictly positive or if
/// `periods` is not strictly positive; the ratio and the root are
/// undefined in those cases.
pub fn cagr(start_price: f64, end_price: f64, periods: f64) -> CoreResult<f64> {
    if !start_price.is_finite() || start_price <= 0.0 {
        return Err(CoreError::invalid_price(
            start_price,
            "start price must be positive",
        ));
    }
    if !periods.is_finite() || periods <= 0.0 {
        return Err(CoreError::InvalidPeriod { periods });
    }

    Ok(((end_price / start_price).powf(1.0 / periods) - 1.0) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_doubling_over_one_period() {
        assert_relative_eq!(cagr(100.0, 200.0, 1.0).unwrap(), 100.0);
    }

    #[test]
    fn test_flat_price_is_zero_growth() {
        assert_relative_eq!(cagr(150.0, 150.0, 20.0).unwrap(), 0.0);
    }

    #[test]
    fn test_twenty_year_compounding() {
        // 100 -> 800 over 20 years: 2^(3/20) - 1 = ~10.96% per year
        let rate = cagr(100.0, 800.0, 20.0).unwrap();
        assert_relative_eq!(rate, (8.0f64.powf(0.05) - 1.0) * 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_decline_is_negative() {
        assert!(cagr(200.0, 100.0, 5.0).unwrap() < 0.0);
    }

    #[test]
    fn test_rejects_non_positive_start() {
        assert!(cagr(0.0, 100.0, 20.0).is_err());
        assert!(cagr(-5.0, 100.0, 20.0).is_err());
    }

    #[test]
    fn test_rejects_non_positive_periods() {
        assert!(cagr(100.0, 200.0, 0.0).is_err());
        assert!(cagr(100.0, 200.0, -1.0).is_err());
    }
}
