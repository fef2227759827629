/// Fare for a trip: rate multiplied by distance, rounded to the nearest
/// whole currency unit. Ties round away from zero.
///
/// A zero distance prices to zero; the rate is trusted from the catalog
/// and not validated here.
pub fn total_price(rate_per_km: f64, distance_km: f64) -> i64 {
    (rate_per_km * distance_km).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_unit_product() {
        assert_eq!(total_price(2.5, 10.0), 25);
    }

    #[test]
    fn fractional_product_rounds_to_nearest() {
        // 1.33 * 7.0 = 9.31
        assert_eq!(total_price(1.33, 7.0), 9);
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(total_price(0.5, 1.0), 1);
        assert_eq!(total_price(1.5, 1.0), 2);
    }

    #[test]
    fn zero_distance_prices_to_zero() {
        assert_eq!(total_price(2.5, 0.0), 0);
        assert_eq!(total_price(0.0, 12.3), 0);
    }

    #[test]
    fn non_negative_and_monotonic() {
        let rates = [0.0, 0.8, 1.33, 2.5, 4.0];
        let distances = [0.0, 0.4, 1.0, 7.0, 10.0, 42.5];

        for window in rates.windows(2) {
            for &distance in &distances {
                let lo = total_price(window[0], distance);
                let hi = total_price(window[1], distance);
                assert!(lo >= 0);
                assert!(hi >= lo);
            }
        }

        for &rate in &rates {
            for window in distances.windows(2) {
                assert!(total_price(rate, window[1]) >= total_price(rate, window[0]));
            }
        }
    }
}
