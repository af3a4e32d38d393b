//! Load calculator - plate-rounded percentages of a one-rep max

/// Smallest plate increment on the bar (kg per side pair)
pub const PLATE_KG: f64 = 1.25;

/// Round a weight to the nearest plate increment.
///
/// Total over all inputs: zero and negative values round the same way,
/// they just never come up in a real plan.
pub fn round_plate(kg: f64) -> f64 {
    (kg / PLATE_KG).round() * PLATE_KG
}

/// Fraction of a one-rep max, rounded to a loadable weight.
pub fn pct_of_max(one_rm: f64, fraction: f64) -> f64 {
    round_plate(one_rm * fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_plate_multiples() {
        for raw in [0.0, 1.0, 45.1, 67.5, 99.9, 120.0] {
            let rounded = round_plate(raw);
            let units = rounded / PLATE_KG;
            assert!(
                (units - units.round()).abs() < 1e-9,
                "{} rounded to {} which is not a plate multiple",
                raw,
                rounded
            );
        }
    }

    #[test]
    fn test_round_plate_within_half_increment() {
        for raw in [30.1, 44.37, 45.1, 66.9, 108.0] {
            let rounded = round_plate(raw);
            assert!(
                (rounded - raw).abs() <= PLATE_KG / 2.0 + 1e-9,
                "{} -> {} drifted more than half a plate",
                raw,
                rounded
            );
        }
    }

    #[test]
    fn test_round_plate_known_values() {
        assert_eq!(round_plate(45.1), 45.0);
        assert_eq!(round_plate(30.0), 30.0);
        assert_eq!(round_plate(67.5), 67.5);
        assert_eq!(round_plate(34.1), 33.75);
    }

    #[test]
    fn test_round_plate_zero_and_negative() {
        assert_eq!(round_plate(0.0), 0.0);
        assert_eq!(round_plate(-45.1), -45.0);
    }

    #[test]
    fn test_pct_of_max() {
        // worked example: bench 55kg @ 82%
        assert_eq!(pct_of_max(55.0, 0.82), 45.0);
        assert_eq!(pct_of_max(120.0, 0.25), 30.0);
        assert_eq!(pct_of_max(90.0, 0.75), 67.5);
    }

    #[test]
    fn test_pct_of_max_degenerate_fractions() {
        assert_eq!(pct_of_max(100.0, 0.0), 0.0);
        assert_eq!(pct_of_max(100.0, -0.1), -10.0);
    }
}
