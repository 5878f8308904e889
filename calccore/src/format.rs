//! Display formatting for calculator values

/// Format a value for the display surfaces.
///
/// Integral values keep a trailing `.0` (`"3.0"`), everything else uses the
/// shortest round-trip form. IEEE-754 specials are spelled out and shown
/// like any other value.
pub fn format_value(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // {:?} on f64 is shortest round-trip and keeps the ".0" on integral values
    format!("{n:?}")
}

#[cfg(test)]
mod tests {
    use super::format_value;

    #[test]
    fn integral_values_keep_point_zero() {
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(3.0), "3.0");
        assert_eq!(format_value(-42.0), "-42.0");
    }

    #[test]
    fn fractions_use_shortest_round_trip() {
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(0.1), "0.1");
        assert_eq!(format_value(-0.125), "-0.125");
    }

    #[test]
    fn specials_are_spelled_out() {
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn formatted_values_reparse() {
        // The input buffer may hold formatted output (after √ or MR), so
        // everything emitted here must parse back as f64.
        for v in [0.0, 3.0, 2.5, 1e21, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(format_value(v).parse::<f64>().unwrap(), v);
        }
        assert!(format_value(f64::NAN).parse::<f64>().unwrap().is_nan());
    }
}
