//! Shared formatting utilities for UI components.

/// Format a tick label with smart precision for a given tick step.
pub fn format_tick(val: f64, step: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        return "0".to_string();
    }
    if !(1e-3..1e6).contains(&abs_val) {
        return format!("{:.1e}", val);
    }
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    format!("{:.*}", decimals.min(6), val)
}

/// Format a coordinate for status messages.
pub fn format_value(val: f64) -> String {
    if val.is_nan() {
        "NaN".to_string()
    } else if val.is_infinite() {
        if val.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        }
    } else if val != 0.0 && (val.abs() < 0.001 || val.abs() >= 10000.0) {
        format!("{:.3e}", val)
    } else {
        format!("{:.4}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_precision_follows_step() {
        assert_eq!(format_tick(2.0, 1.0), "2");
        assert_eq!(format_tick(0.2, 0.2), "0.2");
        assert_eq!(format_tick(-0.05, 0.05), "-0.05");
        assert_eq!(format_tick(0.0, 0.5), "0");
        assert_eq!(format_tick(2.5e7, 1e7), "2.5e7");
    }

    #[test]
    fn values_are_readable() {
        assert_eq!(format_value(1.0), "1.0000");
        assert_eq!(format_value(0.0), "0.0000");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_value(12346.0), "1.235e4");
    }
}
