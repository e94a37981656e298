// Display formatting shared by the dashboard widgets.

/// `$` prefixed amount with a fixed number of decimals, e.g. `$61234.57`.
pub fn format_usd(value: f64, decimals: usize) -> String {
    if value < 0.0 {
        format!("-${:.decimals$}", value.abs(), decimals = decimals)
    } else {
        format!("${:.decimals$}", value, decimals = decimals)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Signed two-decimal value as shown in the error column.
pub fn format_signed(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(61234.5678, 2), "$61234.57");
        assert_eq!(format_usd(74.12346, 4), "$74.1235");
        assert_eq!(format_usd(-3.5, 2), "-$3.50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(87.0), "87.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(-12.346), "-12.35");
        assert_eq!(format_signed(7.0), "7.00");
    }
}
