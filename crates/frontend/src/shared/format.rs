//! Display formatting helpers for table cells

/// Format a transaction amount for the table, e.g. `+ $50.00`
///
/// The leading `+ $` prefix is fixed; the value keeps its own sign.
pub fn format_amount(amount: f64) -> String {
    format!("+ ${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50.0), "+ $50.00");
        assert_eq!(format_amount(0.5), "+ $0.50");
        assert_eq!(format_amount(1234.567), "+ $1234.57");
    }

    #[test]
    fn test_format_amount_keeps_sign() {
        assert_eq!(format_amount(-25.0), "+ $-25.00");
        assert_eq!(format_amount(0.0), "+ $0.00");
    }
}
