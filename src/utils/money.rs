//! Currency formatting for tables and summaries

/// Format a dollar amount with thousands separators and two decimals,
/// e.g. `-1234.5` -> `-$1,234.50`.
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let rem = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, rem)
}

/// Format a 0-100 percentage with two decimals, e.g. `31.25%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_grouping() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(5.0), "$5.00");
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn test_format_money_rounds_cents() {
        assert_eq!(format_money(12.345), "$12.35");
        assert_eq!(format_money(12.344), "$12.34");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(-1234.5), "-$1,234.50");
        // Rounds to zero: no negative sign on a zero amount
        assert_eq!(format_money(-0.001), "$0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(31.25), "31.25%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
