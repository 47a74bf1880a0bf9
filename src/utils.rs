// Formatting helpers for the text renderer.

/// Formats a monetary value with thousands separators and two decimals,
/// e.g. `1234567.5` becomes `"1,234,567.50"`.
pub fn format_thousands(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents_total = (value.abs() * 100.0).round() as u64;
    format!(
        "{}{}.{:02}",
        sign,
        group_digits(cents_total / 100),
        cents_total % 100
    )
}

/// Formats an integer count with thousands separators.
pub fn format_count(value: usize) -> String {
    group_digits(value as u64)
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_thousands(1234567.5), "1,234,567.50");
        assert_eq!(format_thousands(60.0), "60.00");
        assert_eq!(format_thousands(0.0), "0.00");
        assert_eq!(format_thousands(-1200.0), "-1,200.00");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_thousands(9.999), "10.00");
        assert_eq!(format_thousands(0.005), "0.01");
    }

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12000), "12,000");
    }
}
