/// Display formatting for scores, counts, and proportions.
///
/// All internal values are `f64`/`u64`. Strings are only produced at the
/// display boundary.

/// Format a numeric cell: integers without a decimal point, everything else
/// rounded to two decimals with trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Format a row count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format a proportion in `[0, 1]` as a percentage with one decimal.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_integers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn test_format_number_fractions() {
        assert_eq!(format_number(50.5), "50.5");
        assert_eq!(format_number(66.666_666), "66.67");
        assert_eq!(format_number(0.126), "0.13");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(0.625), "62.5%");
        assert_eq!(format_percent(1.0), "100.0%");
    }
}
