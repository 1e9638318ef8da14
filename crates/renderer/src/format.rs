//! Value formatting for axis ticks and tooltips

/// Format a rate metric as a percentage: `0.1234` -> `"12.3%"` at one
/// decimal. Axis ticks use one decimal, tooltips two.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

/// Format a size metric with grouped thousands: `1234567` -> `"1,234,567"`.
/// Fractional values keep up to three decimals, trailing zeros trimmed.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let negative = value < 0.0;
    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let integer = rounded.trunc() as u64;
    let fraction = rounded.fract();

    let digits = integer.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);

    if fraction > 0.0 {
        let frac_str = format!("{fraction:.3}");
        let trimmed = frac_str.trim_start_matches("0.").trim_end_matches('0');
        if !trimmed.is_empty() {
            out.push('.');
            out.push_str(trimmed);
        }
    }
    out
}
