// Currency/number formatting shared between the engine (range labels) and
// the GUI (headline estimate).

pub mod currency {
    /// Round to two decimals, half away from zero. Display bounds are
    /// reproducible across platforms with this mode; it matches how the
    /// model's point estimate is presented.
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    /// Format with thousands separators and exactly two decimals,
    /// e.g. `18232.1` -> `"18,232.10"`, `-3900.0` -> `"-3,900.00"`.
    pub fn format_amount(value: f64) -> String {
        let fixed = format!("{:.2}", value.abs());
        let (int_part, frac_part) = fixed
            .split_once('.')
            .unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}{}.{}", sign, grouped, frac_part)
    }

    /// Parse a string produced by [`format_amount`] back into an f64.
    /// Used when a formatted label has to be compared against raw bounds.
    pub fn parse_amount(s: &str) -> Option<f64> {
        s.trim().replace(',', "").parse::<f64>().ok()
    }

}
