// Display helpers for prices

/// Round to whole units and group thousands with commas: 1234567.8 -> "1,234,568"
pub fn with_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    // "-0" after rounding a tiny negative
    if grouped == "0" {
        return grouped;
    }
    format!("{}{}", sign, grouped)
}

/// "$1,234"
pub fn usd(value: f64) -> String {
    format!("${}", with_thousands(value))
}
