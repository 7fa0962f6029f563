#[cfg(test)]
mod tests;

/// Nicely format an amount with two decimal places and commas
pub fn format_amount(number: f64) -> String {
    let rounded = (number * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let s = format!("{:.2}", rounded.abs());
    let (integer, fractional) = s.split_once('.').unwrap_or((&s, "00"));

    let mut formatted = String::new();

    // Insert commas every three digits
    let mut count = 0;
    for c in integer.chars().rev() {
        if count == 3 {
            formatted.insert(0, ',');
            count = 0;
        }
        formatted.insert(0, c);
        count += 1;
    }

    // Insert sign
    if negative {
        formatted.insert(0, '-');
    }

    // Insert decimal point and fractional part
    formatted.push('.');
    formatted.push_str(fractional);

    formatted
}
