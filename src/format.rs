/// Rounds to a whole number and inserts `,` thousands separators.
pub fn format_human_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let digits = format!("{:.0}", n.abs().round());
    let mut ret = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n.round() < 0.0 {
        ret.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            ret.push(',');
        }
        ret.push(c);
    }
    ret
}

pub fn times_label(n: f64) -> &'static str {
    if n == 1.0 { "time" } else { "times" }
}
