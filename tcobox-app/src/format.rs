//! Currency formatting for COP amounts.

/// Whole pesos with thousands separators, e.g. `$230,356,000`.
pub fn money(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let sign = if value < 0.0 && digits != "0" { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&digits))
}

/// Millions with one decimal, e.g. `$230.4 M`.
pub fn millions(value: f64) -> String {
    let text = format!("{:.1}", (value / 1e6).abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "0"));
    let sign = if value < 0.0 && text != "0.0" { "-" } else { "" };
    format!("{}${}.{} M", sign, group_thousands(whole), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
