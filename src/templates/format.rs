// templates/format.rs
use chrono::{DateTime, Utc};

/// `1234.5, "USD"` -> `$1,234.50`; other currencies get their code as a suffix.
pub fn money(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;
    let sign = if negative { "-" } else { "" };

    match currency.to_uppercase().as_str() {
        "USD" | "" => format!("{sign}${whole}.{frac:02}"),
        code => format!("{sign}{whole}.{frac:02} {code}"),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn date(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => "—".to_string(),
    }
}

/// Five-star rating string, clamped to 0..=5.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
