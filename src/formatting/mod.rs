//! Text rendering of tool results.
//!
//! Every tool answers with one Markdown-flavoured text block with Portuguese
//! labels. The renderers are pure functions of the records they are given.

pub mod financial;
pub mod liquidity;

/// `$1,234.50` style amount with `decimals` fraction digits. Negative amounts keep
/// the sign after the dollar sign (`$-1,234.50`).
pub fn usd(value: f64, decimals: usize) -> String {
    format!("${}", group_thousands(&format!("{:.*}", decimals, value)))
}

/// Percentage with an explicit sign, e.g. `+5.20%` or `-0.75%`.
pub fn signed_pct(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// Percentage without a forced sign, e.g. `36.50%`.
pub fn pct(value: f64) -> String {
    format!("{:.2}%", value)
}

/// English three-letter month abbreviation for a 1-based month.
pub fn month_abbrev(month: u32) -> String {
    chrono::NaiveDate::from_ymd_opt(2024, month, 1)
        .map(|date| date.format("%b").to_string())
        .unwrap_or_else(|| month.to_string())
}

/// At most the first `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Insert `,` between groups of three integer digits of a formatted number.
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}{}", sign, grouped, fraction)
}
