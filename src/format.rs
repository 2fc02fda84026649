//! Display formatting in Brazilian Portuguese conventions: `.` groups
//! thousands, `,` separates decimals, dates are day first.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `1234.5` → `R$ 1.234,50` (non-breaking space after the symbol).
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}R$\u{a0}{},{:02}",
        sign,
        group_thousands(&(cents / 100).to_string()),
        cents % 100
    )
}

/// Up to three decimal places, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let fixed = fixed.trim_end_matches('0').trim_end_matches('.');
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed, ""));

    let sign = if value < 0.0 && fixed != "0" { "-" } else { "" };
    let mut formatted = format!("{}{}", sign, group_thousands(integer));
    if !fraction.is_empty() {
        formatted.push(',');
        formatted.push_str(fraction);
    }
    formatted
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value).replace('.', ",")
}

/// Wall-clock date and time as written in the string; offsets are not
/// converted.
fn parse_date_time(date_str: &str) -> Option<NaiveDateTime> {
    let trimmed = date_str.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(date_time.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Some(date_time);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// `2026-03-15` → `15/03/2026`. Unparseable input is returned as is.
pub fn format_date(date_str: &str) -> String {
    match parse_date_time(date_str) {
        Some(date_time) => date_time.format("%d/%m/%Y").to_string(),
        None => date_str.to_string(),
    }
}

/// `2026-03-15T14:30:00` → `15/03/2026, 14:30`.
pub fn format_date_time(date_str: &str) -> String {
    match parse_date_time(date_str) {
        Some(date_time) => date_time.format("%d/%m/%Y, %H:%M").to_string(),
        None => date_str.to_string(),
    }
}

/// Mobile (11 digits) and landline (10 digits) numbers with area code.
pub fn format_phone(phone: &str) -> String {
    let digits = digits_only(phone);
    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => phone.to_string(),
    }
}

pub fn format_cnpj(cnpj: &str) -> String {
    let digits = digits_only(cnpj);
    if digits.len() != 14 {
        return cnpj.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &digits[..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..]
    )
}

/// `2026-03` → `Mar/2026`, as used on monthly chart axes.
pub fn format_month_year(month_str: &str) -> String {
    let Some((year, month)) = month_str.trim().split_once('-') else {
        return month_str.to_string();
    };
    match month.parse::<usize>() {
        Ok(month) if (1..=12).contains(&month) => {
            format!("{}/{}", MONTH_ABBREVIATIONS[month - 1], year)
        }
        _ => month_str.to_string(),
    }
}

/// `1500` → `1,5K`, `2300000` → `2,3M`.
pub fn abbreviate_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        return format!("{:.1}M", value / 1_000_000.0).replace('.', ",");
    }
    if value >= 1_000.0 {
        return format!("{:.1}K", value / 1_000.0).replace('.', ",");
    }
    format_number(value)
}
