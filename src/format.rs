//! Display formatting for money, dates and names.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

const NAME_LIMIT: usize = 25;

/// Rounds to cents, half away from zero.
pub fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Two-decimal rendering without currency symbol, e.g. `-12.50`.
pub fn fixed2(amount: Decimal) -> String {
    format!("{:.2}", to_cents(amount))
}

/// `$1,234.56`; zero and missing amounts render as an empty string.
pub fn currency(amount: Option<Decimal>) -> String {
    match amount {
        Some(value) if !value.is_zero() => money(value),
        _ => String::new(),
    }
}

/// `$1,234.56`, always rendered (zero included). Negatives read `-$12.50`.
pub fn money(amount: Decimal) -> String {
    let rounded = to_cents(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}", sign, group_thousands(&fixed2(rounded.abs())))
}

/// Profit rendering: `+$50.00` or `-$12.50`.
pub fn signed_money(amount: Decimal) -> String {
    let rounded = to_cents(amount);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        money(amount)
    } else {
        format!("+{}", money(amount))
    }
}

fn group_thousands(plain: &str) -> String {
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain, ""));
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(plain.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Accepts RFC 3339 timestamps, naive timestamps and bare dates.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `Dec 13`
pub fn short_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|date| date.format("%b %-d").to_string())
        .unwrap_or_default()
}

/// `12/13/2024`
pub fn full_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|date| date.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}

/// Whole days between the order date and `today`; unknown dates count as 0.
pub fn days_since(raw: Option<&str>, today: NaiveDate) -> i64 {
    raw.and_then(parse_date)
        .map(|date| (today - date).num_days().abs())
        .unwrap_or(0)
}

pub fn days_open_label(days: i64) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "1 Day".to_string(),
        n => format!("{} Days", n),
    }
}

/// Cuts long customer names for card headers.
pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_LIMIT {
        let head: String = name.chars().take(NAME_LIMIT).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(Some(dec!(1234.5)), "$1,234.50")]
    #[case(Some(dec!(1234567.891)), "$1,234,567.89")]
    #[case(Some(dec!(179.38)), "$179.38")]
    #[case(Some(dec!(0)), "")]
    #[case(None, "")]
    fn currency_rendering(#[case] amount: Option<Decimal>, #[case] expected: &str) {
        assert_eq!(currency(amount), expected);
    }

    #[rstest]
    #[case(dec!(50), "+$50.00")]
    #[case(dec!(0), "+$0.00")]
    #[case(dec!(-12.5), "-$12.50")]
    fn signed_money_rendering(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(signed_money(amount), expected);
    }

    #[test]
    fn dates_render_in_both_styles() {
        assert_eq!(short_date(Some("2024-12-13T15:04:05Z")), "Dec 13");
        assert_eq!(full_date(Some("2024-12-13")), "12/13/2024");
        assert_eq!(short_date(Some("yesterday")), "");
        assert_eq!(full_date(None), "");
    }

    #[test]
    fn days_open_labels() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        assert_eq!(days_since(Some("2024-12-13T09:00:00"), today), 7);
        assert_eq!(days_since(None, today), 0);
        assert_eq!(days_open_label(0), "Today");
        assert_eq!(days_open_label(1), "1 Day");
        assert_eq!(days_open_label(7), "7 Days");
    }

    #[test]
    fn long_names_are_truncated() {
        assert_eq!(truncate_name("Rivera Builders"), "Rivera Builders");
        assert_eq!(
            truncate_name("Southeastern Kitchen & Bath Remodeling"),
            "Southeastern Kitchen & Ba..."
        );
    }
}
