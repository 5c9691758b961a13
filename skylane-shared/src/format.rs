use chrono::{NaiveDate, NaiveDateTime};

/// Maps an ISO 4217 code to its display symbol. Codes without a known symbol
/// fall back to the raw code followed by a space ("XOF 120.00").
fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency {
        "USD" => Some("$"),
        "EUR" => Some("\u{20ac}"),
        "GBP" => Some("\u{a3}"),
        "NGN" => Some("\u{20a6}"),
        _ => None,
    }
}

/// Formats a currency amount with symbol, thousands grouping and two decimal
/// places, e.g. `format_currency(1234.5, "USD")` -> `"$1,234.50"`.
pub fn format_currency(amount: f64, currency: &str) -> String {
    match currency_symbol(currency) {
        Some(symbol) => format!("{}{}", symbol, group_thousands(amount)),
        None => format!("{} {}", currency, group_thousands(amount)),
    }
}

/// Compact currency for chart axes and labels: `$1.2M`, `$25K`, `$900`.
pub fn format_compact_currency(value: f64, currency: &str) -> String {
    let symbol = currency_symbol(currency)
        .map(str::to_string)
        .unwrap_or_else(|| currency.to_string());

    if value >= 1_000_000.0 {
        format!("{}{:.1}M", symbol, value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{}{:.0}K", symbol, value / 1_000.0)
    } else {
        format!("{}{:.0}", symbol, value)
    }
}

/// Formats total minutes as a human-readable duration, e.g. `"5h 30m"`.
pub fn format_duration_from_minutes(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    format!("{}h {}m", hours, minutes)
}

/// Formats a timestamp as a readable time, e.g. `"3:45 PM"`.
pub fn format_time(at: &NaiveDateTime) -> String {
    at.format("%-I:%M %p").to_string()
}

/// Formats a date for display, e.g. `"Oct 15, 2023"`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn group_thousands(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let formatted = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_currency_known_symbols() {
        assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
        assert_eq!(format_currency(99.0, "EUR"), "\u{20ac}99.00");
        assert_eq!(format_currency(1_000_000.0, "NGN"), "\u{20a6}1,000,000.00");
    }

    #[test]
    fn test_format_currency_unknown_code_falls_back() {
        assert_eq!(format_currency(120.0, "XOF"), "XOF 120.00");
    }

    #[test]
    fn test_format_compact_currency() {
        assert_eq!(format_compact_currency(1_200_000.0, "USD"), "$1.2M");
        assert_eq!(format_compact_currency(25_000.0, "USD"), "$25K");
        assert_eq!(format_compact_currency(900.0, "GBP"), "\u{a3}900");
        assert_eq!(format_compact_currency(900.0, "XOF"), "XOF900");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_from_minutes(330), "5h 30m");
        assert_eq!(format_duration_from_minutes(45), "0h 45m");
        assert_eq!(format_duration_from_minutes(0), "0h 0m");
    }

    #[test]
    fn test_format_time_and_date() {
        let at = NaiveDate::from_ymd_opt(2023, 10, 15)
            .unwrap()
            .and_hms_opt(15, 45, 0)
            .unwrap();
        assert_eq!(format_time(&at), "3:45 PM");
        assert_eq!(format_date(&at.date()), "Oct 15, 2023");
    }
}
