//! Форматирование чисел и дат для таблиц консоли

use chrono::{NaiveDate, NaiveDateTime};

/// Округление до двух знаков (как `toFixed(2)` с последующим разбором)
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Разбор числа из поля ввода; пустое или нечисловое значение даёт 0
pub fn parse_amount(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Доля в процентах с двумя знаками: 0.8 -> "80.00%"
pub fn format_percent(ratio: f64) -> String {
    let ratio = if ratio.is_finite() { ratio } else { 0.0 };
    format!("{:.2}%", ratio * 100.0)
}

/// Число с разделителем тысяч (запятая) и заданным количеством знаков
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежная сумма: 2 знака и разделитель тысяч
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Целое с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// "2025-01-20 10:00:00"
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// "2025-01-20 10:00"
pub fn format_datetime_short(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// "2025-01-20"
pub fn format_date(value: &NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Разбор даты из `<input type="date">`
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Момент времени для тестовых данных; неверная дата даёт эпоху
pub(crate) fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .unwrap_or_default()
}

/// Дата для тестовых данных; неверная дата даёт эпоху
pub(crate) fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.5), "-1,234.50");
        assert_eq!(format_money(999.0), "999.00");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1437.0), "1,437");
        assert_eq!(format_number_int(-100000.0), "-100,000");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.8), "80.00%");
        assert_eq!(format_percent(0.013657), "1.37%");
        assert_eq!(format_percent(f64::NAN), "0.00%");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.345 "), 12.345);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(7780.0 / 7.78), 1000.0);
        assert_eq!(round2(10.556), 10.56);
        assert_eq!(round2(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_dates() {
        let t = at(2025, 1, 20, 10, 0, 0);
        assert_eq!(format_datetime(&t), "2025-01-20 10:00:00");
        assert_eq!(format_datetime_short(&t), "2025-01-20 10:00");
        assert_eq!(parse_date("2025-01-20"), Some(day(2025, 1, 20)));
        assert_eq!(parse_date("20.01.2025"), None);
    }
}
