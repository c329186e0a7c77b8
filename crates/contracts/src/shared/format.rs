//! Форматирование чисел для UI и разбор ввода из форм
//!
//! Все функции тотальные: NaN, бесконечности и мусор во вводе дают ноль.

/// Убрать отрицательный ноль (`-0.0` печатается как "-0")
fn normalize(value: f64) -> f64 {
    value + 0.0
}

/// Округлить до `1 / scale`
///
/// Если масштабирование переполняет f64, значение и так целое и возвращается как есть.
fn round_to(value: f64, scale: f64) -> f64 {
    let scaled = value * scale;
    if !scaled.is_finite() {
        return normalize(value);
    }
    normalize(scaled.round() / scale)
}

/// Удалить хвостовые нули дробной части: "12.50" -> "12.5", "15.00" -> "15"
fn trim_fraction(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Процент с одним знаком, без хвостового ".0"
///
/// # Примеры
/// ```
/// use contracts::shared::format::format_percent;
/// assert_eq!(format_percent(20.0), "20");
/// assert_eq!(format_percent(12.46), "12.5");
/// assert_eq!(format_percent(f64::NAN), "0");
/// ```
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "0".into();
    }
    trim_fraction(format!("{:.1}", round_to(value, 10.0)))
}

/// Процент всегда с одним знаком после запятой ("20.0")
pub fn format_percent_fixed(value: f64) -> String {
    if !value.is_finite() {
        return "0.0".into();
    }
    format!("{:.1}", round_to(value, 10.0))
}

/// Число до двух знаков без хвостовых нулей и без разделителей ("1250.5")
///
/// Используется для строковых полей удалённого API.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0".into();
    }
    trim_fraction(format!("{:.2}", round_to(value, 100.0)))
}

/// Целое число с разделителем тысяч (запятая)
///
/// # Примеры
/// ```
/// use contracts::shared::format::format_thousands;
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// assert_eq!(format_thousands(42), "42");
/// ```
pub fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Денежная сумма в долларах: "$1,250", "$1,250.50", "-$5"
///
/// Центы выводятся только если они не нулевые.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$0".into();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = format_thousands(cents / 100);
    let fraction = cents % 100;
    let sign = if value < 0.0 && cents != 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{}${}", sign, whole)
    } else {
        format!("{}${}.{:02}", sign, whole, fraction)
    }
}

/// Разобрать число из поля формы или строки API
///
/// Пробелы, `$`, `%` и `,` игнорируются. Всё, что не разбирается, даёт 0.
pub fn parse_number(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, ' ' | '$' | '%' | ',' | '\t'))
        .collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(20.0), "20");
        assert_eq!(format_percent(12.5), "12.5");
        assert_eq!(format_percent(0.0), "0");
        assert_eq!(format_percent(-0.1), "-0.1");
        assert_eq!(format_percent(-0.04), "0");
        assert_eq!(format_percent(100.0), "100");
        assert_eq!(format_percent(f64::INFINITY), "0");
    }

    #[test]
    fn test_format_percent_fixed() {
        assert_eq!(format_percent_fixed(20.0), "20.0");
        assert_eq!(format_percent_fixed(70.04), "70.0");
        assert_eq!(format_percent_fixed(f64::NAN), "0.0");
        assert_eq!(format_percent_fixed(-0.0), "0.0");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(15.0), "15");
        assert_eq!(format_amount(1250.5), "1250.5");
        assert_eq!(format_amount(99.999), "100");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(f64::NAN), "0");
    }

    #[test]
    fn test_huge_values_print_digits() {
        let digits = format!("{:.0}", f64::MAX);
        assert_eq!(format_percent(f64::MAX), digits);
        assert_eq!(format_percent(-f64::MAX), format!("-{}", digits));
        assert_eq!(format_percent_fixed(f64::MAX), format!("{}.0", digits));
        assert_eq!(format_amount(f64::MAX), digits);
        assert_eq!(format_amount(1e307), format!("{:.0}", 1e307));
        assert!(!format_percent(f64::MAX).contains("inf"));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1250.0), "$1,250");
        assert_eq!(format_currency(1250.5), "$1,250.50");
        assert_eq!(format_currency(2_500_000.0), "$2,500,000");
        assert_eq!(format_currency(-5.0), "-$5");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-0.001), "$0");
        assert_eq!(format_currency(f64::NAN), "$0");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567890), "1,234,567,890");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("20"), 20.0);
        assert_eq!(parse_number(" 12.5% "), 12.5);
        assert_eq!(parse_number("$1,250.50"), 1250.5);
        assert_eq!(parse_number("-5"), -5.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
    }
}
