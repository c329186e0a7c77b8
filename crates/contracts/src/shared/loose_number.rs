//! Нестрогий разбор чисел из JSON форм и удалённого API
//!
//! UI и API присылают числа то строкой, то числом, то `null`.
//! Всё, что не разбирается, превращается в 0.

use super::format::{format_amount, parse_number};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Text(String),
    Number(f64),
    Bool(bool),
    Null(()),
}

/// Поле, хранимое как строка (формат API): числа форматируются без хвостовых нулей
pub fn de_loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LooseNumber::deserialize(deserializer)? {
        LooseNumber::Text(s) => s,
        LooseNumber::Number(n) => format_amount(n),
        LooseNumber::Bool(_) | LooseNumber::Null(()) => String::new(),
    })
}

/// Поле, хранимое как число: строки разбираются через `parse_number`
pub fn de_loose_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LooseNumber::deserialize(deserializer)? {
        LooseNumber::Text(s) => parse_number(&s),
        LooseNumber::Number(n) if n.is_finite() => n,
        LooseNumber::Number(_) | LooseNumber::Bool(_) | LooseNumber::Null(()) => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "de_loose_f64")]
        value: f64,
        #[serde(default, deserialize_with = "de_loose_string")]
        text: String,
    }

    fn form(json: &str) -> Form {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_de_loose_f64() {
        assert_eq!(form(r#"{"value": 12.5}"#).value, 12.5);
        assert_eq!(form(r#"{"value": "20"}"#).value, 20.0);
        assert_eq!(form(r#"{"value": "$1,250"}"#).value, 1250.0);
        assert_eq!(form(r#"{"value": "abc"}"#).value, 0.0);
        assert_eq!(form(r#"{"value": null}"#).value, 0.0);
        assert_eq!(form(r#"{"value": true}"#).value, 0.0);
        assert_eq!(form(r#"{}"#).value, 0.0);
    }

    #[test]
    fn test_de_loose_string() {
        assert_eq!(form(r#"{"text": "7"}"#).text, "7");
        assert_eq!(form(r#"{"text": 7.50}"#).text, "7.5");
        assert_eq!(form(r#"{"text": null}"#).text, "");
    }
}
