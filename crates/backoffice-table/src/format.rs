//! pt-BR value formatting

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// BRL currency in pt-BR style: `R$ 1.234,56`, `-R$ 0,50`
#[must_use]
pub fn currency_brl(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (value.abs() * 100.0).round() as u64;
    format!("{sign}R$ {},{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// pt-BR short date (`dd/mm/yyyy`) from an RFC 3339 timestamp or ISO date
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn date_pt_br(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}

/// "Sim" / "Não"
#[inline]
#[must_use]
pub fn boolean_pt_br(value: bool) -> &'static str {
    if value {
        "Sim"
    } else {
        "Não"
    }
}

/// Plain text of a JSON value: strings unquoted, null empty
#[must_use]
pub fn plain(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => boolean_pt_br(*b).to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn currency() {
        assert_eq!(currency_brl(1234.56), "R$ 1.234,56");
        assert_eq!(currency_brl(0.5), "R$ 0,50");
        assert_eq!(currency_brl(-0.5), "-R$ 0,50");
        assert_eq!(currency_brl(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(currency_brl(19.999), "R$ 20,00");
    }

    #[test]
    fn dates() {
        assert_eq!(date_pt_br("2024-03-05T12:00:00Z"), "05/03/2024");
        assert_eq!(date_pt_br("2024-11-20"), "20/11/2024");
        assert_eq!(date_pt_br("yesterday"), "yesterday");
    }

    #[test]
    fn plain_values() {
        assert_eq!(plain(&json!("Snacks")), "Snacks");
        assert_eq!(plain(&json!(null)), "");
        assert_eq!(plain(&json!(7)), "7");
        assert_eq!(plain(&json!(true)), "Sim");
    }
}
