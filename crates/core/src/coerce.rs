//! Lenient numeric coercion for loosely-typed backend records.
//!
//! Product and order records come from a schemaless store and from HTML forms,
//! so numeric fields may arrive as JSON numbers, numeric strings, `null`, or
//! garbage. Reports must always render, so every such value degrades to a
//! number instead of failing deserialization:
//!
//! - integers use "parse the leading integer" rules (`"12abc"` → 12, `5.9` → 5)
//! - decimals use "parse the leading decimal" rules (`"12.5kg"` → 12.5)
//! - anything without a numeric prefix becomes 0
//!
//! The `serde` helpers are meant for `#[serde(default, deserialize_with = ...)]`.

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserializer;

/// Parse the leading integer of `s`, ignoring leading whitespace.
///
/// Returns `None` when no digit follows the optional sign.
pub fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in rest.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Parse the leading decimal number of `s`, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with an optional fractional part, and an
/// optional exponent. Returns `None` when there is no numeric prefix or the
/// result is not finite.
pub fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'-' | b'+') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce a float to an integer the way the leading-integer rule would
/// read its decimal rendering (truncation toward zero).
fn truncate(v: f64) -> Option<i64> {
    if v.is_finite() {
        Some(v.trunc() as i64)
    } else {
        None
    }
}

/// A loosely-typed numeric value, before coercion.
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
    Nothing,
}

impl Loose {
    fn to_int(&self) -> Option<i64> {
        match self {
            Loose::Int(v) => Some(*v),
            Loose::Float(v) => truncate(*v),
            Loose::Text(s) => leading_int(s),
            Loose::Nothing => None,
        }
    }

    fn to_float(&self) -> Option<f64> {
        match self {
            Loose::Int(v) => Some(*v as f64),
            Loose::Float(v) => Some(*v).filter(|v| v.is_finite()),
            Loose::Text(s) => leading_float(s),
            Loose::Nothing => None,
        }
    }
}

struct LooseVisitor;

impl<'de> Visitor<'de> for LooseVisitor {
    type Value = Loose;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a number, a numeric string, or null")
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(Loose::Nothing)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Loose::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Loose::Int(i64::try_from(v).unwrap_or(i64::MAX)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Loose::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Loose::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Loose::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Loose::Nothing)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Loose::Nothing)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(LooseVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Loose::Nothing)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Loose::Nothing)
    }
}

fn loose<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Loose, D::Error> {
    deserializer.deserialize_any(LooseVisitor)
}

/// Deserialize an integer field; unparseable values become 0.
pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(loose(deserializer)?.to_int().unwrap_or(0))
}

/// Deserialize a decimal field; unparseable values become 0.
pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(loose(deserializer)?.to_float().unwrap_or(0.0))
}

/// Deserialize an optional integer field; unparseable values become `None`.
pub fn opt_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(loose(deserializer)?.to_int())
}

/// Deserialize a text field; numbers are rendered, anything else becomes empty.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match loose(deserializer)? {
        Loose::Text(s) => s,
        Loose::Int(v) => v.to_string(),
        Loose::Float(v) => v.to_string(),
        Loose::Nothing => String::new(),
    })
}

/// Deserialize an optional string field; anything that is not a string
/// becomes `None`.
pub fn opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match loose(deserializer)? {
        Loose::Text(s) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "int")]
        stock: i64,
        #[serde(default, deserialize_with = "float")]
        price: f64,
        #[serde(default, deserialize_with = "opt_int")]
        min_level: Option<i64>,
    }

    fn parse(json: &str) -> Record {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn leading_int_reads_numeric_prefix() {
        assert_eq!(leading_int("12abc"), Some(12));
        assert_eq!(leading_int("  -7 units"), Some(-7));
        assert_eq!(leading_int("+3"), Some(3));
        assert_eq!(leading_int("4.9"), Some(4));
        assert_eq!(leading_int("abc"), None);
        assert_eq!(leading_int(""), None);
        assert_eq!(leading_int("-"), None);
    }

    #[test]
    fn leading_float_reads_numeric_prefix() {
        assert_eq!(leading_float("12.5kg"), Some(12.5));
        assert_eq!(leading_float("3.5e1x"), Some(35.0));
        assert_eq!(leading_float("2e"), Some(2.0));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("7."), Some(7.0));
        assert_eq!(leading_float(" -0.25"), Some(-0.25));
        assert_eq!(leading_float("."), None);
        assert_eq!(leading_float("x1"), None);
    }

    #[test]
    fn numbers_and_strings_coerce() {
        let r = parse(r#"{"stock": "12abc", "price": "9.99", "min_level": 5}"#);
        assert_eq!(r.stock, 12);
        assert_eq!(r.price, 9.99);
        assert_eq!(r.min_level, Some(5));

        let r = parse(r#"{"stock": 5.9, "price": 20, "min_level": "8"}"#);
        assert_eq!(r.stock, 5);
        assert_eq!(r.price, 20.0);
        assert_eq!(r.min_level, Some(8));
    }

    #[test]
    fn text_accepts_numbers_and_null() {
        #[derive(Deserialize)]
        struct Named {
            #[serde(default, deserialize_with = "text")]
            name: String,
        }

        let n: Named = serde_json::from_str(r#"{"name": "Laptop Pro"}"#).unwrap();
        assert_eq!(n.name, "Laptop Pro");
        let n: Named = serde_json::from_str(r#"{"name": 42}"#).unwrap();
        assert_eq!(n.name, "42");
        let n: Named = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(n.name, "");
    }

    #[test]
    fn opt_text_drops_non_strings() {
        #[derive(Deserialize)]
        struct Dated {
            #[serde(default, deserialize_with = "opt_text")]
            date: Option<String>,
        }

        let d: Dated = serde_json::from_str(r#"{"date": "2024-06-01"}"#).unwrap();
        assert_eq!(d.date.as_deref(), Some("2024-06-01"));
        for json in [r#"{"date": 1718000000000}"#, r#"{"date": false}"#, r#"{"date": null}"#, r#"{"date": {}}"#, "{}"] {
            let d: Dated = serde_json::from_str(json).unwrap();
            assert_eq!(d.date, None, "{json}");
        }
    }

    #[test]
    fn garbage_and_missing_become_zero() {
        let r = parse(r#"{"stock": "lots", "price": null, "min_level": "n/a"}"#);
        assert_eq!(r.stock, 0);
        assert_eq!(r.price, 0.0);
        assert_eq!(r.min_level, None);

        let r = parse(r#"{}"#);
        assert_eq!(r.stock, 0);
        assert_eq!(r.price, 0.0);
        assert_eq!(r.min_level, None);

        let r = parse(r#"{"stock": [1, 2], "price": {"amount": 3}, "min_level": true}"#);
        assert_eq!(r.stock, 0);
        assert_eq!(r.price, 0.0);
        assert_eq!(r.min_level, None);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: an integer rendered as text reads back unchanged.
            #[test]
            fn rendered_integers_round_trip(n in -1_000_000_000i64..1_000_000_000i64, suffix in "[a-z ]{0,5}") {
                let text = format!("{n}{suffix}");
                prop_assert_eq!(leading_int(&text), Some(n));
            }

            /// Property: coercion never panics on arbitrary text.
            #[test]
            fn arbitrary_text_never_panics(s in ".{0,40}") {
                let _ = leading_int(&s);
                let _ = leading_float(&s);
            }
        }
    }
}
