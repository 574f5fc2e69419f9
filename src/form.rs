//! Serde helpers for admin form payloads.
//!
//! The admin form posts numbers either as JSON numbers or as the raw text of
//! an input field, and leaves optional inputs as empty strings. Patch bodies
//! also need to tell an absent key (leave the column alone) from an explicit
//! `null` (clear it); the `nullable_*` helpers return `Some(None)` for the
//! latter and are meant to be paired with `#[serde(default)]`.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, de::Error as _};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    Native(T),
    Text(String),
}

fn coerce<T, E>(value: Loose<T>) -> Result<Option<T>, E>
where
    T: FromStr,
    T::Err: Display,
    E: serde::de::Error,
{
    match value {
        Loose::Native(v) => Ok(Some(v)),
        Loose::Text(raw) => {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(None);
            }
            raw.parse().map(Some).map_err(|e| E::custom(format!("invalid number {raw:?}: {e}")))
        },
    }
}

pub fn number<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    coerce(Loose::<T>::deserialize(d)?)?.ok_or_else(|| D::Error::custom("a number is required"))
}

pub fn optional_number<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<Loose<T>>::deserialize(d)? {
        Some(value) => coerce(value),
        None => Ok(None),
    }
}

pub fn nullable_number<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    optional_number(d).map(Some)
}

/// Trimmed text; blank becomes `None`.
pub fn optional_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Trimmed text for a required column. Blank stays `Some("")` so that
/// validation can reject it instead of skipping the field.
pub fn required_text<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?.map(|s| s.trim().to_string()))
}

pub fn nullable_text<'de, D>(d: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_text(d).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::number")]
        price: f64,
        #[serde(default, deserialize_with = "super::optional_number")]
        servers: Option<i32>,
        #[serde(default, deserialize_with = "super::nullable_number")]
        two_year: Option<Option<f64>>,
        #[serde(default, deserialize_with = "super::nullable_text")]
        logo: Option<Option<String>>,
    }

    fn probe(json: &str) -> Result<Probe, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn accepts_numbers_and_numeric_text() {
        let p = probe(r#"{"price": 12.99, "servers": "6000"}"#).unwrap();
        assert_eq!(p.price, 12.99);
        assert_eq!(p.servers, Some(6000));

        let p = probe(r#"{"price": " 4.5 ", "servers": 10}"#).unwrap();
        assert_eq!(p.price, 4.5);
        assert_eq!(p.servers, Some(10));
    }

    #[test]
    fn blank_text_is_absent() {
        let p = probe(r#"{"price": 1, "servers": ""}"#).unwrap();
        assert_eq!(p.servers, None);
        assert!(probe(r#"{"price": ""}"#).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(probe(r#"{"price": "cheap"}"#).is_err());
        assert!(probe(r#"{"price": 1, "servers": "many"}"#).is_err());
    }

    #[test]
    fn tri_state_patch_fields() {
        let absent = probe(r#"{"price": 1}"#).unwrap();
        assert_eq!(absent.two_year, None);
        assert_eq!(absent.logo, None);

        let cleared = probe(r#"{"price": 1, "two_year": null, "logo": "  "}"#).unwrap();
        assert_eq!(cleared.two_year, Some(None));
        assert_eq!(cleared.logo, Some(None));

        let set = probe(r#"{"price": 1, "two_year": "2.99", "logo": "/nord.svg"}"#).unwrap();
        assert_eq!(set.two_year, Some(Some(2.99)));
        assert_eq!(set.logo, Some(Some("/nord.svg".to_string())));
    }
}
