//! Serde adapter for decimal fields.
//!
//! The backend renders fixed-point columns (`hours_spent`, `target_hours`)
//! as JSON strings such as `"12.50"`, but accepts plain numbers on write.

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use std::fmt;

/// Serialize as a plain JSON number.
pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(*value)
}

/// Accept either a number or a numeric string.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    struct DecimalVisitor;

    impl<'de> Visitor<'de> for DecimalVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a decimal number or numeric string")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            let v = v.trim();
            if v.is_empty() {
                return Ok(0.0);
            }
            v.parse::<f64>()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }

        fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }
    }

    deserializer.deserialize_any(DecimalVisitor)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Row {
        #[serde(with = "super")]
        hours: f64,
    }

    #[test]
    fn test_accepts_string_and_number() {
        let a: Row = serde_json::from_str(r#"{"hours":"12.50"}"#).unwrap();
        let b: Row = serde_json::from_str(r#"{"hours":3}"#).unwrap();
        let c: Row = serde_json::from_str(r#"{"hours":null}"#).unwrap();
        assert_eq!(a.hours, 12.5);
        assert_eq!(b.hours, 3.0);
        assert_eq!(c.hours, 0.0);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Row>(r#"{"hours":"lots"}"#).is_err());
    }

    #[test]
    fn test_writes_number() {
        let json = serde_json::to_string(&Row { hours: 1.5 }).unwrap();
        assert_eq!(json, r#"{"hours":1.5}"#);
    }
}
