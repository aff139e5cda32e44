//! Typed metadata values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single metadata value attached to a node
///
/// Serialized untagged, so RON/foreign text holds a bare string or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataProperty {
    /// Text value (labels, tags, asset paths)
    String(String),
    /// Floating point value (sizes, weights, percentages)
    Float(f64),
}

impl MetadataProperty {
    /// Try to get this property as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataProperty::String(s) => Some(s),
            MetadataProperty::Float(_) => None,
        }
    }

    /// Try to get this property as a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            MetadataProperty::Float(f) => Some(*f),
            MetadataProperty::String(_) => None,
        }
    }

    /// Get the type name of this property
    pub fn type_name(&self) -> &'static str {
        match self {
            MetadataProperty::String(_) => "string",
            MetadataProperty::Float(_) => "float",
        }
    }
}

impl fmt::Display for MetadataProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataProperty::String(s) => write!(f, "\"{}\"", s),
            MetadataProperty::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<String> for MetadataProperty {
    fn from(s: String) -> Self {
        MetadataProperty::String(s)
    }
}

impl From<&str> for MetadataProperty {
    fn from(s: &str) -> Self {
        MetadataProperty::String(s.to_string())
    }
}

impl From<f64> for MetadataProperty {
    fn from(f: f64) -> Self {
        MetadataProperty::Float(f)
    }
}

impl From<f32> for MetadataProperty {
    fn from(f: f32) -> Self {
        MetadataProperty::Float(f as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_accessors() {
        let color = MetadataProperty::from("red");
        assert_eq!(color.as_str(), Some("red"));
        assert_eq!(color.as_float(), None);
        assert_eq!(color.type_name(), "string");

        let size = MetadataProperty::from(2.0f64);
        assert_eq!(size.as_float(), Some(2.0));
        assert_eq!(size.as_str(), None);
        assert_eq!(size.type_name(), "float");
    }

    #[test]
    fn test_property_display() {
        assert_eq!(MetadataProperty::from("red").to_string(), "\"red\"");
        assert_eq!(MetadataProperty::from(1.5f64).to_string(), "1.5");
    }

    #[test]
    fn test_property_untagged_ron() {
        let text: MetadataProperty = ron::from_str("\"red\"").unwrap();
        assert_eq!(text, MetadataProperty::String("red".into()));

        let number: MetadataProperty = ron::from_str("2.5").unwrap();
        assert_eq!(number, MetadataProperty::Float(2.5));
    }
}
