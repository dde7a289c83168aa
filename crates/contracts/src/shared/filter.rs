use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel the production-type selector uses for "no filter".
pub const ALL_PRODUCTION_TYPES: &str = "all";

/// A request filter that is either unset or carries a value.
///
/// The backend expects unset filters as an explicit JSON `null`, so `Unset`
/// is serialized as `null` and never skipped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterValue<T> {
    Unset,
    Value(T),
}

impl<T> Default for FilterValue<T> {
    fn default() -> Self {
        FilterValue::Unset
    }
}

impl<T> FilterValue<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, FilterValue::Value(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            FilterValue::Unset => None,
            FilterValue::Value(v) => Some(v),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            FilterValue::Unset => None,
            FilterValue::Value(v) => Some(v),
        }
    }
}

impl<T> From<Option<T>> for FilterValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => FilterValue::Value(v),
            None => FilterValue::Unset,
        }
    }
}

impl FilterValue<String> {
    /// Text input: blank means unset.
    pub fn from_text(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            FilterValue::Unset
        } else {
            FilterValue::Value(trimmed.to_string())
        }
    }

    /// Production-type selector: blank or `"all"` means unset.
    pub fn production_type(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case(ALL_PRODUCTION_TYPES) {
            FilterValue::Unset
        } else {
            Self::from_text(input)
        }
    }
}

impl FilterValue<i64> {
    /// Numeric input: blank, non-numeric and non-positive ids mean unset.
    pub fn from_id_text(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(id) if id > 0 => FilterValue::Value(id),
            _ => FilterValue::Unset,
        }
    }
}

impl<T: Serialize> Serialize for FilterValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FilterValue::Unset => serializer.serialize_none(),
            FilterValue::Value(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FilterValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(FilterValue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_serializes_as_null() {
        let unset: FilterValue<i64> = FilterValue::Unset;
        assert_eq!(serde_json::to_string(&unset).unwrap(), "null");
        assert_eq!(serde_json::to_string(&FilterValue::Value(5i64)).unwrap(), "5");
    }

    #[test]
    fn test_production_type_normalization() {
        assert_eq!(FilterValue::production_type("all"), FilterValue::Unset);
        assert_eq!(FilterValue::production_type("ALL"), FilterValue::Unset);
        assert_eq!(FilterValue::production_type("  "), FilterValue::Unset);
        assert_eq!(
            FilterValue::production_type("Lazer"),
            FilterValue::Value("Lazer".to_string())
        );
    }

    #[test]
    fn test_id_text_normalization() {
        assert_eq!(FilterValue::from_id_text(""), FilterValue::Unset);
        assert_eq!(FilterValue::from_id_text("abc"), FilterValue::Unset);
        assert_eq!(FilterValue::from_id_text("0"), FilterValue::Unset);
        assert_eq!(FilterValue::from_id_text(" 42 "), FilterValue::Value(42));
    }

    #[test]
    fn test_null_deserializes_as_unset() {
        let v: FilterValue<String> = serde_json::from_str("null").unwrap();
        assert_eq!(v, FilterValue::Unset);
        let v: FilterValue<String> = serde_json::from_str("\"Kaynak\"").unwrap();
        assert_eq!(v.as_option().map(String::as_str), Some("Kaynak"));
    }
}
