//! Partial update values
//!
//! JSON bodies of update requests distinguish between a key that is absent (leave the field
//! alone) and a key that is explicitly `null` (clear the field). `Option` can not express that
//! difference, [`Patch`] can.

use serde::Deserialize;
use serde::Deserializer;

/// A single field of a partial update
///
/// Use on a struct with `#[serde(default)]`, absent keys will then stay [`Patch::Missing`]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Patch<T> {
    /// Key was not part of the request
    #[default]
    Missing,

    /// Key was explicitly set to `null`
    Null,

    /// Key was set to a value
    Value(T),
}

impl<T> Patch<T> {
    /// Was the key explicitly set to `null`?
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The new value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Missing | Self::Null => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Null, Self::Value))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Form {
        name: Patch<String>,
        cost: Patch<f64>,
    }

    #[test]
    fn test_deserialize_tri_state() {
        let form: Form = serde_json::from_str(r#"{"name": "Kyoto"}"#).unwrap();
        assert_eq!(Patch::Value("Kyoto".to_string()), form.name);
        assert_eq!(Patch::Missing, form.cost);

        let form: Form = serde_json::from_str(r#"{"name": null, "cost": 12.5}"#).unwrap();
        assert!(form.name.is_null());
        assert_eq!(Some(&12.5), form.cost.value());

        let form: Form = serde_json::from_str("{}").unwrap();
        assert_eq!(Patch::Missing, form.name);
        assert_eq!(Patch::Missing, form.cost);
    }
}
