use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Numeric field the backend may send either as a JSON number or as a
/// string (`"-1.23"`, `"0.4512%"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    /// Numeric value, with a trailing `%` ignored. `None` when the text is not a number.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().trim_end_matches('%').trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }

    pub fn value_or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

impl Default for LooseNumber {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Fundamental ratio that is either a number or not available (`"N/A"`, null, garbage).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MetricValue {
    Value(f64),
    #[default]
    NotAvailable,
}

impl MetricValue {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(value),
            Self::NotAvailable => None,
        }
    }
}

impl<'de> Deserialize<'de> for MetricValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<LooseNumber>::deserialize(deserializer)?;
        Ok(raw
            .and_then(|number| number.value())
            .map_or(Self::NotAvailable, Self::Value))
    }
}

impl Serialize for MetricValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(value) => serializer.serialize_f64(*value),
            Self::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_number_reads_numbers_and_strings() {
        let parsed: Vec<LooseNumber> =
            serde_json::from_str(r#"[1.5, "-2.25", "0.4512%", "n/a"]"#).expect("decodes");
        let values: Vec<Option<f64>> = parsed.iter().map(LooseNumber::value).collect();
        assert_eq!(values, vec![Some(1.5), Some(-2.25), Some(0.4512), None]);
    }

    #[test]
    fn metric_value_maps_placeholders_to_not_available() {
        let parsed: Vec<MetricValue> =
            serde_json::from_str(r#"[6.11, "28.4", "N/A", null]"#).expect("decodes");
        assert_eq!(
            parsed,
            vec![
                MetricValue::Value(6.11),
                MetricValue::Value(28.4),
                MetricValue::NotAvailable,
                MetricValue::NotAvailable,
            ]
        );
    }

    #[test]
    fn metric_value_serializes_placeholder_as_text() {
        let json = serde_json::to_string(&[MetricValue::NotAvailable, MetricValue::Value(1.0)])
            .expect("serializes");
        assert_eq!(json, r#"["N/A",1.0]"#);
    }
}
