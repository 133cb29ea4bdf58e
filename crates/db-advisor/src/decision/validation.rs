use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{
    AppType, Criterion, CriterionOption, DataStructure, Requirements, Scalability,
    SchemaFlexibility, Transactions,
};

/// Raw requirement payload as supplied by a caller; every field may be missing or invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementsInput {
    #[serde(default, deserialize_with = "any_scalar_as_raw")]
    pub app_type: Option<String>,
    #[serde(default, deserialize_with = "any_scalar_as_raw")]
    pub data_structure: Option<String>,
    #[serde(default, deserialize_with = "any_scalar_as_raw")]
    pub scalability: Option<String>,
    #[serde(default, deserialize_with = "any_scalar_as_raw")]
    pub transactions: Option<String>,
    #[serde(default, deserialize_with = "any_scalar_as_raw")]
    pub schema_flexibility: Option<String>,
}

impl RequirementsInput {
    pub fn new(
        app_type: impl Into<String>,
        data_structure: impl Into<String>,
        scalability: impl Into<String>,
        transactions: impl Into<String>,
        schema_flexibility: impl Into<String>,
    ) -> Self {
        Self {
            app_type: Some(app_type.into()),
            data_structure: Some(data_structure.into()),
            scalability: Some(scalability.into()),
            transactions: Some(transactions.into()),
            schema_flexibility: Some(schema_flexibility.into()),
        }
    }

    pub fn raw(&self, criterion: Criterion) -> Option<&str> {
        let value = match criterion {
            Criterion::AppType => &self.app_type,
            Criterion::DataStructure => &self.data_structure,
            Criterion::Scalability => &self.scalability,
            Criterion::Transactions => &self.transactions,
            Criterion::SchemaFlexibility => &self.schema_flexibility,
        };
        value.as_deref()
    }

    /// Checks every field, reporting all missing or unknown values at once.
    pub fn validate(&self) -> Result<Requirements, AnalysisError> {
        let mut invalid = Vec::new();

        let app_type = self.field::<AppType>(&mut invalid);
        let data_structure = self.field::<DataStructure>(&mut invalid);
        let scalability = self.field::<Scalability>(&mut invalid);
        let transactions = self.field::<Transactions>(&mut invalid);
        let schema_flexibility = self.field::<SchemaFlexibility>(&mut invalid);

        match (
            app_type,
            data_structure,
            scalability,
            transactions,
            schema_flexibility,
        ) {
            (
                Some(app_type),
                Some(data_structure),
                Some(scalability),
                Some(transactions),
                Some(schema_flexibility),
            ) if invalid.is_empty() => Ok(Requirements {
                app_type,
                data_structure,
                scalability,
                transactions,
                schema_flexibility,
            }),
            _ => Err(AnalysisError::InvalidInput(invalid)),
        }
    }

    fn field<T: CriterionOption>(&self, invalid: &mut Vec<InvalidField>) -> Option<T> {
        let raw = self.raw(T::CRITERION);
        let parsed = raw.and_then(T::parse);
        if parsed.is_none() {
            invalid.push(InvalidField::new(T::CRITERION, raw));
        }
        parsed
    }
}

/// Keeps non-string JSON values as raw text so validation can report them alongside
/// every other bad field.
fn any_scalar_as_raw<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(raw)) => Some(raw),
        Some(other) => Some(other.to_string()),
    })
}

impl From<Requirements> for RequirementsInput {
    fn from(requirements: Requirements) -> Self {
        Self::new(
            requirements.app_type.label(),
            requirements.data_structure.label(),
            requirements.scalability.label(),
            requirements.transactions.label(),
            requirements.schema_flexibility.label(),
        )
    }
}

/// One rejected field, with the values that would have been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidField {
    pub criterion: Criterion,
    pub field: &'static str,
    pub value: Option<String>,
    pub allowed: Vec<&'static str>,
}

impl InvalidField {
    pub fn new(criterion: Criterion, value: Option<&str>) -> Self {
        Self {
            criterion,
            field: criterion.field(),
            value: value.map(str::to_string),
            allowed: criterion.allowed_values(),
        }
    }

    pub fn describe(&self) -> String {
        let allowed = self.allowed.join(", ");
        match &self.value {
            Some(value) => format!(
                "{} '{}' is not one of [{}]",
                self.criterion.label(),
                value,
                allowed
            ),
            None => format!(
                "{} is missing (expected one of [{}])",
                self.criterion.label(),
                allowed
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Caller supplied missing or unknown values; recoverable by re-prompting.
    #[error("invalid input: {}", describe_all(.0))]
    InvalidInput(Vec<InvalidField>),
    /// The static knowledge tables are inconsistent; never recoverable.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

impl AnalysisError {
    pub fn invalid_fields(&self) -> &[InvalidField] {
        match self {
            AnalysisError::InvalidInput(fields) => fields,
            AnalysisError::InternalInvariantViolation(_) => &[],
        }
    }
}

fn describe_all(fields: &[InvalidField]) -> String {
    fields
        .iter()
        .map(InvalidField::describe)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_canonical_and_loose_labels() {
        let input = RequirementsInput::new("real-time", "unstructured", "HIGH", "low", "Yes");

        let requirements = input.validate().expect("valid input");

        assert_eq!(requirements.app_type, AppType::RealTime);
        assert_eq!(requirements.data_structure, DataStructure::Unstructured);
        assert_eq!(requirements.scalability, Scalability::High);
        assert_eq!(requirements.transactions, Transactions::Low);
        assert_eq!(requirements.schema_flexibility, SchemaFlexibility::Yes);
    }

    #[test]
    fn validate_reports_every_bad_field_in_criterion_order() {
        let input = RequirementsInput {
            app_type: Some("Mobile".to_string()),
            data_structure: Some("Structured".to_string()),
            scalability: None,
            transactions: Some("Medium".to_string()),
            schema_flexibility: Some("No".to_string()),
        };

        let err = input.validate().expect_err("invalid input rejected");
        let fields: Vec<_> = err
            .invalid_fields()
            .iter()
            .map(|field| (field.field, field.value.clone()))
            .collect();

        assert_eq!(
            fields,
            vec![
                ("app_type", Some("Mobile".to_string())),
                ("scalability", None),
                ("transactions", Some("Medium".to_string())),
            ]
        );
        assert_eq!(err.invalid_fields()[2].allowed, vec!["Low", "High"]);
    }

    #[test]
    fn error_message_names_field_and_allowed_values() {
        let err = RequirementsInput::new("Mobile", "Structured", "Low", "Low", "No")
            .validate()
            .expect_err("mobile is not an app type");

        assert_eq!(
            err.to_string(),
            "invalid input: AppType 'Mobile' is not one of [Web, Analytics, RealTime]"
        );
    }

    #[test]
    fn requirements_round_trip_through_input() {
        let requirements = RequirementsInput::new("Web", "Structured", "Medium", "High", "No")
            .validate()
            .expect("valid");
        let input = RequirementsInput::from(requirements);

        assert_eq!(input.app_type.as_deref(), Some("Web"));
        assert_eq!(input.validate().expect("still valid"), requirements);
    }

    #[test]
    fn non_string_json_values_become_invalid_raw_values() {
        let input: RequirementsInput = serde_json::from_value(serde_json::json!({
            "app_type": 5,
            "data_structure": "Structured",
            "scalability": true,
            "transactions": null,
            "schema_flexibility": ["No"],
        }))
        .expect("payload deserializes");

        assert_eq!(input.app_type.as_deref(), Some("5"));
        assert_eq!(input.scalability.as_deref(), Some("true"));
        assert!(input.transactions.is_none());

        let err = input.validate().expect_err("four fields are unusable");
        let fields: Vec<_> = err.invalid_fields().iter().map(|field| field.field).collect();
        assert_eq!(
            fields,
            vec!["app_type", "scalability", "transactions", "schema_flexibility"]
        );
    }
}
