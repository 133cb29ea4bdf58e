use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::decision::RequirementsInput;

/// One CSV row, still unvalidated.
#[derive(Debug)]
pub(crate) struct ScenarioRecord {
    pub(crate) label: Option<String>,
    pub(crate) input: RequirementsInput,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ScenarioRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<ScenarioRow>() {
        let row = record?;
        records.push(row.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ScenarioRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    label: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    app_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    data_structure: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    scalability: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    transactions: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    schema_flexibility: Option<String>,
}

impl ScenarioRow {
    fn into_record(self) -> ScenarioRecord {
        ScenarioRecord {
            label: self.label,
            input: RequirementsInput {
                app_type: self.app_type,
                data_structure: self.data_structure,
                scalability: self.scalability,
                transactions: self.transactions,
                schema_flexibility: self.schema_flexibility,
            },
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
