use std::fmt;

use serde::{Deserialize, Serialize};

/// Database technologies the engine scores and ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Candidate {
    #[serde(rename = "MySQL")]
    MySql,
    #[serde(rename = "PostgreSQL")]
    PostgreSql,
    #[serde(rename = "MongoDB")]
    MongoDb,
}

impl Candidate {
    /// Declaration order, used for tables and score cards.
    pub const ALL: [Candidate; 3] = [Candidate::MySql, Candidate::PostgreSql, Candidate::MongoDb];

    /// Fixed order used to break equal totals; earlier wins.
    pub const TIE_BREAK_PRIORITY: [Candidate; 3] =
        [Candidate::PostgreSql, Candidate::MySql, Candidate::MongoDb];

    pub const fn label(self) -> &'static str {
        match self {
            Candidate::MySql => "MySQL",
            Candidate::PostgreSql => "PostgreSQL",
            Candidate::MongoDb => "MongoDB",
        }
    }

    pub(crate) fn tie_break_rank(self) -> usize {
        match self {
            Candidate::PostgreSql => 0,
            Candidate::MySql => 1,
            Candidate::MongoDb => 2,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five independent requirement axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Criterion {
    AppType,
    DataStructure,
    Scalability,
    Transactions,
    SchemaFlexibility,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::AppType,
        Criterion::DataStructure,
        Criterion::Scalability,
        Criterion::Transactions,
        Criterion::SchemaFlexibility,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Criterion::AppType => "AppType",
            Criterion::DataStructure => "DataStructure",
            Criterion::Scalability => "Scalability",
            Criterion::Transactions => "Transactions",
            Criterion::SchemaFlexibility => "SchemaFlexibility",
        }
    }

    /// Field name used by request payloads and CSV headers.
    pub const fn field(self) -> &'static str {
        match self {
            Criterion::AppType => "app_type",
            Criterion::DataStructure => "data_structure",
            Criterion::Scalability => "scalability",
            Criterion::Transactions => "transactions",
            Criterion::SchemaFlexibility => "schema_flexibility",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Criterion::AppType => "Application Type",
            Criterion::DataStructure => "Data Structure",
            Criterion::Scalability => "Scalability",
            Criterion::Transactions => "Transactions",
            Criterion::SchemaFlexibility => "Schema Flexibility",
        }
    }

    /// Canonical labels accepted for this criterion, in declaration order.
    pub fn allowed_values(self) -> Vec<&'static str> {
        match self {
            Criterion::AppType => labels_of(AppType::ALL),
            Criterion::DataStructure => labels_of(DataStructure::ALL),
            Criterion::Scalability => labels_of(Scalability::ALL),
            Criterion::Transactions => labels_of(Transactions::ALL),
            Criterion::SchemaFlexibility => labels_of(SchemaFlexibility::ALL),
        }
    }

    /// Parses a raw value for this criterion, ignoring case and punctuation.
    pub fn parse_value(self, raw: &str) -> Option<CriterionValue> {
        match self {
            Criterion::AppType => AppType::parse(raw).map(CriterionValue::AppType),
            Criterion::DataStructure => DataStructure::parse(raw).map(CriterionValue::DataStructure),
            Criterion::Scalability => Scalability::parse(raw).map(CriterionValue::Scalability),
            Criterion::Transactions => Transactions::parse(raw).map(CriterionValue::Transactions),
            Criterion::SchemaFlexibility => {
                SchemaFlexibility::parse(raw).map(CriterionValue::SchemaFlexibility)
            }
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shared behavior of the closed per-criterion enumerations.
pub trait CriterionOption: Copy + PartialEq + Sized + 'static {
    const CRITERION: Criterion;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    /// Matches `raw` against the canonical labels, so `real-time`, `Real Time` and
    /// `RealTime` are the same value.
    fn parse(raw: &str) -> Option<Self> {
        let wanted = normalize(raw);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|option| normalize(option.label()) == wanted)
    }
}

fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn labels_of<T: CriterionOption>(options: &[T]) -> Vec<&'static str> {
    options.iter().map(|option| option.label()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AppType {
    Web,
    Analytics,
    RealTime,
}

impl CriterionOption for AppType {
    const CRITERION: Criterion = Criterion::AppType;
    const ALL: &'static [Self] = &[AppType::Web, AppType::Analytics, AppType::RealTime];

    fn label(self) -> &'static str {
        match self {
            AppType::Web => "Web",
            AppType::Analytics => "Analytics",
            AppType::RealTime => "RealTime",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DataStructure {
    Structured,
    SemiStructured,
    Unstructured,
}

impl CriterionOption for DataStructure {
    const CRITERION: Criterion = Criterion::DataStructure;
    const ALL: &'static [Self] = &[
        DataStructure::Structured,
        DataStructure::SemiStructured,
        DataStructure::Unstructured,
    ];

    fn label(self) -> &'static str {
        match self {
            DataStructure::Structured => "Structured",
            DataStructure::SemiStructured => "SemiStructured",
            DataStructure::Unstructured => "Unstructured",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scalability {
    Low,
    Medium,
    High,
}

impl CriterionOption for Scalability {
    const CRITERION: Criterion = Criterion::Scalability;
    const ALL: &'static [Self] = &[Scalability::Low, Scalability::Medium, Scalability::High];

    fn label(self) -> &'static str {
        match self {
            Scalability::Low => "Low",
            Scalability::Medium => "Medium",
            Scalability::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transactions {
    Low,
    High,
}

impl CriterionOption for Transactions {
    const CRITERION: Criterion = Criterion::Transactions;
    const ALL: &'static [Self] = &[Transactions::Low, Transactions::High];

    fn label(self) -> &'static str {
        match self {
            Transactions::Low => "Low",
            Transactions::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SchemaFlexibility {
    Yes,
    No,
}

impl CriterionOption for SchemaFlexibility {
    const CRITERION: Criterion = Criterion::SchemaFlexibility;
    const ALL: &'static [Self] = &[SchemaFlexibility::Yes, SchemaFlexibility::No];

    fn label(self) -> &'static str {
        match self {
            SchemaFlexibility::Yes => "Yes",
            SchemaFlexibility::No => "No",
        }
    }
}

/// A criterion paired with one of its values; the key of every knowledge table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CriterionValue {
    AppType(AppType),
    DataStructure(DataStructure),
    Scalability(Scalability),
    Transactions(Transactions),
    SchemaFlexibility(SchemaFlexibility),
}

impl CriterionValue {
    pub fn criterion(self) -> Criterion {
        match self {
            CriterionValue::AppType(_) => Criterion::AppType,
            CriterionValue::DataStructure(_) => Criterion::DataStructure,
            CriterionValue::Scalability(_) => Criterion::Scalability,
            CriterionValue::Transactions(_) => Criterion::Transactions,
            CriterionValue::SchemaFlexibility(_) => Criterion::SchemaFlexibility,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CriterionValue::AppType(value) => value.label(),
            CriterionValue::DataStructure(value) => value.label(),
            CriterionValue::Scalability(value) => value.label(),
            CriterionValue::Transactions(value) => value.label(),
            CriterionValue::SchemaFlexibility(value) => value.label(),
        }
    }

    /// Every value of every criterion, criterion-major.
    pub fn all() -> Vec<CriterionValue> {
        let mut values = Vec::new();
        values.extend(AppType::ALL.iter().copied().map(CriterionValue::AppType));
        values.extend(DataStructure::ALL.iter().copied().map(CriterionValue::DataStructure));
        values.extend(Scalability::ALL.iter().copied().map(CriterionValue::Scalability));
        values.extend(Transactions::ALL.iter().copied().map(CriterionValue::Transactions));
        values.extend(
            SchemaFlexibility::ALL
                .iter()
                .copied()
                .map(CriterionValue::SchemaFlexibility),
        );
        values
    }
}

impl fmt::Display for CriterionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.criterion().label(), self.label())
    }
}

/// Validated requirement combination; every field is a member of its enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requirements {
    pub app_type: AppType,
    pub data_structure: DataStructure,
    pub scalability: Scalability,
    pub transactions: Transactions,
    pub schema_flexibility: SchemaFlexibility,
}

impl Requirements {
    pub fn value(&self, criterion: Criterion) -> CriterionValue {
        match criterion {
            Criterion::AppType => CriterionValue::AppType(self.app_type),
            Criterion::DataStructure => CriterionValue::DataStructure(self.data_structure),
            Criterion::Scalability => CriterionValue::Scalability(self.scalability),
            Criterion::Transactions => CriterionValue::Transactions(self.transactions),
            Criterion::SchemaFlexibility => {
                CriterionValue::SchemaFlexibility(self.schema_flexibility)
            }
        }
    }

    pub fn matches(&self, expected: CriterionValue) -> bool {
        self.value(expected.criterion()) == expected
    }

    /// Every valid combination (3 x 3 x 3 x 2 x 2), in criterion declaration order.
    pub fn all_combinations() -> Vec<Requirements> {
        let mut combinations = Vec::new();
        for &app_type in AppType::ALL {
            for &data_structure in DataStructure::ALL {
                for &scalability in Scalability::ALL {
                    for &transactions in Transactions::ALL {
                        for &schema_flexibility in SchemaFlexibility::ALL {
                            combinations.push(Requirements {
                                app_type,
                                data_structure,
                                scalability,
                                transactions,
                                schema_flexibility,
                            });
                        }
                    }
                }
            }
        }
        combinations
    }
}
