use serde::Serialize;

use super::domain::{
    AppType, CriterionValue, DataStructure, Requirements, Scalability, SchemaFlexibility,
    Transactions,
};

/// One side of a tension described by a trade-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeoffSide {
    pub favors: &'static str,
    pub narrative: &'static str,
}

/// Narrative fired when every value in `when` is present in the requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeoffRule {
    pub id: &'static str,
    pub title: &'static str,
    pub when: &'static [CriterionValue],
    pub description: &'static str,
    pub sides: [TradeoffSide; 2],
}

impl TradeoffRule {
    pub fn applies_to(&self, requirements: &Requirements) -> bool {
        all_present(self.when, requirements)
    }
}

/// Suggestion outside the three scored candidates for specialised combinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternativeRule {
    pub id: &'static str,
    pub when: &'static [CriterionValue],
    pub database: &'static str,
    pub reason: &'static str,
}

impl AlternativeRule {
    pub fn applies_to(&self, requirements: &Requirements) -> bool {
        all_present(self.when, requirements)
    }
}

fn all_present(conditions: &[CriterionValue], requirements: &Requirements) -> bool {
    conditions
        .iter()
        .all(|condition| requirements.matches(*condition))
}

/// Every matching trade-off, in declaration order.
pub fn detect_tradeoffs(
    rules: &'static [TradeoffRule],
    requirements: &Requirements,
) -> Vec<&'static TradeoffRule> {
    rules
        .iter()
        .filter(|rule| rule.applies_to(requirements))
        .collect()
}

/// Every matching alternative, in declaration order.
pub fn detect_alternatives(
    rules: &'static [AlternativeRule],
    requirements: &Requirements,
) -> Vec<&'static AlternativeRule> {
    rules
        .iter()
        .filter(|rule| rule.applies_to(requirements))
        .collect()
}

pub static STANDARD_TRADEOFFS: [TradeoffRule; 5] = [
    TradeoffRule {
        id: "schema-rigidity",
        title: "Schema Rigidity vs Flexibility",
        when: &[
            CriterionValue::DataStructure(DataStructure::Structured),
            CriterionValue::SchemaFlexibility(SchemaFlexibility::Yes),
        ],
        description: "You want structured data but also schema flexibility. SQL databases \
            enforce schemas strongly, while MongoDB offers flexibility but sacrifices relational \
            integrity.",
        sides: [
            TradeoffSide {
                favors: "Relational integrity",
                narrative: "MySQL and PostgreSQL enforce the schema on every write, which keeps \
                    structured data consistent but makes each model change a migration.",
            },
            TradeoffSide {
                favors: "Schema flexibility",
                narrative: "MongoDB accepts evolving document shapes without migrations, at the \
                    cost of constraints and joins the database would otherwise guarantee.",
            },
        ],
    },
    TradeoffRule {
        id: "consistency-vs-scalability",
        title: "Consistency vs Scalability (CAP Theorem)",
        when: &[
            CriterionValue::Scalability(Scalability::High),
            CriterionValue::Transactions(Transactions::High),
        ],
        description: "High scalability often requires eventual consistency (MongoDB), but high \
            transaction requirements need strong ACID guarantees (PostgreSQL/MySQL). This is a \
            fundamental distributed systems trade-off.",
        sides: [
            TradeoffSide {
                favors: "Strong consistency",
                narrative: "PostgreSQL and MySQL give multi-row ACID transactions but scale \
                    writes mostly vertically or through manual sharding.",
            },
            TradeoffSide {
                favors: "Horizontal scale",
                narrative: "MongoDB shards writes across nodes out of the box but relaxes \
                    consistency and makes multi-document transactions more expensive.",
            },
        ],
    },
    TradeoffRule {
        id: "sql-vs-nosql-analytics",
        title: "SQL vs NoSQL for Analytics",
        when: &[
            CriterionValue::AppType(AppType::Analytics),
            CriterionValue::Scalability(Scalability::High),
        ],
        description: "SQL databases excel at complex queries and joins, but NoSQL scales better \
            horizontally. Consider PostgreSQL with read replicas or specialized analytics \
            databases like ClickHouse.",
        sides: [
            TradeoffSide {
                favors: "Query expressiveness",
                narrative: "SQL engines offer joins, window functions and a mature optimizer \
                    for ad-hoc analytical questions.",
            },
            TradeoffSide {
                favors: "Scale-out storage",
                narrative: "Document stores spread large data volumes across nodes more easily \
                    but push complex aggregation into pipelines or application code.",
            },
        ],
    },
    TradeoffRule {
        id: "document-vs-transactions",
        title: "Document Flexibility vs Transaction Integrity",
        when: &[
            CriterionValue::DataStructure(DataStructure::Unstructured),
            CriterionValue::Transactions(Transactions::High),
        ],
        description: "MongoDB handles unstructured data well but has limited multi-document \
            transaction support. PostgreSQL JSONB offers a middle ground with strong \
            transactions and flexible document storage.",
        sides: [
            TradeoffSide {
                favors: "Document model",
                narrative: "MongoDB stores unstructured and nested data naturally, but \
                    transactions spanning documents are slower and opt-in.",
            },
            TradeoffSide {
                favors: "Transactional integrity",
                narrative: "PostgreSQL keeps full ACID semantics and can hold documents in \
                    JSONB columns, with less freedom than a native document store.",
            },
        ],
    },
    TradeoffRule {
        id: "read-vs-write",
        title: "Read Optimization vs Write Optimization",
        when: &[CriterionValue::AppType(AppType::Web)],
        description: "MySQL excels at read-heavy workloads, MongoDB at write-heavy ones. \
            PostgreSQL balances both. Consider your read/write ratio.",
        sides: [
            TradeoffSide {
                favors: "Read-heavy traffic",
                narrative: "MySQL with read replicas serves page views and lookups cheaply.",
            },
            TradeoffSide {
                favors: "Write-heavy traffic",
                narrative: "MongoDB absorbs high write rates from sessions, events and user \
                    generated content with less contention.",
            },
        ],
    },
];

pub static STANDARD_ALTERNATIVES: [AlternativeRule; 5] = [
    AlternativeRule {
        id: "columnar-analytics",
        when: &[
            CriterionValue::AppType(AppType::Analytics),
            CriterionValue::Scalability(Scalability::High),
        ],
        database: "ClickHouse or Apache Druid",
        reason: "Columnar databases optimized for massive-scale analytics and OLAP queries with \
            superior compression and query performance.",
    },
    AlternativeRule {
        id: "streaming",
        when: &[
            CriterionValue::AppType(AppType::RealTime),
            CriterionValue::DataStructure(DataStructure::Unstructured),
        ],
        database: "Redis or Apache Kafka",
        reason: "In-memory data stores and streaming platforms optimized for real-time data \
            processing and sub-millisecond latency.",
    },
    AlternativeRule {
        id: "distributed-sql",
        when: &[
            CriterionValue::Scalability(Scalability::High),
            CriterionValue::Transactions(Transactions::High),
        ],
        database: "CockroachDB or Google Spanner",
        reason: "Distributed SQL databases offering both horizontal scalability and strong \
            consistency (bypassing CAP theorem limitations).",
    },
    AlternativeRule {
        id: "search-analytics",
        when: &[
            CriterionValue::DataStructure(DataStructure::Unstructured),
            CriterionValue::AppType(AppType::Analytics),
        ],
        database: "Elasticsearch",
        reason: "Excellent for full-text search, log analytics, and unstructured data \
            exploration with powerful aggregation capabilities.",
    },
    AlternativeRule {
        id: "time-series",
        when: &[CriterionValue::AppType(AppType::RealTime)],
        database: "TimescaleDB or InfluxDB",
        reason: "Specialized time-series databases for IoT, monitoring, and event-driven \
            applications requiring time-based queries.",
    },
];
