use serde::Serialize;

use super::domain::Candidate;

/// Reference data describing one candidate database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseProfile {
    pub candidate: Candidate,
    pub name: &'static str,
    pub kind: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    pub best_fit: &'static [&'static str],
    pub characteristics: &'static [&'static str],
}

pub static STANDARD_PROFILES: [DatabaseProfile; 3] = [
    DatabaseProfile {
        candidate: Candidate::MySql,
        name: "MySQL",
        kind: "Relational (SQL)",
        pros: &[
            "Mature and widely adopted with extensive community support",
            "Excellent for structured data with ACID compliance",
            "Strong performance for read-heavy workloads",
            "Easy to learn and widely supported by hosting providers",
            "Great for traditional web applications",
        ],
        cons: &[
            "Limited support for complex analytics queries",
            "Horizontal scaling requires additional complexity (sharding)",
            "Less flexible with schema changes",
            "JSON support is basic compared to PostgreSQL",
            "Advanced features lag behind PostgreSQL",
        ],
        best_fit: &[
            "Content management systems and traditional web applications",
            "E-commerce catalogues and order processing",
            "Read-heavy workloads served from replicas",
        ],
        characteristics: &[
            "Row-oriented relational storage (InnoDB)",
            "Fixed schema enforced at write time",
            "Primary/replica replication",
        ],
    },
    DatabaseProfile {
        candidate: Candidate::PostgreSql,
        name: "PostgreSQL",
        kind: "Relational (SQL)",
        pros: &[
            "Most advanced open-source relational database",
            "Excellent for complex queries and analytics",
            "Superior JSON/JSONB support for semi-structured data",
            "Strong extensibility with custom functions and data types",
            "Best-in-class data integrity and ACID compliance",
        ],
        cons: &[
            "Slightly steeper learning curve than MySQL",
            "Higher memory consumption",
            "Horizontal scaling still requires effort",
            "Can be overkill for simple applications",
            "Configuration complexity for optimization",
        ],
        best_fit: &[
            "Financial and transactional systems with strict integrity rules",
            "Reporting and analytical queries over relational data",
            "Hybrid relational and JSON document workloads",
        ],
        characteristics: &[
            "MVCC relational engine with serializable isolation",
            "JSONB, arrays and custom types alongside tables",
            "Extension ecosystem (PostGIS, TimescaleDB, pgvector)",
        ],
    },
    DatabaseProfile {
        candidate: Candidate::MongoDb,
        name: "MongoDB",
        kind: "NoSQL (Document)",
        pros: &[
            "Excellent horizontal scalability (built-in sharding)",
            "Schema flexibility for evolving data models",
            "High performance for real-time applications",
            "Natural fit for JSON/document-based data",
            "Easy to get started with minimal setup",
        ],
        cons: &[
            "Eventual consistency can complicate transactions",
            "No built-in joins (requires application-level logic)",
            "Higher storage overhead",
            "Not ideal for complex relational data",
            "ACID transactions only within single documents by default",
        ],
        best_fit: &[
            "Real-time feeds, event capture and IoT ingestion",
            "Product catalogues and content with evolving shapes",
            "Workloads that must scale writes horizontally",
        ],
        characteristics: &[
            "BSON document storage with flexible schemas",
            "Built-in sharding and replica sets",
            "Aggregation pipeline instead of joins",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_profile_per_candidate_in_declaration_order() {
        let candidates: Vec<_> = STANDARD_PROFILES
            .iter()
            .map(|profile| profile.candidate)
            .collect();
        assert_eq!(candidates, Candidate::ALL.to_vec());
        for profile in &STANDARD_PROFILES {
            assert_eq!(profile.name, profile.candidate.label());
            assert!(!profile.pros.is_empty() && !profile.cons.is_empty());
            assert!(!profile.best_fit.is_empty() && !profile.characteristics.is_empty());
        }
    }
}
