//! Canonical database and cache node names.

use crate::graph::EdgeKind;

/// Map a matched client keyword to its canonical target node and edge
/// kind. Redis-family keywords produce `cache` edges, not `database`.
pub fn resolve_db_keyword(keyword: &str) -> Option<(&'static str, EdgeKind)> {
    match keyword {
        "postgresql" | "postgres" | "pg" | "psycopg2" | "pgx" => {
            Some(("postgresql-db", EdgeKind::Database))
        }
        "mongodb" | "mongoose" => Some(("mongodb-db", EdgeKind::Database)),
        "redis" | "ioredis" | "jedis" => Some(("redis-cache", EdgeKind::Cache)),
        "mysql" | "mysql2" | "mariadb" => Some(("mysql-db", EdgeKind::Database)),
        _ => None,
    }
}

/// Map a project-level detected database type to its canonical node id.
pub fn canonical_db_node(db_type: &str) -> Option<&'static str> {
    match db_type.to_ascii_lowercase().as_str() {
        "postgresql" | "postgres" => Some("postgresql-db"),
        "mongodb" | "mongo" => Some("mongodb-db"),
        "redis" => Some("redis-cache"),
        "mysql" | "mariadb" => Some("mysql-db"),
        _ => None,
    }
}

/// Human-readable engine label for a canonical database node, used to
/// annotate database nodes in the diagram.
pub fn engine_label(node_id: &str) -> Option<&'static str> {
    match node_id {
        "postgresql-db" => Some("PostgreSQL"),
        "mongodb-db" => Some("MongoDB"),
        "redis-cache" => Some("Redis"),
        "mysql-db" => Some("MySQL"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redis_family_maps_to_cache_edge() {
        for kw in ["redis", "ioredis", "jedis"] {
            let (node, kind) = resolve_db_keyword(kw).unwrap();
            assert_eq!(node, "redis-cache");
            assert_eq!(kind, EdgeKind::Cache);
        }
    }

    #[test]
    fn postgres_family_maps_to_database_edge() {
        for kw in ["postgresql", "postgres", "pg", "psycopg2", "pgx"] {
            let (node, kind) = resolve_db_keyword(kw).unwrap();
            assert_eq!(node, "postgresql-db");
            assert_eq!(kind, EdgeKind::Database);
        }
    }

    #[test]
    fn unknown_keyword_is_unresolved() {
        assert!(resolve_db_keyword("sqlite").is_none());
    }

    #[test]
    fn detected_types_share_canonical_names() {
        assert_eq!(canonical_db_node("PostgreSQL"), Some("postgresql-db"));
        assert_eq!(canonical_db_node("redis"), Some("redis-cache"));
        assert_eq!(engine_label("mongodb-db"), Some("MongoDB"));
    }
}
