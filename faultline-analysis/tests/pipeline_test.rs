//! End-to-end pipeline tests over an in-memory polyglot fixture.

use faultline_analysis::{
    analyze_project, DetectedDatabase, Recommendation, ServiceSpec, SourceFile,
};
use faultline_core::cancel::{Cancellable, CancellationToken};
use faultline_core::config::FaultlineConfig;
use faultline_core::errors::PipelineError;

fn fixture_services() -> Vec<ServiceSpec> {
    vec![
        ServiceSpec::new("web", "services/web"),
        ServiceSpec::new("user-service", "services/user-service"),
        ServiceSpec::new("order-service", "services/order-service"),
        ServiceSpec::new("billing", "services/billing"),
    ]
}

fn fixture_files() -> Vec<SourceFile> {
    vec![
        SourceFile {
            service: "web".into(),
            path: "src/app.ts".into(),
            content: r#"
                const users = await fetch("http://user-service/api/users");
                const orders = await axios.get("http://order-service/api/orders");
            "#
            .into(),
        },
        SourceFile {
            service: "user-service".into(),
            path: "src/cache.ts".into(),
            content: "import Redis from 'ioredis';\nconst cache = new Redis();\n".into(),
        },
        SourceFile {
            service: "order-service".into(),
            path: "src/index.js".into(),
            content: r#"
                const { Pool } = require('pg');
                const res = await axios.post('http://billing/api/charge');
            "#
            .into(),
        },
        SourceFile {
            service: "billing".into(),
            path: "app/main.py".into(),
            content: "import psycopg2\n".into(),
        },
    ]
}

#[test]
fn full_pipeline_produces_expected_edges_and_rankings() {
    let result = analyze_project(
        &fixture_services(),
        &fixture_files(),
        &[],
        &FaultlineConfig::default(),
        &CancellationToken::new(),
    )
    .unwrap();

    let deps: Vec<(String, String, String)> = result
        .graph
        .dependencies
        .iter()
        .map(|d| (d.from.clone(), d.to.clone(), d.kind.clone()))
        .collect();

    let has = |from: &str, to: &str, kind: &str| {
        deps.iter()
            .any(|(f, t, k)| f == from && t == to && k == kind)
    };
    assert!(has("web", "user-service", "api"));
    assert!(has("web", "order-service", "api"));
    assert!(has("order-service", "billing", "api"));
    assert!(has("order-service", "postgresql-db", "database"));
    assert!(has("user-service", "redis-cache", "cache"));
    assert!(has("billing", "postgresql-db", "database"));

    // billing: direct {order-service}, indirect {web}, one database.
    let billing = result
        .impact
        .iter()
        .find(|r| r.service == "billing")
        .unwrap();
    assert_eq!(billing.direct_dependents, vec!["order-service"]);
    assert_eq!(billing.indirect_dependents, vec!["web"]);
    assert_eq!(billing.databases, vec!["postgresql-db"]);
    assert_eq!(billing.criticality_score, 20 + 10 + 15);

    // web calls others but nothing calls web.
    let web = result.impact.iter().find(|r| r.service == "web").unwrap();
    assert!(web.direct_dependents.is_empty());
    assert_eq!(web.recommendation, Recommendation::LowImpactLeaf);

    // Ranking is descending.
    let scores: Vec<u32> = result.impact.iter().map(|r| r.criticality_score).collect();
    let mut sorted = scores.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted);
}

#[test]
fn wire_contract_uses_camel_case_names() {
    let result = analyze_project(
        &fixture_services(),
        &fixture_files(),
        &[DetectedDatabase {
            db_type: "mongodb".into(),
            detected: true,
        }],
        &FaultlineConfig::default(),
        &CancellationToken::new(),
    )
    .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["graph"]["externalServices"].is_array());
    assert!(json["impactAnalysis"].is_array());
    let first = &json["impactAnalysis"][0];
    assert!(first["directDependents"].is_array());
    assert!(first["indirectDependents"].is_array());
    assert!(first["criticalityScore"].is_u64());
    assert!(first["recommendation"].is_string());

    // Project-declared mongodb merged into the database set.
    let db_names: Vec<&str> = json["graph"]["databases"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert!(db_names.contains(&"mongodb-db"));
    let mongo = json["graph"]["databases"]
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["name"] == "mongodb-db")
        .unwrap();
    assert_eq!(mongo["type"], "mongodb");
}

#[test]
fn identical_input_yields_byte_identical_output() {
    let run = || {
        let result = analyze_project(
            &fixture_services(),
            &fixture_files(),
            &[],
            &FaultlineConfig::default(),
            &CancellationToken::new(),
        )
        .unwrap();
        (serde_json::to_string(&result).unwrap(), result.diagram)
    };

    let (first_json, first_diagram) = run();
    for _ in 0..5 {
        let (json, diagram) = run();
        assert_eq!(first_json, json);
        assert_eq!(first_diagram, diagram);
    }
}

#[test]
fn diagram_contains_styled_nodes_and_labeled_edges() {
    let result = analyze_project(
        &fixture_services(),
        &fixture_files(),
        &[],
        &FaultlineConfig::default(),
        &CancellationToken::new(),
    )
    .unwrap();
    assert!(result.diagram.starts_with("graph TB\n"));
    assert!(result.diagram.contains(":::service"));
    assert!(result.diagram.contains(":::database"));
    assert!(result.diagram.contains("|API|"));
    assert!(result.diagram.contains("|DB|"));
    assert!(result.diagram.contains("|CACHE|"));
}

#[test]
fn zero_services_is_a_valid_empty_result() {
    let result = analyze_project(
        &[],
        &[],
        &[],
        &FaultlineConfig::default(),
        &CancellationToken::new(),
    )
    .unwrap();
    assert!(result.graph.services.is_empty());
    assert!(result.graph.dependencies.is_empty());
    assert!(result.impact.is_empty());
    assert!(result.diagram.starts_with("graph TB\n"));
}

#[test]
fn service_with_no_edges_appears_isolated() {
    let services = vec![ServiceSpec::new("quiet", "services/quiet")];
    let files = vec![SourceFile {
        service: "quiet".into(),
        path: "src/lib.rs".into(),
        content: "fn main() {}\n".into(),
    }];
    let result = analyze_project(
        &services,
        &files,
        &[],
        &FaultlineConfig::default(),
        &CancellationToken::new(),
    )
    .unwrap();
    assert_eq!(result.graph.services, vec!["quiet"]);
    assert!(result.graph.dependencies.is_empty());
    assert_eq!(result.impact[0].criticality_score, 0);
    assert_eq!(result.impact[0].recommendation, Recommendation::LowImpactLeaf);
}

#[test]
fn cancelled_run_returns_no_partial_result() {
    let token = CancellationToken::new();
    token.cancel();
    let err = analyze_project(
        &fixture_services(),
        &fixture_files(),
        &[],
        &FaultlineConfig::default(),
        &token,
    )
    .unwrap_err();
    assert!(matches!(err, PipelineError::Cancelled));
}

#[test]
fn duplicate_service_names_violate_the_caller_contract() {
    let services = vec![
        ServiceSpec::new("web", "a"),
        ServiceSpec::new("web", "b"),
    ];
    let err = analyze_project(
        &services,
        &[],
        &[],
        &FaultlineConfig::default(),
        &CancellationToken::new(),
    )
    .unwrap_err();
    assert!(matches!(err, PipelineError::InvalidInput(_)));
}

#[test]
fn unresolved_targets_become_externals_under_policy() {
    let config = FaultlineConfig::from_toml(
        "[resolution]\nunresolved_policy = \"external\"\n",
    )
    .unwrap();
    let services = vec![ServiceSpec::new("web", "services/web")];
    let files = vec![SourceFile {
        service: "web".into(),
        path: "src/pay.ts".into(),
        content: "await fetch('https://api.stripe.com/v1/charges');".into(),
    }];
    let result = analyze_project(
        &services,
        &files,
        &[],
        &FaultlineConfig::default(),
        &CancellationToken::new(),
    )
    .unwrap();
    assert!(result.graph.external_services.is_empty());

    let result = analyze_project(
        &services,
        &files,
        &[],
        &config,
        &CancellationToken::new(),
    )
    .unwrap();
    assert_eq!(result.graph.external_services, vec!["api.stripe.com"]);
}
