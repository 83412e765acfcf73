//! Disk-backed pipeline tests using temporary service roots.

use faultline_analysis::{analyze_from_disk, ServiceSpec};
use faultline_core::cancel::CancellationToken;
use faultline_core::config::FaultlineConfig;

#[test]
fn analyzes_services_enumerated_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let web = dir.path().join("web");
    let users = dir.path().join("user-service");
    std::fs::create_dir_all(web.join("src")).unwrap();
    std::fs::create_dir_all(users.join("src")).unwrap();
    std::fs::create_dir_all(web.join("node_modules/x")).unwrap();

    std::fs::write(
        web.join("src/app.ts"),
        "const r = await fetch('http://user-service/api/users');\n",
    )
    .unwrap();
    std::fs::write(
        web.join("node_modules/x/index.js"),
        "axios.get('http://user-service/api')",
    )
    .unwrap();
    std::fs::write(users.join("src/db.ts"), "import { Pool } from 'pg';\n").unwrap();

    let services = vec![
        ServiceSpec::new("web", &web),
        ServiceSpec::new("user-service", &users),
    ];
    let outcome = analyze_from_disk(
        &services,
        &[],
        &FaultlineConfig::default(),
        &CancellationToken::new(),
    )
    .unwrap();
    assert!(outcome.is_clean());

    let result = &outcome.data;
    assert!(result
        .graph
        .dependencies
        .iter()
        .any(|d| d.from == "web" && d.to == "user-service" && d.kind == "api"));
    assert!(result
        .graph
        .dependencies
        .iter()
        .any(|d| d.from == "user-service" && d.to == "postgresql-db"));
}

#[test]
fn missing_service_root_degrades_to_isolated_node() {
    let dir = tempfile::tempdir().unwrap();
    let web = dir.path().join("web");
    std::fs::create_dir_all(&web).unwrap();
    std::fs::write(web.join("app.js"), "redis\n").unwrap();

    let services = vec![
        ServiceSpec::new("web", &web),
        ServiceSpec::new("ghost", dir.path().join("does-not-exist")),
    ];
    let outcome = analyze_from_disk(
        &services,
        &[],
        &FaultlineConfig::default(),
        &CancellationToken::new(),
    )
    .unwrap();

    // Ghost's root was unreadable: non-fatal, recorded, node still present.
    assert_eq!(outcome.error_count(), 1);
    assert!(outcome.data.graph.services.contains(&"ghost".to_string()));
    let ghost = outcome
        .data
        .impact
        .iter()
        .find(|r| r.service == "ghost")
        .unwrap();
    assert_eq!(ghost.criticality_score, 0);
}
