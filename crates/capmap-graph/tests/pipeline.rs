//! End-to-end tests: CSV on disk → annotated capability map.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use capmap_core::OTHER_CATEGORY;
use capmap_graph::{CapabilityMapper, LoadError};

const BANK_CSV: &str = "\
c_name,sub_name,relation,category,definition
Risk Mgmt,Credit Risk,owns,Finance,Identifies and controls risk
Risk Mgmt,Credit Risk,owns,Finance,Identifies and controls risk
Risk Mgmt,Market Risk,owns,Finance,Identifies and controls risk
Payments,Clearing,is part of,Operations,Moves money between parties
Clearing,Settlement,feeds into,,
Treasury,Market Risk,reports to,Finance,Manages liquidity
Onboarding,KYC,depends on,Customer,Brings new clients in
KYC,Credit Risk,informs,Compliance,
Settlement,Settlement,reconciles,Operations,Final transfer of value
";

fn write_csv(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capabilities.csv");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn nodes_are_exact_union_of_names() {
    let (_dir, path) = write_csv(BANK_CSV);
    let map = CapabilityMapper::new().build_from_path(&path).unwrap();

    let ids: BTreeSet<&str> = map.nodes.iter().map(|n| n.id.as_str()).collect();
    let expected: BTreeSet<&str> = [
        "Risk Mgmt",
        "Credit Risk",
        "Market Risk",
        "Payments",
        "Clearing",
        "Settlement",
        "Treasury",
        "Onboarding",
        "KYC",
    ]
    .into_iter()
    .collect();

    assert_eq!(ids, expected);
    assert_eq!(ids.len(), map.nodes.len());
    assert_eq!(map.stats.duplicate_records, 1);
    assert_eq!(map.stats.total_edges, 8);
    assert_eq!(map.stats.self_loops, 1);
}

#[test]
fn categories_never_missing() {
    let (_dir, path) = write_csv(BANK_CSV);
    let map = CapabilityMapper::new().build_from_path(&path).unwrap();

    assert!(map.nodes.iter().all(|n| !n.category.is_empty()));

    let by_id: HashMap<&str, _> = map.nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    assert_eq!(by_id["Credit Risk"].category, OTHER_CATEGORY);
    assert_eq!(by_id["Credit Risk"].definition, None);
    assert_eq!(by_id["Clearing"].category, OTHER_CATEGORY);
    assert_eq!(by_id["KYC"].category, "Compliance");
    assert_eq!(by_id["KYC"].definition, None);
    // Settlement's first source row is the self-loop with a category.
    assert_eq!(by_id["Settlement"].category, "Operations");
    assert_eq!(
        by_id["Settlement"].definition.as_deref(),
        Some("Final transfer of value")
    );
}

#[test]
fn style_is_a_function_of_category() {
    let (_dir, path) = write_csv(BANK_CSV);
    let map = CapabilityMapper::new().build_from_path(&path).unwrap();

    for a in &map.nodes {
        for b in &map.nodes {
            if a.category == b.category {
                assert_eq!((a.group, &a.color, &a.shape), (b.group, &b.color, &b.shape));
            } else {
                assert_ne!(a.group, b.group);
            }
        }
    }

    let groups: Vec<u32> = map.styles.styles().iter().map(|s| s.group).collect();
    assert_eq!(groups, (1..=map.styles.len() as u32).collect::<Vec<_>>());
}

#[test]
fn centrality_non_negative_and_finite() {
    let (_dir, path) = write_csv(BANK_CSV);
    let map = CapabilityMapper::new().build_from_path(&path).unwrap();

    for node in &map.nodes {
        assert!(node.degree_centrality.is_finite() && node.degree_centrality >= 0.0);
        assert!(node.closeness_centrality.is_finite() && node.closeness_centrality >= 0.0);
        assert_eq!(node.size, (node.degree_centrality + 1.0) * 5.0);
    }

    let by_id: HashMap<&str, _> = map.nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    // Nothing points at a pure source.
    assert_eq!(by_id["Payments"].closeness_centrality, 0.0);
    assert_eq!(by_id["Onboarding"].closeness_centrality, 0.0);
    // Self-loop counts twice, plus the incoming Clearing edge.
    assert_eq!(by_id["Settlement"].degree_centrality, 3.0);
}

#[test]
fn labels_have_spaces_replaced() {
    let (_dir, path) = write_csv(BANK_CSV);
    let map = CapabilityMapper::new().build_from_path(&path).unwrap();

    let labels: Vec<&str> = map.edges.iter().map(|e| e.label.as_str()).collect();
    assert!(labels.contains(&"is_part_of"));
    assert!(labels.contains(&"feeds_into"));
    assert!(labels.iter().all(|l| !l.contains(' ')));
}

#[test]
fn repeated_runs_are_identical() {
    let (_dir, path) = write_csv(BANK_CSV);
    let mapper = CapabilityMapper::new();

    let first = mapper.build_from_path(&path).unwrap();
    let second = mapper.build_from_path(&path).unwrap();

    assert_eq!(
        serde_json::to_string(&first.nodes).unwrap(),
        serde_json::to_string(&second.nodes).unwrap()
    );
    assert_eq!(first.edges, second.edges);
}

#[test]
fn missing_required_column_is_load_error() {
    let (_dir, path) = write_csv("c_name,relation\nA,owns\n");
    let err = CapabilityMapper::new().build_from_path(&path).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn { .. }));
}

#[test]
fn missing_file_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CapabilityMapper::new()
        .build_from_path(dir.path().join("absent.csv"))
        .unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn ragged_row_stops_the_pipeline() {
    let (_dir, path) = write_csv("c_name,sub_name,relation,category\nA,B,owns,X\nC\n");
    let err = CapabilityMapper::new().build_from_path(&path).unwrap_err();
    assert!(matches!(err, LoadError::Csv(_)));

    let err = CapabilityMapper::new()
        .build_from_reader("c_name,sub_name,relation\nA,B,owns,extra,more\n".as_bytes())
        .unwrap_err();
    assert!(matches!(err, LoadError::Csv(_)));
}

#[test]
fn invalid_utf8_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.csv");
    std::fs::write(&path, b"c_name,sub_name,relation\nZ\xfcrich Ops,Clearing,owns\n").unwrap();

    let err = CapabilityMapper::new().build_from_path(&path).unwrap_err();
    assert!(matches!(err, LoadError::Csv(_)));
}
