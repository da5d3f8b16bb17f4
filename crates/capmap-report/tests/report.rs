//! Integration tests: CSV file → HTML report on disk.

use capmap_core::ReportConfig;
use capmap_report::{Column, ReportError, ReportGenerator, SortOrder};

const CSV: &str = "\
c_name,sub_name,relation,category,definition
Risk Mgmt,Credit Risk,owns,Finance,Identifies and controls risk
Risk Mgmt,Market Risk,owns,Finance,Identifies and controls risk
Treasury,Market Risk,reports to,Finance,Manages liquidity
Payments,Clearing,is part of,Operations,Moves money between parties
Clearing,Settlement,feeds into,,
";

fn config_in(dir: &tempfile::TempDir) -> ReportConfig {
    let input = dir.path().join("capabilities.csv");
    std::fs::write(&input, CSV).unwrap();
    ReportConfig {
        input_path: input.display().to_string(),
        output_path: dir.path().join("report.html").display().to_string(),
        page_size: 2,
        ..ReportConfig::default()
    }
}

#[test]
fn writes_html_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let generator = ReportGenerator::new(config.clone());

    let report = generator.generate().unwrap();
    report.write_html(&config.output_path, "Bank Capabilities").unwrap();

    let html = std::fs::read_to_string(&config.output_path).unwrap();
    assert!(html.contains("<title>Bank Capabilities</title>"));
    assert!(html.contains("vis-network"));
    assert!(html.contains("pageLength: 2"));
    assert!(html.contains("\"label\":\"is_part_of\""));
    assert!(html.contains(&report.fingerprint));
}

#[test]
fn table_search_sort_and_page() {
    let dir = tempfile::tempdir().unwrap();
    let report = ReportGenerator::new(config_in(&dir)).generate().unwrap();

    let mut risky = report.table.search("risk");
    risky.sort_by(Column::DegreeCentrality, SortOrder::Descending);
    let page = risky.page(1).unwrap();

    assert_eq!(page.total_rows, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.rows.len(), 2);
    // Risk Mgmt and Market Risk both touch two edges; Risk Mgmt comes first in node order.
    assert_eq!(page.rows[0].name, "Risk Mgmt");
    assert_eq!(page.rows[1].name, "Market Risk");

    assert!(matches!(
        risky.page(3),
        Err(ReportError::PageOutOfRange { .. })
    ));
}

#[test]
fn missing_input_surfaces_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig {
        input_path: dir.path().join("nope.csv").display().to_string(),
        ..ReportConfig::default()
    };

    let err = ReportGenerator::new(config).generate().unwrap_err();
    assert!(matches!(err, ReportError::Load(_)));
}

#[test]
fn same_input_same_fingerprint() {
    let dir = tempfile::tempdir().unwrap();
    let generator = ReportGenerator::new(config_in(&dir));

    let first = generator.generate().unwrap();
    let second = generator.generate().unwrap();
    assert_eq!(first.fingerprint, second.fingerprint);
    assert_eq!(
        serde_json::to_string(&first.network).unwrap(),
        serde_json::to_string(&second.network).unwrap()
    );
}

#[test]
fn table_query_matches_cli_flow() {
    let dir = tempfile::tempdir().unwrap();
    let report = ReportGenerator::new(config_in(&dir)).generate().unwrap();

    let column: Column = "closeness".parse().unwrap();
    let page = report
        .table
        .query(Some("FINANCE"), Some(column), SortOrder::Descending, 1)
        .unwrap();
    assert_eq!(page.total_rows, 2);
    assert_eq!(page.rows.len(), 2);
    assert!(page.rows[0].closeness_centrality >= page.rows[1].closeness_centrality);

    let err = report
        .table
        .query(None, None, SortOrder::Ascending, 99)
        .unwrap_err();
    assert!(matches!(err, ReportError::PageOutOfRange { page: 99, .. }));
}
