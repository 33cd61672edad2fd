//! Integration tests for the pagesize CLI

use std::path::Path;
use std::process::Command;

use lopdf::{dictionary, Document, Object};
use tempfile::TempDir;

fn run_pagesize(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "pagesize", "--quiet", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Write a PDF whose pages have the given media boxes in points.
fn write_pdf(path: &Path, sizes_pt: &[(f64, f64)]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = sizes_pt
        .iter()
        .map(|&(width, height)| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    Object::Real(0.0),
                    Object::Real(0.0),
                    Object::Real(width as f32),
                    Object::Real(height as f32),
                ],
            })
            .into()
        })
        .collect();

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

/// A 5-page fixture: pages 1-3 A4 (page 2 landscape), pages 4-5 A3.
fn mixed_fixture(dir: &TempDir) -> String {
    let path = dir.path().join("mixed.pdf");
    write_pdf(
        &path,
        &[
            (595.0, 842.0),
            (842.0, 595.0),
            (595.0, 842.0),
            (842.0, 1191.0),
            (842.0, 1191.0),
        ],
    );
    path.to_string_lossy().to_string()
}

fn write_settings(dir: &TempDir) -> String {
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{
            "dimensions": [
                { "name": "A4", "size": { "width": 210, "height": 297 } },
                { "name": "A3", "size": { "width": 297, "height": 420 } }
            ],
            "filters": [
                { "text": "Large", "rules": [ { "min-short-side": 250 } ] }
            ]
        }"#,
    )
    .unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_pagesize(&["--help"]);

    assert!(success);
    assert!(stdout.contains("pagesize"));
    assert!(stdout.contains("--settings"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--filter"));
    assert!(stdout.contains("--no-ranges"));
}

#[test]
fn test_table_output() {
    let dir = TempDir::new().unwrap();
    let pdf = mixed_fixture(&dir);
    let settings = write_settings(&dir);

    let (stdout, _, success) = run_pagesize(&[&pdf, "--settings", &settings]);

    assert!(success);
    assert!(stdout.contains("Page count"));
    assert!(stdout.contains("Paper size"));
    assert!(stdout.contains("210x297 mm"));
    assert!(stdout.contains("A4"));
    assert!(stdout.contains("1-3"));
    assert!(stdout.contains("297x420 mm"));
    assert!(stdout.contains("4-5"));
    assert!(stdout.contains("Total (5 pages, 2 groups)"));
}

#[test]
fn test_unknown_paper_sizes_without_settings() {
    let dir = TempDir::new().unwrap();
    let pdf = mixed_fixture(&dir);
    let missing = dir.path().join("absent.json");

    let (stdout, _, success) =
        run_pagesize(&[&pdf, "--settings", &missing.to_string_lossy()]);

    assert!(success);
    assert!(stdout.contains("unknown"));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let pdf = mixed_fixture(&dir);
    let settings = write_settings(&dir);

    let (stdout, _, success) =
        run_pagesize(&[&pdf, "--settings", &settings, "--output", "json"]);

    assert!(success);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");
    let rows = report["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["paper_size"], "A4");
    assert_eq!(rows[0]["page_count"], 3);
    assert_eq!(rows[0]["pages"], "1-3");
    assert_eq!(rows[1]["paper_size"], "A3");
    // 3 A4 pages + 2 A3 pages
    let expected_surface = 3 * 210 * 297 + 2 * 297 * 420;
    assert_eq!(report["surface_mm2"], expected_surface);
}

#[test]
fn test_filter_shows_matched_groups_and_surface() {
    let dir = TempDir::new().unwrap();
    let pdf = mixed_fixture(&dir);
    let settings = write_settings(&dir);

    let (stdout, _, success) =
        run_pagesize(&[&pdf, "--settings", &settings, "--filter", "Large"]);

    assert!(success);
    // Only A3 has a short side >= 250
    assert!(stdout.contains("A3"));
    assert!(!stdout.contains("A4"));
    // 2 * 297 * 420 = 249480 mm² = 24.9 dm²
    assert!(stdout.contains("24.9"));
}

#[test]
fn test_unknown_filter_fails() {
    let dir = TempDir::new().unwrap();
    let pdf = mixed_fixture(&dir);
    let settings = write_settings(&dir);

    let (_, stderr, success) =
        run_pagesize(&[&pdf, "--settings", &settings, "--filter", "Nope"]);

    assert!(!success);
    assert!(stderr.contains("no filter named 'Nope'"));
    assert!(stderr.contains("Large"));
}

#[test]
fn test_no_ranges_flag() {
    let dir = TempDir::new().unwrap();
    let pdf = mixed_fixture(&dir);
    let settings = write_settings(&dir);

    let (stdout, _, success) = run_pagesize(&[&pdf, "--settings", &settings, "--no-ranges"]);

    assert!(success);
    assert!(stdout.contains("1,2,3"));
    assert!(!stdout.contains("1-3"));
}

#[test]
fn test_surface_flag() {
    let dir = TempDir::new().unwrap();
    let pdf = mixed_fixture(&dir);
    let settings = write_settings(&dir);

    let (stdout, _, success) = run_pagesize(&[&pdf, "--settings", &settings, "--surface"]);

    assert!(success);
    // (3*210*297 + 2*297*420) / 10000 = 43.7 dm², rounded to one digit
    assert!(stdout.contains("Surface: 43.7 dm²"));
}

#[test]
fn test_missing_document_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.pdf");

    let (_, stderr, success) = run_pagesize(&[&missing.to_string_lossy()]);

    assert!(!success);
    assert!(stderr.contains("error"));
}

#[test]
fn test_broken_settings_warns_and_continues() {
    let dir = TempDir::new().unwrap();
    let pdf = mixed_fixture(&dir);
    let settings = dir.path().join("broken.json");
    std::fs::write(&settings, "{ not json").unwrap();

    let (stdout, stderr, success) =
        run_pagesize(&[&pdf, "--settings", &settings.to_string_lossy()]);

    assert!(success);
    assert!(stderr.contains("warning"));
    // Labels degrade to the unknown sentinel
    assert!(stdout.contains("unknown"));
}
