use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn inn_cmd() -> Command {
    let mut cmd = Command::cargo_bin("inn").expect("Failed to find inn binary");
    cmd.arg("--no-color");
    cmd
}

/// Writes a complete, valid listing JSON file and returns its path.
fn write_valid_listing(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("listing.json");
    let listing = serde_json::json!({
        "id": null,
        "name": "Telaga Inn",
        "description": "Lakeside property in Bandung",
        "category": "hotel",
        "email": "host@telaga.example",
        "phone": "081234567890",
        "address": {
            "street": "Jl. Merdeka 1",
            "city": "Bandung",
            "province": "Jawa Barat",
            "country": "Indonesia",
            "postal_code": "40111"
        },
        "geo": { "latitude": -6.9175, "longitude": 107.6191 },
        "amenities": ["wifi", "parking"],
        "rooms": [{
            "name": "Deluxe",
            "category": "deluxe",
            "price": 350000.0,
            "base_occupancy": 2,
            "max_occupancy": 3,
            "available_units": 4,
            "total_units": 5
        }],
        "images": [{ "kind": "resolved", "url": "https://cdn.example.com/front.jpg" }]
    });
    fs::write(&path, listing.to_string()).expect("Failed to write listing file");
    path
}

#[test]
fn test_cli_seed_and_show_draft() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let listing = write_valid_listing(temp_dir.path());

    inn_cmd()
        .args(["--database-file", db_arg, "draft", "seed", "--file", listing.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft saved: Telaga Inn"));

    inn_cmd()
        .args(["--database-file", db_arg, "draft", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Telaga Inn (not yet created)"))
        .stdout(predicate::str::contains("### Deluxe (deluxe)"));
}

#[test]
fn test_cli_show_without_a_draft() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    inn_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "draft", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No draft found."));
}

#[test]
fn test_cli_validate_complete_draft() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let listing = write_valid_listing(temp_dir.path());

    inn_cmd()
        .args(["--database-file", db_arg, "draft", "seed", "--file", listing.to_str().unwrap()])
        .assert()
        .success();

    inn_cmd()
        .args(["--database-file", db_arg, "draft", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All steps valid."));
}

#[test]
fn test_cli_validate_reports_failures() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    // Name only: every later step should fail.
    let path = temp_dir.path().join("partial.json");
    fs::write(&path, r#"{"id": null, "name": "Bare"}"#).unwrap();

    inn_cmd()
        .args(["--database-file", db_arg, "draft", "seed", "--file", path.to_str().unwrap()])
        .assert()
        .success();

    inn_cmd()
        .args(["--database-file", db_arg, "draft", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Validation failures"))
        .stdout(predicate::str::contains("rooms"));
}

#[test]
fn test_cli_clear_draft() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let listing = write_valid_listing(temp_dir.path());

    inn_cmd()
        .args(["--database-file", db_arg, "draft", "seed", "--file", listing.to_str().unwrap()])
        .assert()
        .success();

    inn_cmd()
        .args(["--database-file", db_arg, "draft", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft cleared."));

    inn_cmd()
        .args(["--database-file", db_arg, "draft", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No draft found."));
}

#[test]
fn test_cli_seed_rejects_invalid_json() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    inn_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "draft",
            "seed",
            "--file",
            path.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid listing"));
}

#[test]
fn test_cli_submit_requires_a_backend_url() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    let listing = write_valid_listing(temp_dir.path());

    inn_cmd()
        .args(["--database-file", db_arg, "draft", "seed", "--file", listing.to_str().unwrap()])
        .assert()
        .success();

    inn_cmd()
        .env_remove("INNKEEPER_API_URL")
        .args(["--database-file", db_arg, "listing", "submit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No backend URL"));
}
