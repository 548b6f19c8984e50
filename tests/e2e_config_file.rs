/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// Run the binary in `dir` with JSON output and parse stdout.
fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = cargo_bin_cmd!("nac-compare")
        .current_dir(dir)
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Config discovery
// ============================================================================

#[test]
fn test_config_auto_discovered_in_working_directory() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("nac-compare.config.yml"),
        r#"
devices: 3000
years: 4
industry: financial
region: europe
vendors:
  - portnox
  - forescout
"#,
    );

    let json = run_json(dir.path(), &[]);
    assert_eq!(json["configuration"]["devices"], 3000);
    assert_eq!(json["configuration"]["years"], 4);
    assert_eq!(json["configuration"]["industry"], "financial");
    assert_eq!(json["configuration"]["region"], "europe");
    assert_eq!(json["configuration"]["org_size"], "large");
    assert_eq!(json["vendors"].as_array().unwrap().len(), 2);
}

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("analysis.yml");
    write_config(
        &config_path,
        "devices: 750\nvendors: [meraki, juniper_mist]\nbaseline_vendor: meraki\n",
    );

    let json = run_json(dir.path(), &["--config", "analysis.yml"]);
    assert_eq!(json["configuration"]["devices"], 750);
    assert_eq!(json["configuration"]["baseline_vendor"], "meraki");
    assert_eq!(json["vendors"][0]["roi"]["total_savings"], 0.0);
}

#[test]
fn test_missing_explicit_config_is_error() {
    let dir = TempDir::new().unwrap();
    cargo_bin_cmd!("nac-compare")
        .current_dir(dir.path())
        .args(["--config", "absent.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

// ============================================================================
// Merging
// ============================================================================

#[test]
fn test_cli_flags_override_config_values() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("nac-compare.config.yml"),
        "devices: 3000\nyears: 4\nvendors: [portnox, forescout]\n",
    );

    let json = run_json(dir.path(), &["--devices", "200", "--vendors", "meraki"]);
    assert_eq!(json["configuration"]["devices"], 200);
    assert_eq!(json["configuration"]["years"], 4);
    assert_eq!(json["configuration"]["org_size"], "small");
    let vendors = json["vendors"].as_array().unwrap();
    assert_eq!(vendors.len(), 1);
    assert_eq!(vendors[0]["id"], "meraki");
}

#[test]
fn test_config_format_and_output() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("nac-compare.config.yml"),
        "devices: 1000\nvendors: [portnox, cisco_ise]\nformat: json\noutput: result.json\n",
    );

    cargo_bin_cmd!("nac-compare")
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Output complete"));

    let content = fs::read_to_string(dir.path().join("result.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["status"], "computed");
}

#[test]
fn test_constants_override_changes_personnel_cost() {
    let dir = TempDir::new().unwrap();
    let args = ["-d", "1000", "-v", "cisco_ise,portnox"];
    let standard = run_json(dir.path(), &args);

    write_config(
        &dir.path().join("nac-compare.config.yml"),
        "constants:\n  loaded_salary: 0\n",
    );
    let tuned = run_json(dir.path(), &args);

    let personnel = |json: &serde_json::Value| {
        json["vendors"][0]["cost_breakdown"]
            .as_array()
            .unwrap()
            .iter()
            .find(|line| line["category"] == "personnel")
            .unwrap()["amount"]
            .as_f64()
            .unwrap()
    };
    assert!(personnel(&standard) > 0.0);
    assert_eq!(personnel(&tuned), 0.0);
}

#[test]
fn test_dataset_path_from_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("vendors.json"),
        r#"{
  "version": "json-7",
  "vendors": [{
    "id": "solo",
    "name": "Solo NAC",
    "deployment": "hybrid",
    "market_position": "challenger",
    "market_share": 3,
    "pricing": { "model": "per_device", "monthly_rate": 2 },
    "costs": { "hardware_annual": 0, "implementation": 0, "training": 0,
               "support_percent": 0, "fte_factor": 0, "hidden_cost_multiplier": 0 },
    "implementation": { "complexity": "medium", "deploy_days": 30, "training_hours": 16 },
    "security": { "cve_count": 2, "zero_trust_score": 55, "breach_risk_reduction": 50 }
  }]
}"#,
    )
    .unwrap();
    write_config(
        &dir.path().join("nac-compare.config.yml"),
        "dataset: vendors.json\ndevices: 100\nyears: 1\nvendors: [solo]\n",
    );

    let json = run_json(dir.path(), &[]);
    assert_eq!(json["metadata"]["dataset_version"], "json-7");
    assert_eq!(json["vendors"][0]["total_cost"], 2400.0);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_invalid_config_format_is_error() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("nac-compare.config.yml"),
        "devices: 100\nformat: xml\n",
    );

    cargo_bin_cmd!("nac-compare")
        .current_dir(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid config: format 'xml'"));
}

#[test]
fn test_invalid_constant_is_error() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("nac-compare.config.yml"),
        "constants:\n  loaded_salary: -5\n",
    );

    cargo_bin_cmd!("nac-compare")
        .current_dir(dir.path())
        .args(["-d", "100", "-v", "portnox"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("constants.loaded_salary"));
}

#[test]
fn test_unparsable_config_is_error() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("nac-compare.config.yml"),
        "devices: [unclosed\n",
    );

    cargo_bin_cmd!("nac-compare")
        .current_dir(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_unknown_config_field_warns() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("nac-compare.config.yml"),
        "devices: 100\nvendors: [portnox]\ncolour: blue\n",
    );

    cargo_bin_cmd!("nac-compare")
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Unknown config field 'colour' will be ignored",
        ));
}

#[test]
fn test_config_issues_reported_with_exit_code_one() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("nac-compare.config.yml"),
        "devices: 100\nindustry: aerospace\nvendors: [portnox]\n",
    );

    cargo_bin_cmd!("nac-compare")
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("## Configuration Issues"))
        .stdout(predicate::str::contains("unknown industry 'aerospace'"));
}
