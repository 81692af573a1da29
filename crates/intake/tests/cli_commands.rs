use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn intake_bin() -> &'static str {
    env!("CARGO_BIN_EXE_intake")
}

fn run_cli(home: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(intake_bin());
    cmd.args(args)
        .env("INTAKE_HOME", home)
        .env("RUST_LOG", "error")
        .env_remove("INTAKE_DATABASE");
    cmd.output().expect("failed to execute intake CLI")
}

fn assert_cli_success(output: &Output, args: &[&str]) {
    assert!(
        output.status.success(),
        "command failed: {}\nstdout:\n{}\nstderr:\n{}",
        args.join(" "),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_add_then_dump_prints_one_line_per_row() {
    let home = TempDir::new().expect("create temp home");
    let db = home.path().join("customers.db");
    let db_str = db.to_string_lossy().to_string();

    let add = [
        "--database", db_str.as_str(), "add",
        "--name", "Ada Lovelace",
        "--birthday", "1985-12-10",
        "--email", "ada@example.com",
        "--phone", "555-1234",
        "--address", "1 Analytics Way",
        "--contact", "Email",
    ];
    let output = run_cli(home.path(), &add);
    assert_cli_success(&output, &add);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Your information was submitted."));

    let add_minimal = ["--database", db_str.as_str(), "add", "--name", "Grace", "--contact", "Mail"];
    assert_cli_success(&run_cli(home.path(), &add_minimal), &add_minimal);

    let dump = ["--database", db_str.as_str(), "dump"];
    let output = run_cli(home.path(), &dump);
    assert_cli_success(&output, &dump);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout:\n{}", stdout);
    assert!(lines[0].starts_with(
        "Name: Ada Lovelace, Birthday: 1985-12-10, Email: ada@example.com, Phone: 555-1234, \
         Address: 1 Analytics Way, Preferred Contact: Email, Created At: "
    ));
    assert!(lines[1].starts_with(
        "Name: Grace, Birthday: -, Email: -, Phone: -, Address: -, Preferred Contact: Mail, Created At: "
    ));
}

#[test]
fn test_list_json_is_most_recent_first() {
    let home = TempDir::new().expect("create temp home");
    let db_str = home.path().join("customers.db").to_string_lossy().to_string();

    for name in ["first", "second"] {
        let args = ["--database", db_str.as_str(), "add", "--name", name];
        assert_cli_success(&run_cli(home.path(), &args), &args);
    }

    let list = ["--database", db_str.as_str(), "list", "--json"];
    let output = run_cli(home.path(), &list);
    assert_cli_success(&output, &list);

    let rows: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list --json prints JSON");
    let rows = rows.as_array().expect("array of customers");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "second");
    assert_eq!(rows[1]["name"], "first");
    assert_eq!(rows[0]["preferred_contact"], "Email");
    assert!(rows[0]["birthday"].is_null());
}

#[test]
fn test_dump_missing_database_fails_without_creating_it() {
    let home = TempDir::new().expect("create temp home");
    let db = home.path().join("missing.db");
    let db_str = db.to_string_lossy().to_string();

    let output = run_cli(home.path(), &["--database", db_str.as_str(), "dump"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Database not found"), "stderr:\n{}", stderr);
    assert!(!db.exists());
}

#[test]
fn test_add_with_empty_name_is_rejected() {
    let home = TempDir::new().expect("create temp home");
    let db_str = home.path().join("customers.db").to_string_lossy().to_string();

    let output = run_cli(home.path(), &["--database", db_str.as_str(), "add", "--name", "   "]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Name is required."), "stderr:\n{}", stderr);

    let dump = ["--database", db_str.as_str(), "dump"];
    let output = run_cli(home.path(), &dump);
    assert_cli_success(&output, &dump);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_add_with_unknown_contact_is_rejected() {
    let home = TempDir::new().expect("create temp home");
    let db_str = home.path().join("customers.db").to_string_lossy().to_string();

    let output = run_cli(
        home.path(),
        &["--database", db_str.as_str(), "add", "--name", "Ada", "--contact", "Fax"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Choose a preferred contact method."));
}

#[test]
fn test_database_from_environment() {
    let home = TempDir::new().expect("create temp home");
    let db = home.path().join("env.db");

    let output = Command::new(intake_bin())
        .args(["config", "--json"])
        .env("INTAKE_HOME", home.path())
        .env("INTAKE_DATABASE", &db)
        .env("RUST_LOG", "error")
        .output()
        .expect("failed to execute intake CLI");
    assert!(output.status.success());

    let config: serde_json::Value = serde_json::from_slice(&output.stdout).expect("config JSON");
    assert_eq!(config["database"]["path"], &*db.to_string_lossy());
    assert_eq!(config["database"]["exists"], false);
    assert_eq!(config["home"], &*home.path().to_string_lossy());
}
