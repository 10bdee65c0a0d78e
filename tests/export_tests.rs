use predicates::str::contains;

mod common;
use common::{init_store, seed_journal, setup_test_db, temp_out, tr};

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_store(&db_path);
    seed_journal(
        &db_path,
        &[
            (-23.55, -46.63, "Received", "overflowing bin"),
            (10.0, 20.0, "Resolved", ""),
        ],
    );

    tr()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = std::fs::read_to_string(&out).expect("read export");
    assert!(content.starts_with("coords,datetime,status,comment,has_image,source"));
    assert!(content.contains("-23.55, -46.63"));
    assert!(content.contains("overflowing bin"));
}

#[test]
fn test_export_json_is_parseable() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_store(&db_path);
    seed_journal(&db_path, &[(1.5, 2.5, "Pending", "bags by the curb")]);

    tr()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("json export completed"));

    let content = std::fs::read_to_string(&out).expect("read export");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array of reports");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["coords"], "1.5, 2.5");
    assert_eq!(rows[0]["comment"], "bags by the curb");
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_store(&db_path);
    seed_journal(&db_path, &[(0.0, 0.0, "Received", "")]);

    tr()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    let out = temp_out("export_overwrite", "csv");
    init_store(&db_path);
    seed_journal(&db_path, &[(0.0, 0.0, "Received", "")]);

    std::fs::write(&out, "existing").expect("pre-create file");

    tr()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("use --force"));

    // Unchanged without --force
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "existing");

    tr()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    assert!(std::fs::read_to_string(&out).unwrap().starts_with("coords,"));
}

#[test]
fn test_export_with_empty_journal_fails() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_store(&db_path);

    tr()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("no reports to export"));
}

#[test]
fn test_backup_copies_the_store() {
    let db_path = setup_test_db("backup_copy");
    let out = temp_out("backup_copy", "sqlite");
    init_store(&db_path);

    tr()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_compress_produces_zip() {
    let db_path = setup_test_db("backup_zip");
    let out = temp_out("backup_zip", "sqlite");
    init_store(&db_path);

    tr()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let zip_path = std::path::Path::new(&out).with_extension("zip");
    assert!(zip_path.exists());
    // Uncompressed copy is removed after zipping
    assert!(!std::path::Path::new(&out).exists());
}
