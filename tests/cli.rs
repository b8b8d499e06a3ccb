//! 命令行退出码与输出测试

use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_hse-blockpkg");

#[test]
fn test_missing_rules_dir_exits_with_error() {
    let base = tempfile::tempdir().unwrap();

    let output = Command::new(BIN).arg("--base-dir").arg(base.path()).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {}", stderr);
    assert!(!base.path().join("https-everywhere.1blockpkg").exists());
    assert!(!base.path().join("https-everywhere-individual.1blockpkg").exists());
}

#[test]
fn test_successful_run_writes_both_packages() {
    let base = tempfile::tempdir().unwrap();
    let rules_dir = base.path().join("https-everywhere").join("rules");
    std::fs::create_dir_all(&rules_dir).unwrap();
    std::fs::write(
        rules_dir.join("Example.xml"),
        r#"<ruleset name="Example"><target host="example.com"/><rule from="^http:" to="https:"/></ruleset>"#,
    )
    .unwrap();

    let output = Command::new(BIN).arg("--base-dir").arg(base.path()).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());
    assert!(base.path().join("https-everywhere.1blockpkg").exists());
    assert!(base.path().join("https-everywhere-individual.1blockpkg").exists());
}
