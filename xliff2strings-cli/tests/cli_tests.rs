use indoc::indoc;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const DOCUMENT: &str = indoc! {r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <xliff xmlns="urn:oasis:names:tc:xliff:document:1.2" version="1.2">
    <file original="MyProject/en.lproj/Localizable.strings" datatype="plaintext" xml:space="preserve" source-language="en" target-language="de">
    <body>
    <trans-unit id="greeting">
    <source>Hello</source>
    <target>Hallo "Welt"</target>
    <note>Shown on launch</note>
    </trans-unit>
    </body>
    </file>
    </xliff>
"#};

fn xliff2strings_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("xliff2strings"))
}

fn run(input: &Path, output: &Path, extra: &[&str]) -> Output {
    xliff2strings_cmd()
        .args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .args(extra)
        .output()
        .unwrap()
}

fn write_input(temp_dir: &TempDir, content: &str) -> std::path::PathBuf {
    let input = temp_dir.path().join("de.xliff");
    fs::write(&input, content).unwrap();
    input
}

#[test]
fn test_convert_writes_strings_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, DOCUMENT);
    let out = temp_dir.path().join("out");

    let output = run(&input, &out, &[]);
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let written = fs::read_to_string(out.join("MyProject/de.lproj/Localizable.strings")).unwrap();
    assert_eq!(
        written,
        "/* MyProject/en.lproj/Localizable.strings -> de */\n/* Shown on launch */\n\"greeting\" = \"Hallo \\\"Welt\\\"\";\n\n"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 section(s), 1 unit(s)"));
}

#[test]
fn test_test_flag_is_a_dry_run() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, DOCUMENT);
    let out = temp_dir.path().join("out");

    let output = run(&input, &out, &["--test"]);
    assert!(output.status.success());
    assert!(!out.exists());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Would write"));
}

#[test]
fn test_missing_input_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(&temp_dir.path().join("absent.xliff"), temp_dir.path(), &[]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read input"));
}

#[test]
fn test_malformed_section_header_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        &DOCUMENT.replace(r#" datatype="plaintext" xml:space="preserve""#, ""),
    );
    let output = run(&input, &temp_dir.path().join("out"), &[]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 3"));
}

#[test]
fn test_malformed_unit_header_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, &DOCUMENT.replace(r#" id="greeting""#, ""));
    let output = run(&input, &temp_dir.path().join("out"), &[]);
    assert_eq!(output.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&output.stderr).contains("<trans-unit>"));
}

#[test]
fn test_truncated_document_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let truncated: String = DOCUMENT.lines().take(7).map(|l| format!("{l}\n")).collect();
    let input = write_input(&temp_dir, &truncated);
    let output = run(&input, &temp_dir.path().join("out"), &[]);
    assert_eq!(output.status.code(), Some(6));
    assert!(String::from_utf8_lossy(&output.stderr).contains("document truncated"));
}

#[test]
fn test_unwritable_output_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, DOCUMENT);
    // a regular file where the output directory should be
    let blocker = temp_dir.path().join("out");
    fs::write(&blocker, "").unwrap();

    let output = run(&input, &blocker, &[]);
    assert_eq!(output.status.code(), Some(7));
}

#[test]
fn test_verbose_logging_goes_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, DOCUMENT);
    let output = xliff2strings_cmd()
        .args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            temp_dir.path().join("out").to_str().unwrap(),
            "-vv",
        ])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("open trans-unit `greeting`"));
}

#[test]
fn test_missing_required_arguments() {
    let output = xliff2strings_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--input"));
}

#[test]
fn test_stray_unit_warns_at_default_level() {
    let temp_dir = TempDir::new().unwrap();
    let stray = DOCUMENT.replace(
        "<file original",
        "<trans-unit id=\"orphan\">\n<file original",
    );
    let input = write_input(&temp_dir, &stray);
    let output = xliff2strings_cmd()
        .args([
            "-i",
            input.to_str().unwrap(),
            "-o",
            temp_dir.path().join("out").to_str().unwrap(),
        ])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 3: ignoring <trans-unit> outside any <file>"));
}
