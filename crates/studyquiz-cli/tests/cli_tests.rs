//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CAT_TEXT: &str = "The cat sat on the mat. It was 5 years old.";

fn studyquiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("studyquiz").unwrap()
}

#[test]
fn generate_korean_document_from_text() {
    studyquiz()
        .args(["generate", "--text", CAT_TEXT, "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("### 토론 주제\n"))
        .stdout(predicate::str::contains("### OX 문제"))
        .stdout(predicate::str::contains("### 빈칸 채우기"))
        .stdout(predicate::str::contains("1) ____ cat sat on the mat.\n   정답: The"));
}

#[test]
fn generate_from_file_in_english() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, CAT_TEXT).unwrap();

    studyquiz()
        .arg("generate")
        .arg("--file")
        .arg(&path)
        .args(["--locale", "en", "--categories", "discussion", "--discussion-count", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Discussion Topics"))
        .stdout(predicate::str::contains(
            "1) Discuss the core meaning of 'The cat sat on the mat.'",
        ))
        .stdout(predicate::str::contains("2)").not())
        .stdout(predicate::str::contains("True or False").not());
}

#[test]
fn generate_reads_stdin() {
    studyquiz()
        .args(["generate", "--locale", "en", "--categories", "fill_blank"])
        .write_stdin("The dog barked.")
        .assert()
        .success()
        .stdout("### Fill in the Blank\n1) ____ dog barked.\n   Answer: The\n\n");
}

#[test]
fn generate_is_reproducible_with_seed() {
    let run = || {
        studyquiz()
            .args(["generate", "--text", "In 1492 Columbus sailed. He had 3 ships."])
            .args(["--seed", "42", "--categories", "tf"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn generate_json_format() {
    studyquiz()
        .args(["generate", "--text", CAT_TEXT, "--seed", "1", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"locale\": \"ko\""))
        .stdout(predicate::str::contains("\"fill_blank\""));
}

#[test]
fn generate_html_format() {
    studyquiz()
        .args(["generate", "--text", CAT_TEXT, "--format", "html", "--locale", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<html lang=\"en\">"));
}

#[test]
fn generate_empty_text_prints_nothing() {
    studyquiz()
        .args(["generate", "--text", ""])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn generate_rejects_out_of_range_count() {
    studyquiz()
        .args(["generate", "--text", CAT_TEXT, "--tf-count", "11"])
        .assert()
        .failure();
    studyquiz()
        .args(["generate", "--text", CAT_TEXT, "--blank-count", "0"])
        .assert()
        .failure();
}

#[test]
fn generate_rejects_unknown_category() {
    studyquiz()
        .args(["generate", "--text", CAT_TEXT, "--categories", "essay"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn generate_rejects_unknown_format() {
    studyquiz()
        .args(["generate", "--text", CAT_TEXT, "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn generate_missing_file() {
    studyquiz()
        .args(["generate", "--file", "no_such_notes.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn text_and_file_conflict() {
    studyquiz()
        .args(["generate", "--text", "x", "--file", "y.txt"])
        .assert()
        .failure();
}

#[test]
fn generate_with_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quiz.toml");
    std::fs::write(
        &path,
        "locale = \"en\"\ncategories = [\"fill_blank\"]\n\n[stopwords]\nextra = [\"The\"]\n",
    )
    .unwrap();

    studyquiz()
        .args(["generate", "--text", "The dog barked."])
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout("### Fill in the Blank\n1) The ____ barked.\n   Answer: dog\n\n");
}

#[test]
fn terms_table() {
    studyquiz()
        .args(["terms", "--text", "Ox ox ox. Elephant walks.", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Elephant"))
        .stdout(predicate::str::contains("Score"))
        .stdout(predicate::str::contains("walks").not());
}

#[test]
fn split_lists_sentences() {
    studyquiz()
        .args(["split", "--text", "첫 문장이다 둘째 문장. Third one!"])
        .assert()
        .success()
        .stdout("1) 첫 문장이다\n2) 둘째 문장.\n3) Third one!\n");
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    studyquiz()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created studyquiz.toml"));
    assert!(dir.path().join("studyquiz.toml").exists());

    studyquiz()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    studyquiz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("discussion prompts and quizzes"));
}

#[test]
fn version_output() {
    studyquiz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("studyquiz"));
}
