//! CLI integration tests using assert_cmd.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pubquiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("pubquiz").unwrap()
}

/// Twenty questions, three of them tagged "pub". The pub answers are all
/// identical so grading does not depend on selection order.
const DATASET: &str = "\
question_text,answer_text,source
Pub night question one?,Rock & Roll,pub
Pub night question two?,Rock & Roll,pub
Pub night question three?,Rock & Roll,PUB
General question 1?,Answer 1,online
General question 2?,Answer 2,online
General question 3?,Answer 3,online
General question 4?,Answer 4,online
General question 5?,Answer 5,online
General question 6?,Answer 6,online
General question 7?,Answer 7,online
General question 8?,Answer 8,online
General question 9?,Answer 9,online
General question 10?,Answer 10,online
General question 11?,Answer 11,online
General question 12?,Answer 12,online
General question 13?,Answer 13,online
General question 14?,Answer 14,online
General question 15?,Answer 15,online
General question 16?,Answer 16,online
General question 17?,Answer 17,online
";

fn write_dataset(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("questions.csv");
    std::fs::write(&path, DATASET).unwrap();
    path
}

fn write_answers(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("answers.txt");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn show_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);

    let run = || {
        pubquiz()
            .arg("show")
            .arg("--questions")
            .arg(&dataset)
            .arg("--date")
            .arg("2024-03-01")
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn show_differs_across_dates() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);

    let run = |date: &str| {
        pubquiz()
            .arg("show")
            .arg("--questions")
            .arg(&dataset)
            .arg("--date")
            .arg(date)
            .output()
            .unwrap()
    };

    let a = run("2024-03-01");
    let b = run("2024-03-02");
    assert!(a.status.success());
    assert_ne!(a.stdout, b.stdout);
}

#[test]
fn show_samples_fifteen_questions() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);

    pubquiz()
        .arg("show")
        .arg("--questions")
        .arg(&dataset)
        .arg("--date")
        .arg("2024-03-01")
        .assert()
        .success()
        .stdout(predicate::str::contains("15 questions"));
}

#[test]
fn show_pub_only_filters() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);

    pubquiz()
        .arg("show")
        .arg("--questions")
        .arg(&dataset)
        .arg("--date")
        .arg("2024-03-01")
        .arg("--mode")
        .arg("pub-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 questions"))
        .stdout(predicate::str::contains("Pub night question"))
        .stdout(predicate::str::contains("General question").not());
}

#[test]
fn show_unknown_mode_fails() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);

    pubquiz()
        .arg("show")
        .arg("--questions")
        .arg(&dataset)
        .arg("--mode")
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown quiz mode"));
}

#[test]
fn show_missing_dataset_fails() {
    pubquiz()
        .arg("show")
        .arg("--questions")
        .arg("no_such_file.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn grade_full_marks() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);
    let answers = write_answers(&dir, "rock and roll\nrock and roll\nrock and roll\n");

    pubquiz()
        .arg("grade")
        .arg("--questions")
        .arg(&dataset)
        .arg("--date")
        .arg("2024-03-01")
        .arg("--mode")
        .arg("pub-only")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 3 / 3"));
}

#[test]
fn grade_blank_answers_score_zero() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);
    let answers = write_answers(&dir, "");

    pubquiz()
        .arg("grade")
        .arg("--questions")
        .arg(&dataset)
        .arg("--date")
        .arg("2024-03-01")
        .arg("--mode")
        .arg("pub-only")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0 / 3"));
}

#[test]
fn grade_json_format() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);
    let answers = write_answers(&dir, "rock and roll\n");

    pubquiz()
        .arg("grade")
        .arg("--questions")
        .arg(&dataset)
        .arg("--date")
        .arg("2024-03-01")
        .arg("--mode")
        .arg("pub-only")
        .arg("--answers")
        .arg(&answers)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"quiz_date\": \"2024-03-01\""))
        .stdout(predicate::str::contains("\"mode\": \"pub-only\""));
}

#[test]
fn grade_markdown_format() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);
    let answers = write_answers(&dir, "rock and roll\n");

    pubquiz()
        .arg("grade")
        .arg("--questions")
        .arg(&dataset)
        .arg("--date")
        .arg("2024-03-01")
        .arg("--mode")
        .arg("pub-only")
        .arg("--answers")
        .arg(&answers)
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("| # | Question |"))
        .stdout(predicate::str::contains("Score: 1 / 3"));
}

#[test]
fn grade_saves_report() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);
    let answers = write_answers(&dir, "rock and roll\n");
    let report_path = dir.path().join("report.json");

    pubquiz()
        .arg("grade")
        .arg("--questions")
        .arg(&dataset)
        .arg("--date")
        .arg("2024-03-01")
        .arg("--mode")
        .arg("pub-only")
        .arg("--answers")
        .arg(&answers)
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let content = std::fs::read_to_string(&report_path).unwrap();
    assert!(content.contains("\"quiz_date\": \"2024-03-01\""));
}

#[test]
fn grade_missing_answers_file_fails() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);

    pubquiz()
        .arg("grade")
        .arg("--questions")
        .arg(&dataset)
        .arg("--answers")
        .arg("no_such_answers.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read answers"));
}

#[test]
fn play_reads_answers_from_stdin() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);

    pubquiz()
        .arg("play")
        .arg("--questions")
        .arg(&dataset)
        .arg("--date")
        .arg("2024-03-01")
        .arg("--mode")
        .arg("pub-only")
        .write_stdin("rock and roll\nrock and roll\nrock and roll\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 3 / 3"));
}

#[test]
fn play_grades_missing_input_as_blank() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);

    // One answer, then EOF: the other two grade as blank.
    pubquiz()
        .arg("play")
        .arg("--questions")
        .arg(&dataset)
        .arg("--date")
        .arg("2024-03-01")
        .arg("--mode")
        .arg("pub-only")
        .write_stdin("rock and roll\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 1 / 3"));
}

#[test]
fn play_with_details_prints_breakdown() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);

    pubquiz()
        .arg("play")
        .arg("--questions")
        .arg(&dataset)
        .arg("--date")
        .arg("2024-03-01")
        .arg("--mode")
        .arg("pub-only")
        .arg("--details")
        .write_stdin("rock and roll\nrock and roll\nrock and roll\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("| # | Question |"));
}

#[test]
fn validate_clean_dataset() {
    let dir = TempDir::new().unwrap();
    let dataset = write_dataset(&dir);

    pubquiz()
        .arg("validate")
        .arg("--questions")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("20 questions"))
        .stdout(predicate::str::contains("Dataset valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("questions.csv");
    std::fs::write(
        &path,
        "question_text,answer_text,source\nQ1?,A1,online\nQ1?,A2,online\n",
    )
    .unwrap();

    pubquiz()
        .arg("validate")
        .arg("--questions")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate question text"))
        .stdout(predicate::str::contains("pub-only mode will be empty"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    pubquiz()
        .arg("validate")
        .arg("--questions")
        .arg("no_such_file.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    pubquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created questions.csv"));

    assert!(dir.path().join("questions.csv").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    pubquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    pubquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    pubquiz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily pub trivia practice quiz"));
}

#[test]
fn version_output() {
    pubquiz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pubquiz"));
}
