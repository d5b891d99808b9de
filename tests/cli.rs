// CLI tests driven with rexpect against the built binary
use rexpect::spawn;
use std::path::{Path, PathBuf};

const TIMEOUT_MS: u64 = 10000;
const BIN: &str = env!("CARGO_BIN_EXE_study-aid");

const NOTES: &str = "Glaciers carve deep valleys as they slowly advance across mountain ranges. \
    Meltwater from retreating glaciers feeds many rivers that flow toward distant oceans.";

fn write_notes(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

fn run(args: &str) -> rexpect::session::PtySession {
    spawn(&format!("{} {}", BIN, args), Some(TIMEOUT_MS)).expect("Failed to spawn study-aid")
}

#[test]
fn test_help() {
    let mut p = run("--help");
    p.exp_string("Quizzes, key points and read-aloud").unwrap();
    p.exp_eof().unwrap();
}

#[test]
fn test_extract_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_notes(dir.path(), "glaciers.txt", NOTES);

    let mut p = run(&format!("extract {}", path.display()));
    p.exp_string("Glaciers carve deep valleys").unwrap();
    p.exp_string("distant oceans.").unwrap();
    p.exp_eof().unwrap();
}

#[test]
fn test_json_media_type_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_notes(dir.path(), "glaciers.txt", NOTES);

    let mut p = run(&format!("extract {} --media-type application/json", path.display()));
    p.exp_string("Unsupported file type: application/json").unwrap();
    p.exp_eof().unwrap();
}

#[test]
fn test_quiz_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_notes(dir.path(), "glaciers.txt", NOTES);

    let mut p = run(&format!("quiz {} --seed 4 --format json", path.display()));
    p.exp_string("\"id\": \"q0\"").unwrap();
    p.exp_string("\"id\": \"q1\"").unwrap();
    p.exp_string("\"correctAnswer\"").unwrap();
    p.exp_eof().unwrap();
}

#[test]
fn test_keypoints_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_notes(dir.path(), "glaciers.txt", NOTES);

    let mut p = run(&format!("keypoints {}", path.display()));
    p.exp_string("* 1. Meltwater from retreating glaciers").unwrap();
    p.exp_string("* 2. Glaciers carve deep valleys").unwrap();
    p.exp_eof().unwrap();
}

#[test]
fn test_short_text_has_no_quiz() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_notes(dir.path(), "short.txt", "a b c d e f g h i j.");

    let mut p = run(&format!("quiz {}", path.display()));
    p.exp_string("No quiz questions could be generated.").unwrap();
    p.exp_eof().unwrap();
}

#[test]
fn test_study_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_notes(dir.path(), "glaciers.txt", NOTES);

    let mut p = run(&format!("study {} --seed 11", path.display()));
    p.exp_string("Studying glaciers.txt").unwrap();
    p.exp_string("> ").unwrap();

    p.send_line("show").unwrap();
    p.exp_string("q0 [").unwrap();
    p.exp_string("q1 [").unwrap();

    p.send_line("answer q0 9").unwrap();
    p.exp_string("out of range").unwrap();

    p.send_line("answer q0 1").unwrap();
    p.exp_regex("Correct!|Try again").unwrap();

    p.send_line("score").unwrap();
    p.exp_string("1 of 2 answered").unwrap();

    p.send_line("points").unwrap();
    p.exp_string("* 1. Meltwater").unwrap();

    p.send_line("bogus").unwrap();
    p.exp_string("Unknown command: bogus").unwrap();

    p.send_line("quit").unwrap();
    p.exp_eof().unwrap();
}

#[test]
fn test_copy_with_no_key_points() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_notes(dir.path(), "short.txt", "Too short. Also short.");

    let mut p = run(&format!("keypoints {} --copy", path.display()));
    p.exp_string("No key points found.").unwrap();
    p.exp_string("Nothing to copy.").unwrap();
    p.exp_eof().unwrap();
}

#[test]
fn test_study_open_switches_documents() {
    let dir = tempfile::tempdir().unwrap();
    let notes = write_notes(dir.path(), "glaciers.txt", NOTES);
    let rivers = write_notes(
        dir.path(),
        "rivers.txt",
        "Rivers move sediment downstream and build wide fertile deltas at their mouths.",
    );
    let data = write_notes(dir.path(), "glaciers.json", "{\"topic\": \"ice\"}");

    let mut p = run(&format!("study {} --seed 5", notes.display()));
    p.exp_string("Studying glaciers.txt").unwrap();
    p.exp_string("> ").unwrap();

    p.send_line(&format!("open {}", rivers.display())).unwrap();
    p.exp_string("Opened rivers.txt").unwrap();
    p.exp_string("1 questions.").unwrap();

    p.send_line(&format!("open {}", data.display())).unwrap();
    p.exp_string("Error: Unsupported file type: application/octet-stream").unwrap();

    // quiz is gone, the rivers text is still there
    p.send_line("show").unwrap();
    p.exp_string("No quiz questions could be generated.").unwrap();
    p.send_line("points").unwrap();
    p.exp_string("* 1. Rivers move sediment downstream").unwrap();

    p.send_line(&format!("open {} text/plain", data.display())).unwrap();
    p.exp_string("Opened glaciers.json").unwrap();

    p.send_line("quit").unwrap();
    p.exp_eof().unwrap();
}
