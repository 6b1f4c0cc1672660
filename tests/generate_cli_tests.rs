mod common;

use common::{closed_endpoint, run_draftdesk, TestEnv};

#[test]
fn schedule_dry_run_prints_prompt_without_api_key() {
    let output = run_draftdesk(&[
        "schedule",
        "--title",
        "Sync",
        "--date",
        "2024-01-01",
        "--time",
        "3:00 PM",
        "--duration",
        "30",
        "--attendees",
        "a@x.com",
        "--location",
        "Zoom",
        "--details",
        "Weekly",
        "--dry-run",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "schedule --dry-run should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    for expected in [
        "Title: Sync",
        "Date: 2024-01-01",
        "Duration: 30 minutes",
        "Tone: Professional",
        "SUBJECT:",
        "CALENDAR:",
        "AGENDA:",
    ] {
        assert!(stdout.contains(expected), "missing {expected:?} in:\n{stdout}");
    }
}

#[test]
fn email_dry_run_prints_prompt_with_choices() {
    let output = run_draftdesk(&[
        "email",
        "--tone",
        "persuasive",
        "--length",
        "short",
        "--dry-run",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Recipient name: Alex"));
    assert!(stdout.contains("Tone: Persuasive"));
    assert!(stdout.contains("Desired length: Short"));
    assert!(stdout.contains("ALTERNATIVE SUBJECTS:"));
    assert!(stdout.contains("FOLLOW-UP SENTENCES:"));
}

#[test]
fn schedule_without_api_key_is_a_configuration_error() {
    let output = run_draftdesk(&["schedule"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stdout.is_empty(), "nothing should be generated:\n{stdout}");
    assert!(
        stderr.contains("Error: Configuration error") && stderr.contains("GEMINI_API_KEY"),
        "expected missing key message, got:\n{}",
        stderr
    );
}

#[test]
fn tui_without_api_key_halts_before_rendering() {
    let output = run_draftdesk(&["tui"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("GEMINI_API_KEY"), "got:\n{}", stderr);
}

#[test]
fn unreachable_service_reports_error_prefix() {
    let env = TestEnv::new().with_api_key("test-key");
    env.write_config(&format!("[llm]\nendpoint = \"{}\"\n", closed_endpoint()));

    let output = env.run(&["email"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Error: Gemini request failed"),
        "expected network failure, got:\n{}",
        stderr
    );
    assert!(!stderr.contains("test-key"), "API key leaked:\n{}", stderr);
}

#[test]
fn api_key_is_read_from_dotenv_file() {
    let env = TestEnv::new();
    env.write_config(&format!("[llm]\nendpoint = \"{}\"\n", closed_endpoint()));
    std::fs::write(env.workdir().join(".env"), "GEMINI_API_KEY=from-dotenv\n")
        .expect("write .env");

    let output = env.run(&["schedule"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // The key was found, so the failure is the network call, not configuration.
    assert!(!output.status.success());
    assert!(!stderr.contains("Configuration error"), "got:\n{}", stderr);
    assert!(stderr.contains("Error: Gemini request failed"), "got:\n{}", stderr);
}
