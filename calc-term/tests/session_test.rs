//! End-to-end tests for the line-driven calculator session.

use std::time::Duration;

use calc_core::{Calculator, CalculatorState, EngineConfig, Frame, RecordingDisplay};
use calc_term::{Session, SessionStats, TerminalDisplay};
use pretty_assertions::assert_eq;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::time::sleep;

fn recording_session(wait_recovery: bool) -> Session<RecordingDisplay> {
    Session::new(Calculator::new(RecordingDisplay::new()), wait_recovery)
}

fn frame(
    current: &str,
    history: &str,
) -> Frame {
    Frame {
        current: current.to_string(),
        history: history.to_string(),
    }
}

fn last_frame(session: &Session<RecordingDisplay>) -> Frame {
    session
        .calculator()
        .display()
        .last_frame()
        .cloned()
        .expect("at least one frame")
}

#[tokio::test]
async fn chained_input_evaluates_left_to_right() {
    let mut session = recording_session(false);

    let stats = session
        .run(&b"5+3+2=\n"[..])
        .await
        .expect("session runs");

    assert_eq!(last_frame(&session), frame("10", "8 + 2 = 10"));
    assert_eq!(
        stats,
        SessionStats {
            lines: 1,
            intents: 6,
            ignored_keys: 0,
            recoveries: 0,
        }
    );
}

#[tokio::test]
async fn named_keys_and_spacing_are_accepted() {
    let mut session = recording_session(false);

    session
        .run(&b"12 * 3 Enter\n4 Backspace 5 + 1 Enter\n"[..])
        .await
        .expect("session runs");

    assert_eq!(last_frame(&session), frame("6", "5 + 1 = 6"));
}

#[tokio::test]
async fn unmapped_keys_are_counted_and_skipped() {
    let mut session = recording_session(false);

    let stats = session
        .run(&b"2 x 3 Tab\n"[..])
        .await
        .expect("session runs");

    assert_eq!(stats.ignored_keys, 4);
    assert_eq!(session.calculator().state().current_input, "23");
}

#[tokio::test]
async fn escape_resets_the_calculation() {
    let mut session = recording_session(false);

    session
        .run(&b"7+8\nEscape\n"[..])
        .await
        .expect("session runs");

    assert_eq!(session.calculator().state(), &CalculatorState::default());
}

#[tokio::test(start_paused = true)]
async fn error_clears_after_delay_without_further_input() {
    let (mut writer, reader) = tokio::io::duplex(64);
    let task = tokio::spawn(async move {
        let mut session = recording_session(false);
        let stats = session.run(BufReader::new(reader)).await?;
        anyhow::Ok((session, stats))
    });

    writer.write_all(b"9/0=\n").await.expect("write keys");
    sleep(Duration::from_millis(2500)).await;
    drop(writer);

    let (session, stats) = task.await.expect("task joins").expect("session runs");
    let frames = session.calculator().display().frames();

    assert_eq!(stats.recoveries, 1);
    assert!(frames.contains(&frame("Error", "Cannot divide by zero")));
    assert_eq!(frames.last(), Some(&frame("0", "")));
    assert_eq!(session.calculator().state(), &CalculatorState::default());
}

#[tokio::test(start_paused = true)]
async fn keys_during_error_display_do_not_delay_recovery() {
    let (mut writer, reader) = tokio::io::duplex(64);
    let task = tokio::spawn(async move {
        let mut session = recording_session(false);
        let stats = session.run(BufReader::new(reader)).await?;
        anyhow::Ok((session, stats))
    });

    writer.write_all(b"9/0=\n").await.expect("write keys");
    sleep(Duration::from_millis(1500)).await;
    writer.write_all(b"5\n").await.expect("write keys");
    sleep(Duration::from_millis(600)).await;
    drop(writer);

    let (session, stats) = task.await.expect("task joins").expect("session runs");

    assert_eq!(stats.recoveries, 1);
    assert_eq!(stats.intents, 5);
    assert_eq!(session.calculator().state(), &CalculatorState::default());
}

#[tokio::test(start_paused = true)]
async fn wait_recovery_holds_session_open_until_reset() {
    let mut session = recording_session(true);

    let stats = session
        .run(&b"1/0=\n"[..])
        .await
        .expect("session runs");

    assert_eq!(stats.recoveries, 1);
    assert!(!session.calculator().is_showing_error());
}

#[tokio::test(start_paused = true)]
async fn session_ends_with_error_shown_without_wait_recovery() {
    let mut session = recording_session(false);

    let stats = session
        .run(&b"1/0=\n"[..])
        .await
        .expect("session runs");

    assert_eq!(stats.recoveries, 0);
    assert!(session.calculator().is_showing_error());
}

#[tokio::test(start_paused = true)]
async fn configured_delay_is_honoured() {
    let config = EngineConfig {
        recovery_delay_ms: 300,
        ..EngineConfig::default()
    };
    let calculator = Calculator::with_config(config, RecordingDisplay::new()).expect("valid");
    let mut session = Session::new(calculator, true);
    let started = tokio::time::Instant::now();

    session
        .run(&b"4/0=\n"[..])
        .await
        .expect("session runs");

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(300), "waited {elapsed:?}");
    assert!(elapsed < Duration::from_millis(2000), "waited {elapsed:?}");
    assert!(!session.calculator().is_showing_error());
}

#[tokio::test]
async fn terminal_display_prints_each_frame() {
    let calculator = Calculator::new(TerminalDisplay::new(Vec::new(), 12));
    let mut session = Session::new(calculator, false);

    session
        .run(&b"6*7=\n"[..])
        .await
        .expect("session runs");

    let bytes = session
        .into_calculator()
        .into_display()
        .finish()
        .expect("no write error");
    let output = String::from_utf8(bytes).expect("utf-8 output");

    assert!(output.starts_with("            \n           0\n"));
    assert!(output.ends_with("  6 × 7 = 42\n          42\n"));
}
