use std::time::Duration;
use xoltab::core::system_info::runner::CommandRunner;
use xoltab::CommandError;

#[test]
fn test_nonexistent_executable_is_absent() {
    let runner = CommandRunner::new(Duration::from_secs(1));
    assert!(runner.run("no-such-tool-for-xoltab", &["-s", "x"]).is_none());
}

#[test]
fn test_nonexistent_executable_cause() {
    let runner = CommandRunner::default();
    match runner.execute("no-such-tool-for-xoltab", &[]) {
        Err(CommandError::NotFound(program)) => assert_eq!(program, "no-such-tool-for-xoltab"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_stalled_command_respects_timeout() {
    let runner = CommandRunner::new(Duration::from_millis(300));
    let started = std::time::Instant::now();
    assert!(runner.run("sleep", &["10"]).is_none());
    assert!(started.elapsed() < Duration::from_secs(5));
}
