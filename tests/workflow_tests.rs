//! Workflow tests for ferry
//!
//! These tests drive a whole session through the library: real directory listings in temporary
//! directories, inputs fed one by one, and a recording executor standing in for the file
//! operations (plus one run against the real `cp`).

use ferry::app::{Event, Input, NO_SELECTION_MESSAGE, Screen, Session, WorkflowContext};
use ferry::core::{
    ActionKind, ActionRequest, CommandExecutor, DirLister, Executor, FsLister, Outcome,
};
use ferry::utils::normalize_path;

use rand::rng;
use rand::seq::SliceRandom;
use std::error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::{TempDir, tempdir};

/// Executor double that records every request and answers with a fixed outcome.
struct RecordingExecutor {
    calls: Vec<ActionRequest>,
    answer: Outcome,
}

impl RecordingExecutor {
    fn new() -> Self {
        Self {
            calls: Vec::new(),
            answer: Outcome::success(""),
        }
    }
}

impl Executor for RecordingExecutor {
    fn run(&mut self, request: &ActionRequest) -> Outcome {
        self.calls.push(request.clone());
        self.answer.clone()
    }
}

type TestSession = Session<FsLister, RecordingExecutor>;

/// Workspace: `a.txt`, `b.txt`, `docs/` (holding `readme.md`) and an empty `out/`.
fn workspace() -> Result<TempDir, Box<dyn error::Error>> {
    let dir = tempdir()?;
    let mut files = vec!["a.txt", "b.txt"];
    files.shuffle(&mut rng());
    for name in files {
        fs::write(dir.path().join(name), name)?;
    }
    fs::create_dir(dir.path().join("docs"))?;
    fs::write(dir.path().join("docs").join("readme.md"), "hi")?;
    fs::create_dir(dir.path().join("out"))?;
    Ok(dir)
}

fn session_in(dir: &Path) -> TestSession {
    let ctx = WorkflowContext::new(dir).with_result_delay(Duration::from_millis(10));
    Session::new(ctx, FsLister, RecordingExecutor::new())
}

fn press(session: &mut TestSession, inputs: &[Input]) {
    for &input in inputs {
        session.handle_input(input);
    }
}

/// Picks `action` on the first screen.
fn choose(session: &mut TestSession, action: ActionKind) {
    let idx = ActionKind::ALL
        .iter()
        .position(|a| *a == action)
        .unwrap_or_default();
    for _ in 0..idx {
        session.handle_input(Input::Down);
    }
    session.handle_input(Input::Open);
}

/// Moves the cursor of the active picker onto `name`.
fn cursor_to(session: &mut TestSession, name: &str) {
    for _ in 0..64 {
        let nav = session
            .context()
            .active_nav()
            .expect("a picker is active");
        if nav.selected_entry().is_some_and(|e| e.name() == name) {
            return;
        }
        session.handle_input(Input::Down);
    }
    panic!("entry {name} not found");
}

#[test]
fn copy_end_to_end() -> Result<(), Box<dyn error::Error>> {
    let dir = workspace()?;
    let root = normalize_path(dir.path());
    let mut session = session_in(dir.path());

    choose(&mut session, ActionKind::Copy);
    assert_eq!(session.screen(), Screen::ChooseSources);

    cursor_to(&mut session, "a.txt");
    press(&mut session, &[Input::Toggle, Input::Advance]);
    assert_eq!(session.screen(), Screen::ChooseDestination);

    cursor_to(&mut session, "out");
    press(&mut session, &[Input::Open, Input::Advance]);

    assert_eq!(session.screen(), Screen::ShowResult);
    assert_eq!(
        session.executor().calls,
        vec![ActionRequest {
            action: ActionKind::Copy,
            sources: vec![root.join("a.txt")],
            destination: Some(root.join("out")),
        }]
    );
    assert!(session.context().outcome().is_some_and(|o| o.succeeded));
    assert_eq!(session.take_exit_timer(), Some(Duration::from_millis(10)));

    session.dispatch(Event::ExitTimer);
    assert!(session.is_finished());
    Ok(())
}

#[test]
fn copy_with_real_cp() -> Result<(), Box<dyn error::Error>> {
    if which::which("cp").is_err() {
        return Ok(());
    }
    let dir = workspace()?;
    let ctx = WorkflowContext::new(dir.path());
    let mut session = Session::new(ctx, FsLister, CommandExecutor::default());

    session.handle_input(Input::Open);
    // sorted listing: a.txt, b.txt, docs, out
    for input in [
        Input::Down,
        Input::Toggle,
        Input::Advance,
        Input::Down,
        Input::Down,
        Input::Down,
        Input::Open,
        Input::Advance,
    ] {
        session.handle_input(input);
    }

    assert_eq!(session.screen(), Screen::ShowResult);
    let outcome = session.context().outcome().cloned().expect("outcome");
    assert!(outcome.succeeded, "{}", outcome.message);
    assert_eq!(fs::read_to_string(dir.path().join("out").join("b.txt"))?, "b.txt");
    assert!(dir.path().join("b.txt").exists());
    Ok(())
}

#[test]
fn remove_then_quit_never_executes() -> Result<(), Box<dyn error::Error>> {
    let dir = workspace()?;
    let mut session = session_in(dir.path());

    choose(&mut session, ActionKind::Remove);
    cursor_to(&mut session, "b.txt");
    press(&mut session, &[Input::Toggle, Input::Advance]);
    assert_eq!(session.screen(), Screen::ConfirmRemoval);

    press(&mut session, &[Input::Quit]);
    assert!(session.is_finished());
    assert!(session.executor().calls.is_empty());
    assert!(dir.path().join("b.txt").exists());
    Ok(())
}

#[test]
fn remove_confirmed_executes_once() -> Result<(), Box<dyn error::Error>> {
    let dir = workspace()?;
    let root = normalize_path(dir.path());
    let mut session = session_in(dir.path());

    choose(&mut session, ActionKind::Remove);
    cursor_to(&mut session, "docs");
    press(&mut session, &[Input::Toggle, Input::Advance, Input::Confirm]);

    assert_eq!(session.screen(), Screen::ShowResult);
    assert_eq!(session.executor().calls.len(), 1);
    assert_eq!(session.executor().calls[0].sources, vec![root.join("docs")]);
    assert_eq!(session.executor().calls[0].destination, None);
    Ok(())
}

#[test]
fn quit_from_every_screen() -> Result<(), Box<dyn error::Error>> {
    let dir = workspace()?;

    // (action, inputs reaching the screen, expected screen)
    let cases: Vec<(ActionKind, Vec<Input>, Screen)> = vec![
        (ActionKind::Copy, vec![], Screen::ChooseAction),
        (ActionKind::Copy, vec![Input::Open], Screen::ChooseSources),
        (
            ActionKind::Copy,
            vec![Input::Open, Input::Toggle, Input::Advance],
            Screen::ChooseDestination,
        ),
        (
            ActionKind::Remove,
            vec![Input::Down, Input::Down, Input::Open, Input::Toggle, Input::Advance],
            Screen::ConfirmRemoval,
        ),
    ];

    for (action, inputs, screen) in cases {
        let mut session = session_in(dir.path());
        press(&mut session, &inputs);
        assert_eq!(session.screen(), screen, "{action} {inputs:?}");

        session.handle_input(Input::Quit);
        assert!(session.is_finished(), "quit on {screen:?}");
        assert!(session.executor().calls.is_empty());
        assert_ne!(session.screen(), Screen::Executing);
    }
    Ok(())
}

#[test]
fn no_selection_skips_executor() -> Result<(), Box<dyn error::Error>> {
    let dir = workspace()?;

    // Copy: straight through both pickers
    let mut session = session_in(dir.path());
    press(&mut session, &[Input::Open, Input::Advance, Input::Advance]);
    assert_eq!(session.screen(), Screen::ShowResult);
    assert!(session.executor().calls.is_empty());
    let outcome = session.context().outcome().expect("outcome");
    assert!(!outcome.succeeded);
    assert_eq!(outcome.message, NO_SELECTION_MESSAGE);

    // Remove: selection cleared again before confirming
    let mut session = session_in(dir.path());
    choose(&mut session, ActionKind::Remove);
    press(
        &mut session,
        &[Input::Toggle, Input::Toggle, Input::Advance, Input::Confirm],
    );
    assert_eq!(session.screen(), Screen::ShowResult);
    assert!(session.executor().calls.is_empty());
    Ok(())
}

#[test]
fn selection_persists_across_navigation() -> Result<(), Box<dyn error::Error>> {
    let dir = workspace()?;
    let root = normalize_path(dir.path());
    let mut session = session_in(dir.path());

    choose(&mut session, ActionKind::Move);
    cursor_to(&mut session, "a.txt");
    session.handle_input(Input::Toggle);

    cursor_to(&mut session, "docs");
    session.handle_input(Input::Open);
    cursor_to(&mut session, "readme.md");
    session.handle_input(Input::Toggle);
    session.handle_input(Input::Back);

    // Back into docs again, marks stay on their absolute paths
    cursor_to(&mut session, "docs");
    session.handle_input(Input::Open);
    assert_eq!(
        session.context().source_nav().map(|n| n.current_dir().to_path_buf()),
        Some(root.join("docs"))
    );

    let selection = session.context().selection();
    assert!(selection.is_selected(&root.join("a.txt")));
    assert!(selection.is_selected(&root.join("docs").join("readme.md")));
    assert_eq!(
        selection.selected_paths(),
        vec![root.join("a.txt"), root.join("docs").join("readme.md")]
    );
    Ok(())
}

#[test]
fn destination_starts_over_in_start_dir() -> Result<(), Box<dyn error::Error>> {
    let dir = workspace()?;
    let root = normalize_path(dir.path());
    let mut session = session_in(dir.path());

    choose(&mut session, ActionKind::Move);
    cursor_to(&mut session, "docs");
    press(&mut session, &[Input::Open, Input::Toggle, Input::Advance]);

    let ctx = session.context();
    assert_eq!(ctx.screen(), Screen::ChooseDestination);
    assert_eq!(
        ctx.source_nav().map(|n| n.current_dir().to_path_buf()),
        Some(root.join("docs"))
    );
    assert_eq!(
        ctx.dest_nav().map(|n| n.current_dir().to_path_buf()),
        Some(root.clone())
    );

    // Advancing right away uses the start directory itself
    session.handle_input(Input::Advance);
    assert_eq!(
        session.executor().calls[0].destination.as_deref(),
        Some(root.as_path())
    );
    Ok(())
}

#[test]
fn vanished_directory_ends_on_result() -> Result<(), Box<dyn error::Error>> {
    let dir = workspace()?;
    let mut session = session_in(dir.path());

    choose(&mut session, ActionKind::Copy);
    cursor_to(&mut session, "docs");
    fs::remove_dir_all(dir.path().join("docs"))?;
    session.handle_input(Input::Open);

    assert_eq!(session.screen(), Screen::ShowResult);
    let outcome = session.context().outcome().expect("outcome");
    assert!(!outcome.succeeded);
    assert!(outcome.message.contains("docs"), "{}", outcome.message);
    assert!(session.executor().calls.is_empty());
    Ok(())
}

#[test]
fn ascend_into_removed_parent_ends_on_result() -> Result<(), Box<dyn error::Error>> {
    let dir = workspace()?;
    let root = normalize_path(dir.path());
    let mut session = session_in(&root.join("docs"));

    choose(&mut session, ActionKind::Copy);
    session.handle_input(Input::Toggle);
    fs::rename(&root, root.with_extension("gone"))?;
    session.handle_input(Input::Back);

    assert_eq!(session.screen(), Screen::ShowResult);
    let outcome = session.context().outcome().expect("outcome");
    assert!(!outcome.succeeded);
    assert!(outcome.message.contains(&*root.to_string_lossy()), "{}", outcome.message);
    assert!(session.executor().calls.is_empty());

    fs::rename(root.with_extension("gone"), &root)?;
    Ok(())
}

#[test]
fn destination_listing_failure_ends_on_result() -> Result<(), Box<dyn error::Error>> {
    let dir = workspace()?;
    let root = normalize_path(dir.path());
    let mut session = session_in(&root);

    choose(&mut session, ActionKind::Move);
    cursor_to(&mut session, "a.txt");
    session.handle_input(Input::Toggle);
    fs::rename(&root, root.with_extension("gone"))?;
    session.handle_input(Input::Advance);

    assert_eq!(session.screen(), Screen::ShowResult);
    assert!(session.context().dest_nav().is_none());
    let outcome = session.context().outcome().expect("outcome");
    assert!(!outcome.succeeded);
    assert!(outcome.message.contains(&*root.to_string_lossy()), "{}", outcome.message);
    assert!(session.executor().calls.is_empty());

    fs::rename(root.with_extension("gone"), &root)?;
    Ok(())
}

#[test]
fn unusable_start_dir_ends_on_result() -> Result<(), Box<dyn error::Error>> {
    let dir = workspace()?;
    let root = normalize_path(dir.path());

    for start in [root.join("missing"), root.join("a.txt")] {
        let mut session = session_in(&start);
        assert_eq!(session.screen(), Screen::ChooseAction);

        session.handle_input(Input::Open);
        assert_eq!(session.screen(), Screen::ShowResult, "{}", start.display());
        let outcome = session.context().outcome().expect("outcome");
        assert!(!outcome.succeeded);
        assert!(outcome.message.contains(&*start.to_string_lossy()), "{}", outcome.message);
        assert!(session.executor().calls.is_empty());
        assert!(session.take_exit_timer().is_some());
    }
    Ok(())
}

#[test]
fn any_key_on_result_ends_session() -> Result<(), Box<dyn error::Error>> {
    let dir = workspace()?;
    let mut session = session_in(dir.path());
    press(&mut session, &[Input::Open, Input::Advance, Input::Advance]);
    assert_eq!(session.screen(), Screen::ShowResult);
    assert!(!session.is_finished());

    session.handle_input(Input::Toggle);
    assert!(session.is_finished());
    Ok(())
}

#[test]
fn fs_lister_snapshot_is_sorted() -> Result<(), Box<dyn error::Error>> {
    let dir = workspace()?;
    let names: Vec<PathBuf> = FsLister
        .list(dir.path())?
        .iter()
        .map(|e| PathBuf::from(e.name()))
        .collect();
    assert_eq!(
        names,
        ["a.txt", "b.txt", "docs", "out"]
            .iter()
            .map(PathBuf::from)
            .collect::<Vec<_>>()
    );
    Ok(())
}
