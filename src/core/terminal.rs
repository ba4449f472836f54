//! Terminal rendering and event loop for ferry.
//!
//! Handles setup/teardown of raw mode and the alternate screen, redraws, and routes key events
//! to the session. Key events come from a reader thread over a channel; the result screen's exit
//! timer is a second channel. The loop selects on both, so whichever fires first ends the session.

use crate::app::{Event as WorkflowEvent, Keymap, Session, View};
use crate::config::Config;
use crate::core::{DirLister, Executor};
use crate::ui;

use crossbeam_channel::{Receiver, Sender, after, never, select, unbounded};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::{io, thread, time::Instant};

/// Initializes the terminal in raw mode and alternate screen and runs the main event loop.
///
/// Blocks until the session ends. Returns an error if terminal setup or teardown fails.
pub fn run_terminal<L: DirLister, E: Executor>(
    session: &mut Session<L, E>,
    keymap: &Keymap,
    config: &Config,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let events = spawn_input_reader();
    let result = event_loop(&mut terminal, session, keymap, config, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// Reads terminal events on a dedicated thread. The thread ends once the receiver is dropped.
fn spawn_input_reader() -> Receiver<io::Result<TermEvent>> {
    let (tx, rx): (Sender<io::Result<TermEvent>>, _) = unbounded();
    thread::spawn(move || {
        loop {
            let ev = event::read();
            let failed = ev.is_err();
            if tx.send(ev).is_err() || failed {
                break;
            }
        }
    });
    rx
}

/// Main event loop: draws, waits for a key or the exit timer, dispatches.
fn event_loop<B, L, E>(
    terminal: &mut Terminal<B>,
    session: &mut Session<L, E>,
    keymap: &Keymap,
    config: &Config,
    events: &Receiver<io::Result<TermEvent>>,
) -> io::Result<()>
where
    B: Backend,
    io::Error: From<<B as Backend>::Error>,
    L: DirLister,
    E: Executor,
{
    let mut exit_timer: Receiver<Instant> = never();
    draw(terminal, session, config)?;

    while !session.is_finished() {
        select! {
            recv(events) -> msg => match msg {
                Ok(Ok(TermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    if let Some(input) = keymap.lookup(key, session.screen()) {
                        session.dispatch(WorkflowEvent::Input(input));
                    }
                }
                Ok(Ok(_)) => {}
                Ok(Err(e)) => return Err(e),
                Err(_) => {
                    tracing::warn!("input reader stopped");
                    break;
                }
            },
            recv(exit_timer) -> _ => {
                exit_timer = never();
                session.dispatch(WorkflowEvent::ExitTimer);
            }
        }

        // Show the executing screen before the blocking call
        if session.has_pending() {
            draw(terminal, session, config)?;
            session.run_pending();
        }

        if let Some(delay) = session.take_exit_timer() {
            exit_timer = after(delay);
        }

        if !session.is_finished() {
            draw(terminal, session, config)?;
        }
    }
    Ok(())
}

fn draw<B, L, E>(
    terminal: &mut Terminal<B>,
    session: &Session<L, E>,
    config: &Config,
) -> io::Result<()>
where
    B: Backend,
    io::Error: From<<B as Backend>::Error>,
    L: DirLister,
    E: Executor,
{
    let view = View::from_context(session.context());
    terminal.draw(|f| ui::render(f, &view, config))?;
    Ok(())
}
