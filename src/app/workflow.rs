//! The workflow state machine.
//!
//! [update] takes the current [WorkflowContext] by value, applies one [Event] for the current
//! [Screen] and hands back the next context together with the [Effect]s the caller has to run.
//! Listing goes through the supplied [DirLister]; nothing here touches the filesystem directly.

use crate::app::nav::NavState;
use crate::app::state::{Effect, Event, Input, Screen, Transition, WorkflowContext};
use crate::core::{ActionKind, ActionRequest, DirLister, ListingError, Outcome};

use std::mem;

/// Message recorded when execution is reached with an empty selection.
pub const NO_SELECTION_MESSAGE: &str = "No files selected.";

/// Applies one event to the context.
pub fn update(ctx: WorkflowContext, event: Event, lister: &dyn DirLister) -> Transition {
    match event {
        Event::Input(input) => on_input(ctx, input, lister),
        Event::Executed(outcome) => on_executed(ctx, outcome),
        Event::ExitTimer => on_exit_timer(ctx),
    }
}

fn on_input(ctx: WorkflowContext, input: Input, lister: &dyn DirLister) -> Transition {
    if ctx.screen.is_terminal() {
        return Transition::with(ctx, Effect::Exit);
    }
    if input == Input::Quit {
        tracing::info!(screen = ?ctx.screen, "quit requested");
        return Transition::with(ctx, Effect::Exit);
    }

    match ctx.screen {
        Screen::ChooseAction => choose_action(ctx, input, lister),
        Screen::ChooseSources => choose_sources(ctx, input, lister),
        Screen::ChooseDestination => choose_destination(ctx, input, lister),
        Screen::ConfirmRemoval => confirm_removal(ctx, input),
        // Input while the executor runs is dropped
        Screen::Executing | Screen::ShowResult => Transition::stay(ctx),
    }
}

fn choose_action(mut ctx: WorkflowContext, input: Input, lister: &dyn DirLister) -> Transition {
    let last = ActionKind::ALL.len() - 1;
    match input {
        Input::Up => {
            ctx.action_cursor = ctx.action_cursor.saturating_sub(1);
            Transition::stay(ctx)
        }
        Input::Down => {
            ctx.action_cursor = (ctx.action_cursor + 1).min(last);
            Transition::stay(ctx)
        }
        Input::Open | Input::Confirm => {
            let action = ctx.highlighted_action();
            match NavState::open(&ctx.start_dir, lister) {
                Ok(nav) => {
                    tracing::info!(%action, dir = %nav.current_dir().display(), "action chosen");
                    ctx.action = Some(action);
                    ctx.source_nav = Some(nav);
                    ctx.screen = Screen::ChooseSources;
                    Transition::stay(ctx)
                }
                Err(err) => listing_failed(ctx, err),
            }
        }
        _ => Transition::stay(ctx),
    }
}

fn choose_sources(mut ctx: WorkflowContext, input: Input, lister: &dyn DirLister) -> Transition {
    let Some(nav) = ctx.source_nav.take() else {
        return Transition::stay(ctx);
    };

    match input {
        Input::Toggle => {
            if let Some(path) = nav.selected_path() {
                tracing::debug!(path = %path.display(), "toggled selection");
                ctx.selection = mem::take(&mut ctx.selection).toggle(path);
            }
            ctx.source_nav = Some(nav);
            Transition::stay(ctx)
        }
        Input::Advance => {
            ctx.source_nav = Some(nav);
            if ctx.action == Some(ActionKind::Remove) {
                ctx.screen = Screen::ConfirmRemoval;
                return Transition::stay(ctx);
            }
            // The destination picker always starts over from the start directory
            match NavState::open(&ctx.start_dir, lister) {
                Ok(dest) => {
                    ctx.dest_nav = Some(dest);
                    ctx.screen = Screen::ChooseDestination;
                    Transition::stay(ctx)
                }
                Err(err) => listing_failed(ctx, err),
            }
        }
        _ => match step_nav(nav, input, lister) {
            Ok(nav) => {
                ctx.source_nav = Some(nav);
                Transition::stay(ctx)
            }
            Err(err) => listing_failed(ctx, err),
        },
    }
}

fn choose_destination(
    mut ctx: WorkflowContext,
    input: Input,
    lister: &dyn DirLister,
) -> Transition {
    let Some(nav) = ctx.dest_nav.take() else {
        return Transition::stay(ctx);
    };

    match input {
        Input::Advance => {
            ctx.destination = Some(nav.current_dir().to_path_buf());
            ctx.dest_nav = Some(nav);
            begin_execution(ctx)
        }
        _ => match step_nav(nav, input, lister) {
            Ok(nav) => {
                ctx.dest_nav = Some(nav);
                Transition::stay(ctx)
            }
            Err(err) => listing_failed(ctx, err),
        },
    }
}

fn confirm_removal(ctx: WorkflowContext, input: Input) -> Transition {
    match input {
        Input::Confirm => begin_execution(ctx),
        Input::Back => {
            tracing::info!("removal cancelled");
            Transition::with(ctx, Effect::Exit)
        }
        _ => Transition::stay(ctx),
    }
}

/// Cursor movement and directory traversal shared by both pickers. Other inputs leave the
/// picker as it is.
fn step_nav(nav: NavState, input: Input, lister: &dyn DirLister) -> Result<NavState, ListingError> {
    match input {
        Input::Up => Ok(nav.move_cursor(-1)),
        Input::Down => Ok(nav.move_cursor(1)),
        Input::Open => nav.open_selected(lister),
        Input::Back => nav.ascend(lister),
        _ => Ok(nav),
    }
}

fn begin_execution(mut ctx: WorkflowContext) -> Transition {
    let sources = ctx.selection.selected_paths();
    if sources.is_empty() {
        tracing::info!("nothing selected, skipping execution");
        return show_result(ctx, Outcome::failure(NO_SELECTION_MESSAGE));
    }
    let Some(action) = ctx.action else {
        return show_result(ctx, Outcome::failure("No action chosen."));
    };

    let request = ActionRequest {
        action,
        sources,
        destination: ctx.destination.clone(),
    };
    tracing::info!(%action, count = request.sources.len(), "executing");
    ctx.screen = Screen::Executing;
    Transition::with(ctx, Effect::Execute(request))
}

fn on_executed(ctx: WorkflowContext, outcome: Outcome) -> Transition {
    if ctx.screen != Screen::Executing {
        tracing::warn!(screen = ?ctx.screen, "execution result outside of Executing, ignored");
        return Transition::stay(ctx);
    }
    if outcome.succeeded {
        tracing::info!("operation succeeded");
    } else {
        tracing::warn!(message = %outcome.message, "operation failed");
    }
    show_result(ctx, outcome)
}

fn on_exit_timer(ctx: WorkflowContext) -> Transition {
    if ctx.screen.is_terminal() {
        Transition::with(ctx, Effect::Exit)
    } else {
        Transition::stay(ctx)
    }
}

fn listing_failed(ctx: WorkflowContext, err: ListingError) -> Transition {
    tracing::error!(error = %err, "directory listing failed");
    show_result(ctx, Outcome::failure(err.to_string()))
}

fn show_result(mut ctx: WorkflowContext, outcome: Outcome) -> Transition {
    let delay = ctx.result_delay;
    ctx.outcome = Some(outcome);
    ctx.screen = Screen::ShowResult;
    Transition::with(ctx, Effect::ScheduleExit(delay))
}
