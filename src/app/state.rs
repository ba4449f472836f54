//! Workflow state for ferry.
//!
//! This module defines the [WorkflowContext], the single aggregate a session owns: the current
//! [Screen], the chosen action, both pickers, the selection, the destination and the outcome.
//! It also defines what flows in ([Event], [Input]) and out ([Effect]) of
//! [update](crate::app::workflow::update).

use crate::app::nav::NavState;
use crate::app::selection::SelectionSet;
use crate::core::{ActionKind, ActionRequest, Outcome};
use crate::utils::DEFAULT_RESULT_DELAY_MS;

use std::path::{Path, PathBuf};
use std::time::Duration;

/// One interactive mode of the workflow.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    ChooseAction,
    ChooseSources,
    ChooseDestination,
    ConfirmRemoval,
    Executing,
    ShowResult,
}

impl Screen {
    pub fn is_terminal(self) -> bool {
        self == Screen::ShowResult
    }
}

/// Abstract user inputs. Key bindings are resolved by the keymap before reaching the workflow.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    Up,
    Down,
    /// Enter a directory, or pick the highlighted action.
    Open,
    Back,
    Toggle,
    Advance,
    /// Confirm a dangerous action (removal).
    Confirm,
    Quit,
}

/// Everything the workflow reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Input(Input),
    /// The executor finished the requested operation.
    Executed(Outcome),
    /// The result screen delay elapsed.
    ExitTimer,
}

impl From<Input> for Event {
    fn from(input: Input) -> Self {
        Event::Input(input)
    }
}

/// Follow-up work requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Run the operation once and report back with [Event::Executed].
    Execute(ActionRequest),
    /// Arm the one-shot exit timer.
    ScheduleExit(Duration),
    /// End the session.
    Exit,
}

/// Result of applying one event.
#[derive(Debug)]
pub struct Transition {
    pub ctx: WorkflowContext,
    pub effects: Vec<Effect>,
}

impl Transition {
    pub fn stay(ctx: WorkflowContext) -> Self {
        Self {
            ctx,
            effects: Vec::new(),
        }
    }

    pub fn with(ctx: WorkflowContext, effect: Effect) -> Self {
        Self {
            ctx,
            effects: vec![effect],
        }
    }
}

/// The whole state of one session.
///
/// Created at startup, moved through every transition, discarded at exit.
#[derive(Debug, Clone, Default)]
pub struct WorkflowContext {
    pub(crate) screen: Screen,
    pub(crate) action: Option<ActionKind>,
    pub(crate) action_cursor: usize,
    pub(crate) start_dir: PathBuf,
    pub(crate) source_nav: Option<NavState>,
    pub(crate) dest_nav: Option<NavState>,
    pub(crate) selection: SelectionSet,
    pub(crate) destination: Option<PathBuf>,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) result_delay: Duration,
}

impl WorkflowContext {
    /// A fresh session on the action picker. Both pickers will start in `start_dir`.
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
            result_delay: Duration::from_millis(DEFAULT_RESULT_DELAY_MS),
            ..Self::default()
        }
    }

    pub fn with_result_delay(mut self, delay: Duration) -> Self {
        self.result_delay = delay;
        self
    }

    // Getters / accessors

    #[inline]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[inline]
    pub fn action(&self) -> Option<ActionKind> {
        self.action
    }

    #[inline]
    pub fn action_cursor(&self) -> usize {
        self.action_cursor
    }

    #[inline]
    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    #[inline]
    pub fn source_nav(&self) -> Option<&NavState> {
        self.source_nav.as_ref()
    }

    #[inline]
    pub fn dest_nav(&self) -> Option<&NavState> {
        self.dest_nav.as_ref()
    }

    #[inline]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    #[inline]
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    #[inline]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[inline]
    pub fn result_delay(&self) -> Duration {
        self.result_delay
    }

    /// The picker of the current screen, if it browses a directory.
    pub fn active_nav(&self) -> Option<&NavState> {
        match self.screen {
            Screen::ChooseSources => self.source_nav.as_ref(),
            Screen::ChooseDestination => self.dest_nav.as_ref(),
            _ => None,
        }
    }

    /// The action currently highlighted on the action picker.
    pub fn highlighted_action(&self) -> ActionKind {
        ActionKind::ALL[self.action_cursor.min(ActionKind::ALL.len() - 1)]
    }
}
