//! Session driver for ferry.
//!
//! A [Session] owns the [WorkflowContext], the [DirLister] and the [Executor]. It feeds events
//! through [update] and performs the resulting effects. Execution is split from dispatch so the
//! runtime can draw the executing screen before the blocking call: [Session::dispatch] parks
//! the request and [Session::run_pending] performs it.

use crate::app::state::{Effect, Event, Input, Screen, Transition, WorkflowContext};
use crate::app::workflow::update;
use crate::core::{ActionRequest, DirLister, Executor};

use std::mem;
use std::time::Duration;

pub struct Session<L: DirLister, E: Executor> {
    ctx: WorkflowContext,
    lister: L,
    executor: E,
    pending: Option<ActionRequest>,
    exit_timer: Option<Duration>,
    finished: bool,
}

impl<L: DirLister, E: Executor> Session<L, E> {
    pub fn new(ctx: WorkflowContext, lister: L, executor: E) -> Self {
        Self {
            ctx,
            lister,
            executor,
            pending: None,
            exit_timer: None,
            finished: false,
        }
    }

    // Getters / accessors

    #[inline]
    pub fn context(&self) -> &WorkflowContext {
        &self.ctx
    }

    #[inline]
    pub fn screen(&self) -> Screen {
        self.ctx.screen()
    }

    #[inline]
    pub fn executor(&self) -> &E {
        &self.executor
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Hands out the exit delay requested by the workflow, once.
    pub fn take_exit_timer(&mut self) -> Option<Duration> {
        self.exit_timer.take()
    }

    /// Applies one event and records its effects. Events after the session ended are dropped.
    pub fn dispatch(&mut self, event: Event) {
        if self.finished {
            return;
        }
        let Transition { ctx, effects } = update(mem::take(&mut self.ctx), event, &self.lister);
        self.ctx = ctx;

        for effect in effects {
            match effect {
                Effect::Execute(request) => self.pending = Some(request),
                Effect::ScheduleExit(delay) => self.exit_timer = Some(delay),
                Effect::Exit => {
                    tracing::info!(screen = ?self.ctx.screen(), "session finished");
                    self.finished = true;
                }
            }
        }
    }

    /// Runs the parked request, if any, and feeds its outcome back. Returns whether something ran.
    pub fn run_pending(&mut self) -> bool {
        let Some(request) = self.pending.take() else {
            return false;
        };
        let outcome = self.executor.run(&request);
        self.dispatch(Event::Executed(outcome));
        true
    }

    /// Dispatches an input and runs any execution it triggers.
    pub fn handle_input(&mut self, input: Input) {
        self.dispatch(Event::Input(input));
        self.run_pending();
    }
}
