//! Application layer for ferry.
//!
//! - [state]: screens, inputs, effects and the [WorkflowContext]
//! - [workflow]: the [update] function driving the screens
//! - [nav]: directory picker state ([NavState])
//! - [selection]: marked entries ([SelectionSet])
//! - [session]: owns the context and performs effects ([Session])
//! - [keymap]: key events to inputs ([Keymap])
//! - [view]: display model for the renderer ([View])

pub mod keymap;
pub mod nav;
pub mod selection;
pub mod session;
pub mod state;
pub mod view;
pub mod workflow;

pub use keymap::Keymap;
pub use nav::NavState;
pub use selection::SelectionSet;
pub use session::Session;
pub use state::{Effect, Event, Input, Screen, Transition, WorkflowContext};
pub use view::{ResultView, Row, View};
pub use workflow::{NO_SELECTION_MESSAGE, update};
