//! Display model for ferry.
//!
//! [View::from_context] flattens a [WorkflowContext] into exactly what the renderer needs, so
//! drawing never consults the workflow itself.

use crate::app::state::{Screen, WorkflowContext};
use crate::core::ActionKind;

use std::path::PathBuf;
use std::time::Duration;

/// One line of a directory picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub is_dir: bool,
    pub size: Option<u64>,
    pub cursor_here: bool,
    pub selected: bool,
}

/// The result screen's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub succeeded: bool,
    pub message: String,
    pub exit_in: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub screen: Screen,
    pub title: String,
    pub action: Option<ActionKind>,
    /// Current directory of the active picker.
    pub path: Option<PathBuf>,
    pub rows: Vec<Row>,
    /// Index into [ActionKind::ALL] on the action picker.
    pub action_cursor: usize,
    pub selected_count: usize,
    /// What a confirmed removal would delete.
    pub pending_removal: Vec<PathBuf>,
    pub result: Option<ResultView>,
}

impl View {
    pub fn from_context(ctx: &WorkflowContext) -> Self {
        let screen = ctx.screen();
        let rows = ctx
            .active_nav()
            .map(|nav| {
                let marks = screen == Screen::ChooseSources;
                nav.entries()
                    .iter()
                    .enumerate()
                    .map(|(idx, entry)| Row {
                        name: entry.name_str().into_owned(),
                        is_dir: entry.is_dir(),
                        size: entry.size(),
                        cursor_here: idx == nav.selected_idx(),
                        selected: marks
                            && ctx
                                .selection()
                                .is_selected(&nav.current_dir().join(entry.name())),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let pending_removal = if screen == Screen::ConfirmRemoval {
            ctx.selection().selected_paths()
        } else {
            Vec::new()
        };

        let result = ctx
            .outcome()
            .filter(|_| screen == Screen::ShowResult)
            .map(|o| ResultView {
                succeeded: o.succeeded,
                message: o.message.clone(),
                exit_in: ctx.result_delay(),
            });

        Self {
            screen,
            title: title_for(screen, ctx.action()),
            action: ctx.action(),
            path: ctx.active_nav().map(|nav| nav.current_dir().to_path_buf()),
            rows,
            action_cursor: ctx.action_cursor(),
            selected_count: ctx.selection().selected_count(),
            pending_removal,
            result,
        }
    }
}

fn title_for(screen: Screen, action: Option<ActionKind>) -> String {
    let verb = action.map(ActionKind::label).unwrap_or("");
    match screen {
        Screen::ChooseAction => "Choose Action".into(),
        Screen::ChooseSources => format!("{verb}: choose files"),
        Screen::ChooseDestination => format!("{verb}: choose destination"),
        Screen::ConfirmRemoval => "Confirm removal".into(),
        Screen::Executing => format!("{verb}: working..."),
        Screen::ShowResult => "Result".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Event, Input};
    use crate::app::workflow::update;
    use crate::core::{DirLister, FileEntry, ListingError, Outcome};

    use std::path::Path;

    struct Flat;

    impl DirLister for Flat {
        fn list(&self, _path: &Path) -> Result<Vec<FileEntry>, ListingError> {
            Ok(vec![FileEntry::file("a", 10), FileEntry::dir("d")])
        }
    }

    fn drive(inputs: &[Input]) -> WorkflowContext {
        let mut ctx = WorkflowContext::new("/v");
        for &input in inputs {
            ctx = update(ctx, Event::Input(input), &Flat).ctx;
        }
        ctx
    }

    #[test]
    fn action_picker() {
        let view = View::from_context(&drive(&[Input::Down]));
        assert_eq!(view.screen, Screen::ChooseAction);
        assert_eq!(view.title, "Choose Action");
        assert_eq!(view.action_cursor, 1);
        assert!(view.rows.is_empty());
        assert!(view.path.is_none());
    }

    #[test]
    fn source_rows_show_cursor_and_marks() {
        let view = View::from_context(&drive(&[Input::Open, Input::Toggle, Input::Down]));
        assert_eq!(view.title, "Copy: choose files");
        assert_eq!(view.path.as_deref(), Some(Path::new("/v")));
        assert_eq!(
            view.rows,
            vec![
                Row {
                    name: "a".into(),
                    is_dir: false,
                    size: Some(10),
                    cursor_here: false,
                    selected: true,
                },
                Row {
                    name: "d".into(),
                    is_dir: true,
                    size: None,
                    cursor_here: true,
                    selected: false,
                },
            ]
        );
        assert_eq!(view.selected_count, 1);
    }

    #[test]
    fn destination_rows_never_marked() {
        let view = View::from_context(&drive(&[Input::Open, Input::Toggle, Input::Advance]));
        assert_eq!(view.screen, Screen::ChooseDestination);
        assert!(view.rows.iter().all(|r| !r.selected));
    }

    #[test]
    fn confirm_lists_pending_removal() {
        let view = View::from_context(&drive(&[
            Input::Down,
            Input::Down,
            Input::Open,
            Input::Toggle,
            Input::Advance,
        ]));
        assert_eq!(view.screen, Screen::ConfirmRemoval);
        assert_eq!(view.pending_removal, vec![PathBuf::from("/v/a")]);
    }

    #[test]
    fn result_view() {
        let mut ctx = drive(&[Input::Open, Input::Toggle, Input::Advance, Input::Advance]);
        ctx = update(ctx, Event::Executed(Outcome::failure("boom")), &Flat).ctx;
        let view = View::from_context(&ctx);
        assert_eq!(
            view.result,
            Some(ResultView {
                succeeded: false,
                message: "boom".into(),
                exit_in: Duration::from_secs(2),
            })
        );
    }
}
