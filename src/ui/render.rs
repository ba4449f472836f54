//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop. It draws a [View]
//! and the display/theme config, without owning any workflow logic.

use crate::app::{Screen, View};
use crate::config::Config;
use crate::ui::{
    panes::{self, PaneContext, PaneStyles},
    widgets,
};
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Renders one frame of the ferry UI.
pub fn render(frame: &mut Frame, view: &View, config: &Config) {
    let theme = config.theme();
    let display = config.display();

    let [header, body, footer] = layout_chunks(frame.area());

    render_header(frame, header, view, config);
    widgets::draw_footer(frame, footer, view.screen, theme.accent_style());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(format!(" {} ", view.title));

    let pane = |block: Block<'static>| PaneContext {
        area: body,
        block,
        styles: PaneStyles {
            item: Style::default(),
            dir: theme.directory_style(),
            selection: theme.selection_style(),
            marker: theme.marker_style(),
        },
        highlight_symbol: display.selection_icon(),
        marker_icon: display.marker_icon(),
        show_dir_marker: display.dir_marker(),
        show_size: display.show_size(),
    };

    match view.screen {
        Screen::ChooseAction => panes::draw_actions(frame, view.action_cursor, pane(block)),
        Screen::ChooseSources | Screen::ChooseDestination => {
            panes::draw_entries(frame, &view.rows, pane(block))
        }
        Screen::ConfirmRemoval => {
            frame.render_widget(block, body);
            widgets::draw_confirm_popup(frame, body, &view.pending_removal, theme);
        }
        Screen::Executing => {
            frame.render_widget(block, body);
            let label = view.action.map(|a| a.label()).unwrap_or("Working");
            widgets::draw_message(frame, body, &format!("{label}..."), theme.accent_style());
        }
        Screen::ShowResult => match &view.result {
            Some(result) => widgets::draw_result(frame, body, result, theme),
            None => frame.render_widget(block, body),
        },
    }
}

/// Splits the screen into header line, body and footer line.
pub fn layout_chunks(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area)
}

/// Path of the active picker on the left, the selection count on the right.
fn render_header(frame: &mut Frame, area: Rect, view: &View, config: &Config) {
    let theme = config.theme();
    let path_str = view
        .path
        .as_ref()
        .map(shorten_home_path)
        .unwrap_or_else(|| "ferry".to_string());

    let status = if view.selected_count > 0 && view.screen == Screen::ChooseSources {
        format!("Selected: {} ", view.selected_count)
    } else {
        String::new()
    };

    let [left, right] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(status.width() as u16),
        ])
        .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(path_str, theme.path_style()),
        ])),
        left,
    );

    if !status.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(status, theme.marker_style())))
                .alignment(ratatui::layout::Alignment::Right),
            right,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_cover_area() {
        let [header, body, footer] = layout_chunks(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 1);
        assert_eq!(footer.height, 1);
        assert_eq!(body.height, 22);
        assert_eq!(footer.y, 23);
    }
}
