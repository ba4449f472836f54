//! Widgets for ferry: the removal popup, the result box and the footer hints.

use crate::app::{ResultView, Screen};
use crate::config::Theme;
use crate::core::format_countdown;
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::path::PathBuf;

/// Key hints shown in the footer for each screen.
pub fn footer_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::ChooseAction => "↑/↓ move  enter choose  q quit",
        Screen::ChooseSources => {
            "↑/↓ move  →/enter open  ←/backspace up  space select  tab proceed  q quit"
        }
        Screen::ChooseDestination => "↑/↓ move  →/enter open  ←/backspace up  tab confirm  q quit",
        Screen::ConfirmRemoval => "enter/y remove  backspace/q cancel",
        Screen::Executing => "working...",
        Screen::ShowResult => "any key quits",
    }
}

pub fn draw_footer(frame: &mut Frame, area: Rect, screen: Screen, style: Style) {
    let para = Paragraph::new(Line::from(Span::styled(footer_hints(screen), style)))
        .block(Block::default().padding(ratatui::widgets::Padding::horizontal(1)));
    frame.render_widget(para, area);
}

/// Rect centered in `area`, `percent_x` wide and `percent_y` high.
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_chunks[1])[1]
}

/// Popup listing what a confirmed removal deletes.
pub fn draw_confirm_popup(frame: &mut Frame, area: Rect, pending: &[PathBuf], theme: &Theme) {
    let popup_area = centered_rect(area, 60, 50);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Confirm Remove ")
        .borders(Borders::ALL)
        .border_style(theme.error_style());

    let mut lines = Vec::with_capacity(pending.len() + 3);
    if pending.is_empty() {
        lines.push(Line::from("Nothing is selected."));
    } else {
        lines.push(Line::from(format!(
            "Remove {} item{}?",
            pending.len(),
            if pending.len() == 1 { "" } else { "s" }
        )));
        lines.push(Line::from(""));
        for path in pending {
            lines.push(Line::from(Span::styled(
                shorten_home_path(path),
                theme.path_style(),
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Press enter to confirm removal, or q to cancel."));

    let text = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(text, popup_area);
}

/// The result screen: status, captured output and the countdown.
pub fn draw_result(frame: &mut Frame, area: Rect, result: &ResultView, theme: &Theme) {
    let (status, style) = if result.succeeded {
        ("Success!", theme.success_style())
    } else {
        ("Error", theme.error_style())
    };

    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(style);

    let mut lines = vec![Line::from(Span::styled(status, style)), Line::from("")];
    lines.extend(result.message.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Exiting in {}...",
        format_countdown(result.exit_in)
    )));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

pub fn draw_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let popup_area = centered_rect(area, 60, 20);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text.to_string(), style)))
            .alignment(Alignment::Center),
        popup_area,
    );
}
