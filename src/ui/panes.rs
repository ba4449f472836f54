//! Pane drawing for ferry.
//!
//! Draws the directory listing of the active picker and the action list. Row layout, cursor
//! highlighting, markers and directory coloring are handled here.
//!
//! Used internally by ui::render

use crate::app::Row;
use crate::core::{ActionKind, fit_to_width, format_file_size};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Styles used for rendering items in a pane
pub struct PaneStyles {
    pub item: Style,
    pub dir: Style,
    pub selection: Style,
    pub marker: Style,
}

impl PaneStyles {
    pub fn get_style(&self, is_dir: bool, is_selected: bool) -> Style {
        let mut style = if is_dir && self.dir.fg != Some(Color::Reset) {
            self.dir
        } else {
            self.item
        };

        if is_selected {
            if let Some(bg) = self.selection.bg
                && bg != Color::Reset
            {
                style = style.bg(bg);
            }

            if let Some(fg) = self.selection.fg
                && fg != Color::Reset
            {
                style = style.fg(fg);
            }
        }
        style
    }
}

/// Context data for pane rendering functions
pub struct PaneContext<'a> {
    pub area: Rect,
    pub block: Block<'a>,
    pub styles: PaneStyles,
    pub highlight_symbol: &'a str,
    pub marker_icon: &'a str,
    pub show_dir_marker: bool,
    pub show_size: bool,
}

/// Draws the listing of the active picker.
pub fn draw_entries(frame: &mut Frame, rows: &[Row], context: PaneContext) {
    if rows.is_empty() {
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled("[Empty]", context.styles.item),
        ]);
        frame.render_widget(Paragraph::new(line).block(context.block), context.area);
        return;
    }

    let inner_width = context.block.inner(context.area).width as usize;
    let row_width = inner_width.saturating_sub(context.highlight_symbol.width());

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| make_entry_row(row, row_width, &context))
        .collect();

    let mut state = ListState::default();
    state.select(rows.iter().position(|r| r.cursor_here));

    frame.render_stateful_widget(
        List::new(items)
            .block(context.block)
            .highlight_style(Style::default())
            .highlight_symbol(context.highlight_symbol)
            .scroll_padding(2),
        context.area,
        &mut state,
    );
}

/// Draws the fixed action list of the first screen.
pub fn draw_actions(frame: &mut Frame, cursor: usize, context: PaneContext) {
    let items: Vec<ListItem> = ActionKind::ALL
        .iter()
        .enumerate()
        .map(|(idx, action)| {
            let style = context.styles.get_style(false, idx == cursor);
            ListItem::new(Line::from(vec![
                Span::raw(" "),
                Span::raw(action.label()),
            ]))
            .style(style)
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(cursor.min(ActionKind::ALL.len() - 1)));

    frame.render_stateful_widget(
        List::new(items)
            .block(context.block)
            .highlight_style(Style::default())
            .highlight_symbol(context.highlight_symbol),
        context.area,
        &mut state,
    );
}

/// One listing row: marker column, name, and the size right-aligned.
fn make_entry_row<'a>(row: &Row, width: usize, context: &PaneContext) -> ListItem<'a> {
    let style = context.styles.get_style(row.is_dir, row.cursor_here);

    let marker_width = context.marker_icon.width().max(1);
    let marker = if row.selected {
        Span::styled(
            format!("{:<marker_width$}", context.marker_icon),
            context.styles.marker.bg(style.bg.unwrap_or_default()),
        )
    } else {
        Span::raw(" ".repeat(marker_width))
    };

    let size = if context.show_size && !row.is_dir {
        format_file_size(row.size, row.is_dir)
    } else {
        String::new()
    };

    let mut name = row.name.clone();
    if row.is_dir && context.show_dir_marker {
        name.push('/');
    }

    // marker, a space before the name, and a space before the size
    let reserved = marker_width + 1 + if size.is_empty() { 0 } else { size.width() + 1 };
    let name_width = width.saturating_sub(reserved);
    let name = fit_to_width(&name, name_width);
    let gap = name_width.saturating_sub(name.width()) + 1;

    let mut spans = Vec::with_capacity(4);
    spans.push(marker);
    spans.push(Span::raw(" "));
    spans.push(Span::raw(name));
    if !size.is_empty() {
        spans.push(Span::raw(" ".repeat(gap)));
        spans.push(Span::raw(size));
    }

    ListItem::new(Line::from(spans)).style(style)
}
