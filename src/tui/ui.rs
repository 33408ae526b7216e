//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::{App, ConfirmAction, Mode, VisibleNode};
use crate::editor::Button;

const PLACEHOLDER: &str = "Enter node name";

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Buttons
            Constraint::Min(1),    // Tree view
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_input(app, frame, chunks[1]);
    render_buttons(app, frame, chunks[2]);
    render_tree_area(app, frame, chunks[3]);
    render_footer(app, frame, chunks[4]);

    // Render overlays based on mode
    match app.mode {
        Mode::Confirm(action) => render_confirm_dialog(app, frame, action),
        Mode::Help => render_help_overlay(frame),
        Mode::Normal => {}
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let count = app.editor.tree().len();
    let selection = match app.editor.selected_node() {
        Some(node) if app.editor.is_editing() => format!("Editing '{}'", node.title),
        Some(node) => format!("Selected '{}'", node.title),
        None => "No selection".to_string(),
    };
    let header_text = format!(
        " {} {}  │  {}",
        count,
        if count == 1 { "node" } else { "nodes" },
        selection
    );

    let block = Block::default()
        .title(" Menu Builder ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(header_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let (title, border) = if app.editor.is_editing() {
        (" New name ", Color::Yellow)
    } else {
        (" Node name ", Color::Gray)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let draft = app.editor.draft();
    let inner_width = area.width.saturating_sub(2) as usize;
    let char_count = draft.chars().count();
    let skip = input_scroll(char_count, inner_width);

    let paragraph = if draft.is_empty() {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        let visible: String = draft.chars().skip(skip).collect();
        Paragraph::new(visible).style(Style::default().fg(Color::White))
    };

    frame.render_widget(paragraph.block(block), area);

    if app.mode == Mode::Normal {
        let offset = (char_count - skip) as u16;
        frame.set_cursor_position(Position::new(area.x + 1 + offset, area.y + 1));
    }
}

/// Characters to hide on the left so the end of the draft and the cursor
/// cell after it fit in `inner_width` columns.
fn input_scroll(char_count: usize, inner_width: usize) -> usize {
    char_count.saturating_sub(inner_width.saturating_sub(1))
}

/// Key chord shown next to each button.
fn button_chord(button: Button) -> &'static str {
    match button {
        Button::AddCategory => "^A",
        Button::AddSubcategory => "^N",
        Button::EditNode => "^E",
        Button::DeleteNode => "^D",
        Button::SaveEdit => "^S",
    }
}

fn button_color(button: Button) -> Color {
    match button {
        Button::AddCategory => Color::Blue,
        Button::AddSubcategory | Button::SaveEdit => Color::Green,
        Button::EditNode => Color::Yellow,
        Button::DeleteNode => Color::Red,
    }
}

fn render_buttons(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for button in app.editor.buttons() {
        spans.push(Span::styled(
            format!("[{}]", button_chord(*button)),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            format!(" {}", button.label()),
            Style::default().fg(button_color(*button)).bold(),
        ));
        spans.push(Span::raw("   "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tree_area(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if app.visible_nodes.is_empty() {
        let paragraph = Paragraph::new("No categories yet")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));

        frame.render_widget(paragraph, area);
        return;
    }

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let visible_height = inner_area.height as usize;
    let scroll_offset =
        calculate_scroll_offset(app.cursor, visible_height, app.visible_nodes.len());
    let selected_row = app.selected_row();

    for (i, row) in app
        .visible_nodes
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .enumerate()
    {
        let index = scroll_offset + i;
        let area = Rect::new(inner_area.x, inner_area.y + i as u16, inner_area.width, 1);
        let state = RowState {
            is_cursor: index == app.cursor,
            is_selected: selected_row == Some(index),
            show_key: app.config.show_keys,
        };
        frame.render_widget(Paragraph::new(row_line(row, area.width, state)), area);
    }
}

fn calculate_scroll_offset(cursor: usize, visible_height: usize, total: usize) -> usize {
    if total <= visible_height {
        return 0;
    }

    let padding = 3.min(visible_height / 4);

    if cursor < padding {
        0
    } else {
        cursor
            .saturating_sub(padding)
            .min(total - visible_height)
    }
}

#[derive(Debug, Clone, Copy)]
struct RowState {
    is_cursor: bool,
    is_selected: bool,
    show_key: bool,
}

fn row_line(row: &VisibleNode, width: u16, state: RowState) -> Line<'static> {
    let indent = "  ".repeat(row.depth);

    let icon = match (row.has_children, row.is_expanded) {
        (true, true) => "▼ ",
        (true, false) => "► ",
        (false, _) => "  ",
    };

    let key_suffix = if state.show_key {
        format!(" ({})", row.key)
    } else {
        String::new()
    };

    // Use chars().count() for display width, not byte length
    let prefix_len = indent.chars().count() + icon.chars().count();
    let title_width = (width as usize).saturating_sub(prefix_len + key_suffix.chars().count());

    let title_char_count = row.title.chars().count();
    let display_title = if title_char_count > title_width && title_width > 1 {
        let truncated: String = row.title.chars().take(title_width - 1).collect();
        format!("{}…", truncated)
    } else {
        row.title.clone()
    };

    let title_style = if state.is_selected {
        Style::default().fg(Color::Cyan).bold()
    } else if row.depth == 0 {
        Style::default().fg(Color::White).bold()
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(format!("{}{}", indent, icon), Style::default().fg(Color::Gray)),
        Span::styled(display_title, title_style),
    ];
    if !key_suffix.is_empty() {
        spans.push(Span::styled(key_suffix, Style::default().fg(Color::DarkGray)));
    }

    let mut line = Line::from(spans);
    if state.is_cursor {
        line = line.style(Style::default().bg(Color::DarkGray));
    }
    line
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::Normal => "[↑↓] Move  [Enter] Select  [Esc] Deselect  [←→] Fold  [F1] Help  [^Q] Quit",
        Mode::Confirm(_) => "[y] Yes  [n] No",
        Mode::Help => "[Esc] Close",
    };

    // Show status message if present, otherwise hints
    let text = app.status_message.as_deref().unwrap_or(hints);

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_confirm_dialog(app: &App, frame: &mut Frame, action: ConfirmAction) {
    let area = frame.area();

    // Center the dialog
    let dialog_width = 50u16.min(area.width.saturating_sub(4));
    let dialog_height = 7u16.min(area.height);
    let dialog_area = Rect {
        x: (area.width.saturating_sub(dialog_width)) / 2,
        y: (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let (title, message) = match action {
        ConfirmAction::Delete => {
            let node = app.editor.selected_node();
            let name = node
                .map(|n| {
                    if n.title.chars().count() > 30 {
                        let head: String = n.title.chars().take(29).collect();
                        format!("{}…", head)
                    } else {
                        n.title.clone()
                    }
                })
                .unwrap_or_default();
            let nested = node.map(|n| n.subtree_len() - 1).unwrap_or(0);
            let detail = match nested {
                0 => "It has no subcategories.".to_string(),
                1 => "Its 1 subcategory goes with it.".to_string(),
                n => format!("Its {} nested nodes go with it.", n),
            };
            (
                " Delete ",
                format!("Delete '{}'?\n{}\n\n[y]es  [n]o", name, detail),
            )
        }
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let paragraph = Paragraph::new(message)
        .block(block)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, dialog_area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let help_width = 60u16.min(area.width.saturating_sub(8));
    let help_height = 22u16.min(area.height.saturating_sub(4));
    let help_area = Rect {
        x: (area.width.saturating_sub(help_width)) / 2,
        y: (area.height.saturating_sub(help_height)) / 2,
        width: help_width,
        height: help_height,
    };

    frame.render_widget(Clear, help_area);

    let help_text = r#"
 EDITING
 ─────────────────────────────────
 type       Enter a node name
 Ctrl+A     Add category (nothing selected)
 Ctrl+N     Add subcategory under selection
 Ctrl+E     Edit selected node
 Ctrl+S     Save edit
 Ctrl+D     Delete selected node

 TREE
 ─────────────────────────────────
 ↑/↓        Move cursor
 Home/End   Go to top / bottom
 Enter      Select / deselect row
 Esc        Clear selection
 →/←        Expand / collapse

 F1         Toggle this help
 Ctrl+Q     Quit
"#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, help_area);
}
