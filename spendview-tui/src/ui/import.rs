use std::path::PathBuf;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{MUTED_COLOR, TEXT_COLOR};
use crate::{app::App, keys::Action};

pub enum ImportAction {
    Close,
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Import statement ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::styled(&app.import_path, Style::default().fg(TEXT_COLOR)),
        Span::styled("\u{2588}", Style::default().fg(Color::Yellow)),
    ]));
    frame.render_widget(input, chunks[0]);

    let hint = Paragraph::new("Path to a statement PDF. Enter to upload, Esc to cancel.")
        .style(Style::default().fg(MUTED_COLOR));
    frame.render_widget(hint, chunks[1]);
}

pub fn handle_key(app: &mut App, action: Action) -> Option<ImportAction> {
    match action {
        Action::Back => return Some(ImportAction::Close),
        Action::Select => {
            let path = app.import_path.trim();
            if path.is_empty() {
                return None;
            }
            let path = PathBuf::from(path);
            app.logic.upload_statement(&path);
            app.import_path.clear();
            return Some(ImportAction::Close);
        }
        Action::Char(c) => app.import_path.push(c),
        Action::DeleteChar => {
            app.import_path.pop();
        }
        Action::ClearLine => app.import_path.clear(),
        _ => {}
    }
    None
}
