use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::{MUTED_COLOR, TEXT_COLOR, layout};
use crate::{keys::Action, log_buffer::LogBuffer};

pub struct LogsState {
    pub log_buffer: LogBuffer,
    pub scroll_offset: usize,
}

impl LogsState {
    pub fn new(log_buffer: LogBuffer) -> Self {
        Self {
            log_buffer,
            scroll_offset: 0,
        }
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_offset = self.log_buffer.len().saturating_sub(1);
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let last = self.log_buffer.len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta).min(last);
    }
}

pub enum LogsAction {
    Close,
}

fn level_style(level: tracing::Level) -> (&'static str, Color) {
    match level {
        tracing::Level::ERROR => ("ERR", Color::Red),
        tracing::Level::WARN => ("WRN", Color::Yellow),
        tracing::Level::INFO => ("INF", Color::Cyan),
        tracing::Level::DEBUG => ("DBG", Color::Green),
        tracing::Level::TRACE => ("TRC", MUTED_COLOR),
    }
}

pub fn draw(frame: &mut Frame, logs: &mut LogsState, area: Rect) {
    let entries = logs.log_buffer.entries();

    let block = Block::default()
        .title(format!(" Logs ({}) ", entries.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED_COLOR));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if entries.is_empty() {
        let empty = Paragraph::new("No log entries").style(Style::default().fg(MUTED_COLOR));
        frame.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let (level_str, level_color) = level_style(entry.level);

            let target = if entry.target.len() > layout::LOG_TARGET_WIDTH {
                let suffix_start = entry.target.len() - layout::LOG_TARGET_SUFFIX_LEN;
                format!("...{}", entry.target.get(suffix_start..).unwrap_or_default())
            } else {
                entry.target.clone()
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    level_str,
                    Style::default()
                        .fg(level_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("{target:width$}", width = layout::LOG_TARGET_WIDTH),
                    Style::default().fg(MUTED_COLOR),
                ),
                Span::raw(" "),
                Span::styled(entry.message.clone(), Style::default().fg(TEXT_COLOR)),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let offset = logs.scroll_offset.min(entries.len().saturating_sub(1));
    logs.scroll_offset = offset;

    let mut state = ListState::default();
    state.select(Some(offset));
    frame.render_stateful_widget(list, inner, &mut state);
}

pub fn handle_key(logs: &mut LogsState, action: Action) -> Option<LogsAction> {
    let page = layout::PAGE_SCROLL_SIZE as isize;
    match action {
        Action::Back => return Some(LogsAction::Close),
        Action::MoveUp => logs.scroll_by(-1),
        Action::MoveDown => logs.scroll_by(1),
        Action::PageUp => logs.scroll_by(-page),
        Action::PageDown => logs.scroll_by(page),
        Action::GotoTop => logs.scroll_offset = 0,
        Action::GotoBottom => logs.scroll_to_end(),
        _ => {}
    }
    None
}
