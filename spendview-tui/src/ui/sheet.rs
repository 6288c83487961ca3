//! The transaction sheet for the selected category, and the uploaded statements list.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use spendview_core::util::{format_currency, format_share};
use unicode_width::UnicodeWidthStr as _;

use super::{ACCENT_COLOR, MUTED_COLOR, TEXT_COLOR, chart::category_color, layout};
use crate::{app::App, keys::Action};

const DATE_WIDTH: usize = 8;
const AMOUNT_WIDTH: usize = 12;

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.logic.state().showing_transaction_sheet {
        draw_transactions(frame, app, area);
    } else {
        draw_statements(frame, app, area);
    }
}

fn draw_transactions(frame: &mut Frame, app: &mut App, area: Rect) {
    let state = app.logic.state();
    let aggregate = app.logic.aggregate();

    let (title, title_color) = match state.selected_category() {
        Some(category) if !state.is_viewing_total => {
            let share = aggregate
                .share_of(&category.id)
                .map(format_share)
                .unwrap_or_default();
            (
                format!(
                    " {} \u{2014} {} {share} ",
                    category.name,
                    format_currency(category.amount)
                ),
                category_color(category.color),
            )
        }
        _ => (
            format!(" All transactions \u{2014} {} ", format_currency(state.total_amount)),
            ACCENT_COLOR,
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let transactions = state.sheet_transactions();
    if transactions.is_empty() {
        let empty = Paragraph::new("No transactions").style(Style::default().fg(MUTED_COLOR));
        frame.render_widget(empty, inner);
        return;
    }

    let description_width = (inner.width as usize).saturating_sub(DATE_WIDTH + AMOUNT_WIDTH + 2);
    let items: Vec<ListItem> = transactions
        .iter()
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<DATE_WIDTH$}", t.date.format("%b %d").to_string()),
                    Style::default().fg(MUTED_COLOR),
                ),
                Span::raw(" "),
                Span::styled(
                    fit_to_width(&t.description, description_width),
                    Style::default().fg(TEXT_COLOR),
                ),
                Span::raw(" "),
                Span::styled(
                    format!("{:>AMOUNT_WIDTH$}", format_currency(t.amount)),
                    Style::default().fg(TEXT_COLOR).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let offset = app.sheet_scroll.min(items.len().saturating_sub(1));
    app.sheet_scroll = offset;

    let list = List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut list_state = ListState::default();
    list_state.select(Some(offset));
    frame.render_stateful_widget(list, inner, &mut list_state);
}

fn draw_statements(frame: &mut Frame, app: &App, area: Rect) {
    let files = &app.logic.state().file_details;

    let block = Block::default()
        .title(format!(" Statements ({}) ", files.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED_COLOR));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if files.is_empty() {
        let hint = Paragraph::new(
            "No statements uploaded. Press i to import a PDF, or click the bar to inspect a category.",
        )
        .style(Style::default().fg(MUTED_COLOR));
        frame.render_widget(hint, inner);
        return;
    }

    let items: Vec<ListItem> = files
        .iter()
        .map(|f| {
            let uploaded = f
                .uploaded_at
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::styled(f.name.clone(), Style::default().fg(TEXT_COLOR)),
                Span::styled(
                    format!("  {} KiB  {uploaded}", f.size_bytes.div_ceil(1024)),
                    Style::default().fg(MUTED_COLOR),
                ),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), inner);
}

/// Pads or truncates `text` to exactly `width` display columns.
fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return format!("{text}{}", " ".repeat(width - text.width()));
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    if width > 0 {
        out.push('\u{2026}');
        used += 1;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

pub fn handle_scroll(app: &mut App, action: Action) {
    let len = app.logic.state().sheet_transactions().len();
    let last = len.saturating_sub(1);
    app.sheet_scroll = match action {
        Action::MoveUp => app.sheet_scroll.saturating_sub(1),
        Action::MoveDown => (app.sheet_scroll + 1).min(last),
        Action::PageUp => app.sheet_scroll.saturating_sub(layout::PAGE_SCROLL_SIZE),
        Action::PageDown => (app.sheet_scroll + layout::PAGE_SCROLL_SIZE).min(last),
        Action::GotoTop => 0,
        Action::GotoBottom => last,
        _ => app.sheet_scroll,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("Cafe", 6), "Cafe  ");
        assert_eq!(fit_to_width("Midtown Auto Repair", 8), "Midtown\u{2026}");
        assert_eq!(fit_to_width("東京ラーメン", 5), "東京\u{2026}");
        assert_eq!(fit_to_width("abc", 0), "");
    }
}
