use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use spendview_core::util::format_currency;

use super::{ACCENT_COLOR, MUTED_COLOR, TEXT_COLOR};
use crate::app::App;

/// Utilization above this percentage is shown as a warning.
const HIGH_UTILIZATION_PERCENT: f64 = 30.0;

fn severity_color(severity: u8) -> Color {
    match severity {
        0 => MUTED_COLOR,
        1 => Color::Yellow,
        _ => Color::Red,
    }
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.logic.state();
    let label = Style::default().fg(MUTED_COLOR);
    let value = Style::default().fg(TEXT_COLOR).add_modifier(Modifier::BOLD);

    let mut figures = vec![Span::raw(" ")];
    if let Some(statement) = &state.statement {
        let card = &statement.card;
        figures.push(Span::styled(
            card.name.clone(),
            Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
        ));
        if !card.last_four.is_empty() {
            figures.push(Span::styled(format!(" \u{2022}\u{2022}{}", card.last_four), label));
        }
        figures.push(Span::raw("   "));
    }

    figures.push(Span::styled("Total spend ", label));
    figures.push(Span::styled(format_currency(state.total_amount), value));

    let utilization_color = if state.utilization > HIGH_UTILIZATION_PERCENT {
        Color::Yellow
    } else {
        TEXT_COLOR
    };
    figures.push(Span::styled("   Utilization ", label));
    figures.push(Span::styled(
        format!("{:.0}%", state.utilization),
        value.fg(utilization_color),
    ));

    if let Some(summary) = &state.account_summary {
        figures.push(Span::styled("   Due ", label));
        figures.push(Span::styled(format_currency(summary.total_due), value));
        if let Some(date) = summary.payment_due_date {
            figures.push(Span::styled(format!(" by {}", date.format("%b %-d")), label));
        }
    }

    let notice_line = match state.current_notice() {
        Some(notice) => Line::from(vec![
            Span::styled(
                format!(
                    " [{}/{}] ",
                    state.current_notice_index + 1,
                    state.notices_in_tabs.len()
                ),
                label,
            ),
            Span::styled(
                format!("{}: ", notice.title),
                Style::default()
                    .fg(severity_color(notice.severity))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(notice.message.clone(), Style::default().fg(TEXT_COLOR)),
        ]),
        None => Line::default(),
    };

    frame.render_widget(Paragraph::new(vec![Line::from(figures), notice_line]), area);
}
