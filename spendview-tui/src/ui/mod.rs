pub(crate) mod chart;
pub(crate) mod import;
pub(crate) mod layout;
pub(crate) mod logs;
pub(crate) mod sheet;
pub(crate) mod summary;

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    app::{App, FocusedPanel},
    keys,
};

pub const TEXT_COLOR: Color = Color::Rgb(230, 230, 230);
pub const MUTED_COLOR: Color = Color::Rgb(128, 128, 140);
pub const ACCENT_COLOR: Color = Color::Rgb(120, 180, 255);

pub fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();
    let main = layout::split_main(size);

    summary::draw(frame, app, main.summary);
    chart::draw(frame, app, main.chart);
    chart::draw_legend(frame, app, main.legend);

    match app.focused_panel {
        FocusedPanel::Home => sheet::draw(frame, app, main.content),
        FocusedPanel::Import => import::draw(frame, app, main.content),
        FocusedPanel::Logs => logs::draw(frame, &mut app.logs, main.content),
    }

    draw_help_bar(frame, app, main.help_bar);

    if let Some(error) = &app.logic.state().error {
        let popup = layout::centered(
            size,
            layout::ERROR_POPUP_MAX_WIDTH,
            layout::ERROR_POPUP_HEIGHT,
        );
        frame.render_widget(Clear, popup);
        let body = Paragraph::new(error.display_message())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(TEXT_COLOR))
            .block(
                Block::default()
                    .title(format!(" {} ", error.display_name()))
                    .title_bottom(" esc to dismiss ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            );
        frame.render_widget(body, popup);
    }
}

fn draw_help_bar(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let help_actions: &[keys::Action] = match app.focused_panel {
        FocusedPanel::Home => keys::HOME_HELP,
        FocusedPanel::Import => keys::IMPORT_HELP,
        FocusedPanel::Logs => keys::LOGS_HELP,
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for action in help_actions {
        if let Some((key, label)) = action.help_label() {
            spans.push(Span::styled(
                key.to_string(),
                Style::default()
                    .fg(ACCENT_COLOR)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(":{label} "),
                Style::default().fg(MUTED_COLOR),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
