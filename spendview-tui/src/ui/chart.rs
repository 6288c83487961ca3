//! The stacked spending bar and its legend of small categories.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use spendview_core::{
    aggregate,
    locate::{self, LinearScale, PointerEvent},
    spendview_state::{Category, CategoryColor},
    util,
};
use unicode_width::UnicodeWidthStr as _;

use super::{ACCENT_COLOR, MUTED_COLOR, TEXT_COLOR, layout};
use crate::app::App;

/// The pointer event for a click on terminal column `x`, aimed at the middle of the cell.
pub fn pointer_event(plot: Rect, x: u16) -> PointerEvent {
    PointerEvent {
        offset_x: x as f64 + 0.5,
        plot_origin: plot.x as f64,
        plot_width: plot.width as f64,
    }
}

/// For each column of a plot `width` cells wide, the index of the category drawn there.
///
/// Columns are resolved the same way clicks are, so a click always selects
/// the category drawn under it.
pub fn column_owners(categories: &[Category], width: u16) -> Vec<Option<usize>> {
    let plot = Rect::new(0, 0, width, 1);
    let scale = LinearScale::new(aggregate::total(categories), width as f64);
    (0..width)
        .map(|x| {
            locate::locate(categories, &pointer_event(plot, x), |offset| {
                scale.value_at(offset)
            })
            .selected()
        })
        .collect()
}

/// A run of adjacent columns drawn for the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub owner: Option<usize>,
    pub start: u16,
    pub width: u16,
}

pub fn segments(owners: &[Option<usize>]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = vec![];
    for (column, owner) in owners.iter().enumerate() {
        match segments.last_mut() {
            Some(last) if last.owner == *owner => last.width += 1,
            _ => segments.push(Segment {
                owner: *owner,
                start: column as u16,
                width: 1,
            }),
        }
    }
    segments
}

pub fn category_color(color: CategoryColor) -> Color {
    let alpha = color.alpha.clamp(0.0, 1.0);
    let scale = |channel: u8| (channel as f32 * alpha).round() as u8;
    Color::Rgb(scale(color.r), scale(color.g), scale(color.b))
}

/// Black or white, whichever reads better on `color`.
fn label_color(color: CategoryColor) -> Color {
    let luma = 0.299 * color.r as f32 + 0.587 * color.g as f32 + 0.114 * color.b as f32;
    if luma * color.alpha > 150.0 {
        Color::Black
    } else {
        Color::White
    }
}

/// The inline label for a segment, or `None` if it doesn't fit.
fn inline_label(category: &Category, share: f64, width: u16) -> Option<String> {
    let width = width as usize;
    let with_share = format!("{} {}", category.name, util::format_share(share));
    [with_share, category.name.clone()]
        .into_iter()
        .find(|label| label.width() + 2 <= width && label.width() == label.chars().count())
}

fn centered_in(text: &str, width: u16) -> String {
    let width = width as usize;
    let pad = width.saturating_sub(text.width());
    let left = pad / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Spending ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED_COLOR));
    frame.render_widget(block, area);

    let plot = layout::chart_plot_area(area);
    if plot.width == 0 || plot.height == 0 {
        return;
    }

    let state = app.logic.state();
    let categories = &state.categories;
    let aggregate = app.logic.aggregate();
    if aggregate.total == 0.0 {
        let empty = Paragraph::new("No spending this period")
            .style(Style::default().fg(MUTED_COLOR));
        frame.render_widget(empty, plot);
        return;
    }

    let owners = column_owners(categories, plot.width);
    let segments = segments(&owners);
    let selected = state.selected_category.as_ref();

    let mut rows: Vec<Line> = Vec::with_capacity(plot.height as usize);
    for row in 0..plot.height {
        let is_label_row = row == 0;
        let is_last_row = row + 1 == plot.height && plot.height > 1;

        let spans: Vec<Span> = segments
            .iter()
            .map(|segment| {
                let Some(category) = segment.owner.and_then(|index| categories.get(index)) else {
                    return Span::styled(
                        "\u{2591}".repeat(segment.width as usize),
                        Style::default().fg(MUTED_COLOR),
                    );
                };

                let is_selected = selected == Some(&category.id);
                let mut style = Style::default()
                    .bg(category_color(category.color))
                    .fg(label_color(category.color));

                let label = if is_label_row && !aggregate.is_small(&category.id) {
                    let share = aggregate.share_of(&category.id).unwrap_or_default();
                    inline_label(category, share, segment.width)
                } else {
                    None
                };

                match label {
                    Some(label) => {
                        if is_selected {
                            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                        }
                        Span::styled(centered_in(&label, segment.width), style)
                    }
                    None if is_selected && is_last_row => Span::styled(
                        "\u{2581}".repeat(segment.width as usize),
                        style.fg(TEXT_COLOR),
                    ),
                    None => Span::styled(" ".repeat(segment.width as usize), style),
                }
            })
            .collect();
        rows.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(rows), plot);
}

/// Lists the categories too small to carry an inline label.
pub fn draw_legend(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.logic.state();
    let aggregate = app.logic.aggregate();

    let mut spans = vec![Span::raw(" ")];
    for id in &aggregate.small_categories {
        let Some(category) = state.categories.iter().find(|c| &c.id == id) else {
            continue;
        };
        let share = aggregate.share_of(id).unwrap_or_default();
        let mut name_style = Style::default().fg(TEXT_COLOR);
        if state.selected_category.as_ref() == Some(id) {
            name_style = name_style.fg(ACCENT_COLOR).add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(
            "\u{25CF} ",
            Style::default().fg(category_color(category.color)),
        ));
        spans.push(Span::styled(category.name.clone(), name_style));
        spans.push(Span::styled(
            format!(" {}  ", util::format_share(share)),
            Style::default().fg(MUTED_COLOR),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Selects the category under a click at column `x` of the chart block.
pub fn handle_mouse_click(app: &mut App, chart_area: Rect, x: u16) {
    let plot = layout::chart_plot_area(chart_area);
    if !app.logic.select_on_bar(&pointer_event(plot, x)) {
        tracing::debug!("click at column {x} selected nothing");
    }
}
