use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ── Main vertical layout ────────────────────────────────────────────────────

pub const SUMMARY_HEIGHT: u16 = 2;
/// Border (2) + two rows of bar.
pub const CHART_HEIGHT: u16 = 4;
pub const LEGEND_HEIGHT: u16 = 1;
pub const CONTENT_MIN_HEIGHT: u16 = 3;
pub const HELP_BAR_HEIGHT: u16 = 1;

pub struct MainLayout {
    pub summary: Rect,
    pub chart: Rect,
    pub legend: Rect,
    pub content: Rect,
    pub help_bar: Rect,
}

pub fn split_main(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SUMMARY_HEIGHT),
            Constraint::Length(CHART_HEIGHT),
            Constraint::Length(LEGEND_HEIGHT),
            Constraint::Min(CONTENT_MIN_HEIGHT),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);
    MainLayout {
        summary: chunks[0],
        chart: chunks[1],
        legend: chunks[2],
        content: chunks[3],
        help_bar: chunks[4],
    }
}

// ── Chart ───────────────────────────────────────────────────────────────────

pub const CHART_MARGIN: u16 = 1;

/// The area the bar is plotted in: the chart block minus its border and margin.
pub fn chart_plot_area(chart: Rect) -> Rect {
    let inset = 1 + CHART_MARGIN;
    Rect::new(
        chart.x + inset,
        chart.y + 1,
        chart.width.saturating_sub(inset * 2),
        chart.height.saturating_sub(2),
    )
}

// ── Popups ──────────────────────────────────────────────────────────────────

pub const ERROR_POPUP_MAX_WIDTH: u16 = 60;
pub const ERROR_POPUP_HEIGHT: u16 = 5;

/// A rectangle of at most `width` x `height`, centred in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

// ── Scrolling ───────────────────────────────────────────────────────────────

pub const PAGE_SCROLL_SIZE: usize = 10;
pub const SCROLL_WHEEL_STEPS: usize = 3;

// ── Logs ────────────────────────────────────────────────────────────────────

pub const LOG_TARGET_WIDTH: usize = 20;
pub const LOG_TARGET_SUFFIX_LEN: usize = 17;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_area_is_inside_chart() {
        let main = split_main(Rect::new(0, 0, 80, 24));
        assert_eq!(main.chart.height, CHART_HEIGHT);
        let plot = chart_plot_area(main.chart);
        assert_eq!(plot, Rect::new(2, main.chart.y + 1, 76, 2));
    }

    #[test]
    fn test_plot_area_of_tiny_chart() {
        let plot = chart_plot_area(Rect::new(0, 0, 3, 1));
        assert_eq!(plot.width, 0);
        assert_eq!(plot.height, 0);
    }

    #[test]
    fn test_centered() {
        assert_eq!(
            centered(Rect::new(0, 0, 80, 24), 60, 5),
            Rect::new(10, 9, 60, 5)
        );
        assert_eq!(centered(Rect::new(0, 0, 20, 4), 60, 5), Rect::new(0, 0, 20, 4));
    }
}
