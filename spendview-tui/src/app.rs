use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use spendview_core::{HomeEvent, Logic};

use crate::{
    config::Config,
    log_buffer::LogBuffer,
    ui::{chart, logs::LogsState},
};

/// Which panel/mode the UI is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPanel {
    Home,
    Import,
    Logs,
}

pub struct App {
    pub logic: Logic,
    pub config: Config,

    pub focused_panel: FocusedPanel,
    pub should_quit: bool,
    pub needs_redraw: bool,

    // Per-view state
    pub import_path: String,
    pub sheet_scroll: usize,
    pub logs: LogsState,

    last_notice_rotation: Instant,
    notice_rotation: Duration,
}

impl App {
    pub fn new(config: Config, logic: Logic, log_buffer: LogBuffer) -> Self {
        let notice_rotation =
            Duration::try_from_secs_f64(config.general.notice_rotation_secs.max(0.0))
                .unwrap_or(Duration::from_secs(5));
        Self {
            logic,
            config,

            focused_panel: FocusedPanel::Home,
            should_quit: false,
            needs_redraw: true,

            import_path: String::new(),
            sheet_scroll: 0,
            logs: LogsState::new(log_buffer),

            last_notice_rotation: Instant::now(),
            notice_rotation,
        }
    }

    pub fn tick(&mut self) {
        if !self.notice_rotation.is_zero()
            && self.last_notice_rotation.elapsed() >= self.notice_rotation
        {
            self.logic.rotate_notice();
            self.last_notice_rotation = Instant::now();
            self.needs_redraw = true;
        }

        // The import panel closes itself once an upload has finished.
        if self.focused_panel == FocusedPanel::Import && !self.logic.state().show_importing {
            self.focused_panel = FocusedPanel::Home;
            self.needs_redraw = true;
        }

        // Log entries arrive asynchronously.
        if self.focused_panel == FocusedPanel::Logs {
            self.needs_redraw = true;
        }
    }

    pub fn toggle_logs(&mut self) {
        if self.focused_panel == FocusedPanel::Logs {
            self.focused_panel = FocusedPanel::Home;
        } else {
            self.focused_panel = FocusedPanel::Logs;
            self.logs.scroll_to_end();
        }
    }

    pub fn open_import(&mut self) {
        self.import_path.clear();
        self.logic.dispatch(HomeEvent::ImportRequested);
        self.focused_panel = FocusedPanel::Import;
    }

    pub fn close_import(&mut self) {
        if self.logic.state().show_importing {
            self.logic.dispatch(HomeEvent::ImportCancelled);
        }
        self.focused_panel = FocusedPanel::Home;
    }

    /// Handles a left click at column `x` of the chart block.
    ///
    /// Only the home panel shows the sheet a selection opens, so clicks made
    /// while another panel is focused are ignored.
    pub fn click_chart(&mut self, chart_area: Rect, x: u16) -> bool {
        if self.focused_panel != FocusedPanel::Home {
            return false;
        }
        chart::handle_mouse_click(self, chart_area, x);
        self.sheet_scroll = 0;
        true
    }

    /// Opens the sheet for the selection and resets its scroll.
    pub fn dispatch_sheet(&mut self, event: HomeEvent) {
        self.logic.dispatch(event);
        self.sheet_scroll = 0;
    }
}
