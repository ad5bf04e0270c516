//! The history panel: a show/hide flag over the last history snapshot.

use crate::core::HistoryLog;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryPanel {
    visible: bool,
    log: HistoryLog,
}

impl HistoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Flip visibility and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn log(&self) -> &HistoryLog {
        &self.log
    }

    pub(crate) fn show_log(&mut self, log: HistoryLog) {
        self.log = log;
    }
}
