//! Transient UI chrome state: sidebar, request-in-flight counter, and the
//! notification list.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Severity of a user-visible notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// One toast entry. Ids are monotonic within the session so dismissal is
/// unambiguous even for identical messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Application-wide UI flags.
///
/// `in_flight` is a counter rather than a flag: several requests may be
/// outstanding at once and each one must balance its begin with exactly one
/// end, whatever the outcome.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub sidebar_collapsed: bool,
    in_flight: u32,
    notifications: Vec<Notification>,
    next_notice_id: u64,
}

impl AppState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn begin_request(&mut self) {
        self.in_flight += 1;
    }

    pub fn end_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notifications.push(Notification { id, level, message: message.into() });
        id
    }

    pub fn notify_error(&mut self, message: impl Into<String>) -> u64 {
        self.notify(NoticeLevel::Error, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notifications.retain(|n| n.id != id);
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }
}
