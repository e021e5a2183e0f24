//! Toast notification widget
//!
//! Short-lived messages about loads: a failure, a restored connection, a
//! refused selection change.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => " i Info ",
            Self::Success => " + Success ",
            Self::Error => " x Error ",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    expires_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, now: Instant) -> Self {
        let ttl = match kind {
            NotificationKind::Error => Duration::from_secs(6),
            _ => Duration::from_secs(3),
        };
        Self {
            message: message.into(),
            kind,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Pending notifications, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationKind::Info, Instant::now()));
    }

    /// Remove notifications expired at `now`
    pub fn remove_expired(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired(now));
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    /// Top-right corner of `area`, sized for the message
    pub fn area(&self, area: Rect) -> Rect {
        let width = (self.notification.message.chars().count() as u16 + 4)
            .clamp(20, 50)
            .min(area.width);
        let height = 4.min(area.height);
        Rect::new(
            area.x + area.width.saturating_sub(width + 1),
            area.y + 1,
            width,
            height,
        )
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(self.notification.kind.title())
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let now = Instant::now();
        let n = Notification::new("Connection restored", NotificationKind::Success, now);
        assert!(!n.is_expired(now));
        assert!(n.is_expired(now + Duration::from_secs(3)));

        let e = Notification::new("boom", NotificationKind::Error, now);
        assert!(!e.is_expired(now + Duration::from_secs(3)));
    }

    #[test]
    fn test_queue() {
        let mut queue = NotificationQueue::default();
        assert!(queue.is_empty());

        queue.info("First");
        queue.push(Notification::new("Second", NotificationKind::Error, Instant::now()));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "First");

        queue.remove_expired(Instant::now() + Duration::from_secs(4));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().kind, NotificationKind::Error);
    }

    #[test]
    fn test_area_fits_inside() {
        let n = Notification::new("x", NotificationKind::Info, Instant::now());
        let area = NotificationWidget::new(&n).area(Rect::new(0, 0, 80, 24));
        assert_eq!(area.width, 20);
        assert_eq!(area.x, 59);
    }
}
