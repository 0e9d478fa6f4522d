use tracing::debug;

use crate::config::DEFAULT_NOTICE_TIMEOUT_MS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
    #[default]
    Neutral,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
            NoticeKind::Neutral => "",
        }
    }
}

/// Identifies one shown message. Only the latest ticket may clear the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub ticket: NoticeTicket,
}

impl Notice {
    pub fn class(&self) -> String {
        match self.kind {
            NoticeKind::Neutral => "message-area show".to_string(),
            kind => format!("message-area show {}", kind.as_str()),
        }
    }
}

pub const IDLE_CLASS: &str = "message-area";

/// Transient status message with a single pending clear.
///
/// Each [`Notifier::notify`] supersedes the previous message and its ticket,
/// so a clear scheduled for an older message is ignored by
/// [`Notifier::expire`].
#[derive(Debug, Clone)]
pub struct Notifier {
    current: Option<Notice>,
    issued: u64,
    timeout_ms: u32,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TIMEOUT_MS)
    }
}

impl Notifier {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            current: None,
            issued: 0,
            timeout_ms,
        }
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NoticeKind) -> NoticeTicket {
        self.issued += 1;
        let ticket = NoticeTicket(self.issued);
        let notice = Notice {
            message: message.into(),
            kind,
            ticket,
        };
        debug!(kind = kind.as_str(), message = %notice.message, "showing notice");
        self.current = Some(notice);
        ticket
    }

    /// Clears the region if `ticket` still owns it. Returns whether anything
    /// was cleared.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        match &self.current {
            Some(notice) if notice.ticket == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expire_clears_current_notice() {
        let mut notifier = Notifier::default();
        let ticket = notifier.notify("Task added successfully", NoticeKind::Success);

        let notice = notifier.current().expect("notice");
        assert_eq!(notice.class(), "message-area show success");
        assert!(notifier.expire(ticket));
        assert!(notifier.current().is_none());
        assert!(!notifier.expire(ticket));
    }

    #[test]
    fn stale_ticket_does_not_clear_newer_message() {
        let mut notifier = Notifier::new(3_000);
        let first = notifier.notify("first", NoticeKind::Info);
        let second = notifier.notify("second", NoticeKind::Error);

        assert_ne!(first, second);
        assert!(!notifier.expire(first));
        assert_eq!(notifier.current().map(|n| n.message.as_str()), Some("second"));
        assert!(notifier.expire(second));
    }

    #[test]
    fn neutral_kind_adds_no_style() {
        let mut notifier = Notifier::default();
        notifier.notify("Task is marked as active!", NoticeKind::default());
        assert_eq!(
            notifier.current().map(Notice::class).as_deref(),
            Some("message-area show")
        );
        assert_eq!(notifier.timeout_ms(), 3_000);
    }
}
