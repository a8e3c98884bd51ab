//! Action Message
//!
//! Single shared banner shown after complete/update/delete. A newer
//! message replaces the current one; only the newest timer may hide it.

/// How long the banner stays visible
pub const NOTICE_DURATION_MS: u32 = 2000;

const ACTIVE_CLASS: &str = "active";
const CONTAINER_CLASS: &str = "action-messages-container";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Completed,
    Updated,
    Deleted,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Completed => "completed-message",
            NoticeKind::Updated => "updated-message",
            NoticeKind::Deleted => "deleted-message",
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            NoticeKind::Completed => "Todo completed!",
            NoticeKind::Updated => "Todo updated!",
            NoticeKind::Deleted => "Todo deleted!",
        }
    }
}

/// Handle returned by `show`, redeemed by `expire`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    kind: Option<NoticeKind>,
    message: String,
    active: bool,
    generation: u64,
}

impl Notice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>) -> NoticeTicket {
        self.generation += 1;
        self.kind = Some(kind);
        self.message = message.into();
        self.active = true;
        NoticeTicket(self.generation)
    }

    /// Hide the banner if `ticket` is from the latest `show`.
    /// Returns whether anything changed.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        if ticket.0 != self.generation || !self.active {
            return false;
        }
        self.active = false;
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn kind(&self) -> Option<NoticeKind> {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn container_class(&self) -> String {
        let mut class = CONTAINER_CLASS.to_string();
        if let Some(kind) = self.kind {
            class.push(' ');
            class.push_str(kind.class());
        }
        if self.active {
            class.push(' ');
            class.push_str(ACTIVE_CLASS);
        }
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_stays_two_seconds() {
        assert_eq!(NOTICE_DURATION_MS, 2000);
    }

    #[test]
    fn test_show_then_expire() {
        let mut notice = Notice::new();
        assert_eq!(notice.container_class(), "action-messages-container");

        let ticket = notice.show(NoticeKind::Deleted, NoticeKind::Deleted.default_message());
        assert!(notice.is_active());
        assert_eq!(notice.message(), "Todo deleted!");
        assert_eq!(
            notice.container_class(),
            "action-messages-container deleted-message active"
        );

        assert!(notice.expire(ticket));
        assert!(!notice.is_active());
        assert_eq!(
            notice.container_class(),
            "action-messages-container deleted-message"
        );
        assert!(!notice.expire(ticket));
    }

    #[test]
    fn test_last_show_wins() {
        let mut notice = Notice::new();
        let first = notice.show(NoticeKind::Completed, "Todo completed!");
        let second = notice.show(NoticeKind::Updated, "Todo updated!");

        // the older timer fires first and must not hide the newer message
        assert!(!notice.expire(first));
        assert!(notice.is_active());
        assert_eq!(notice.kind(), Some(NoticeKind::Updated));
        assert_eq!(notice.message(), "Todo updated!");

        assert!(notice.expire(second));
        assert!(!notice.is_active());
    }

    #[test]
    fn test_kind_classes_are_exclusive() {
        let mut notice = Notice::new();
        notice.show(NoticeKind::Completed, "a");
        notice.show(NoticeKind::Deleted, "b");
        let class = notice.container_class();
        assert!(class.contains("deleted-message"));
        assert!(!class.contains("completed-message"));
    }
}
