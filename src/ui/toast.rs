use std::time::Duration;

/// How long a toast stays up after the most recent `show`.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Identifies one `show` call. Only the ticket of the latest call can hide the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTicket(u64);

/// Single slot notification: a new message overwrites the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toast {
    message: String,
    visible: bool,
    generation: u64,
}

impl Toast {
    pub fn show(&mut self, message: impl Into<String>) -> ToastTicket {
        self.message = message.into();
        self.visible = true;
        self.generation += 1;
        ToastTicket(self.generation)
    }

    /// Hides the toast if `ticket` belongs to the latest `show`. Returns whether it hid.
    pub fn expire(&mut self, ticket: ToastTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire() {
        let mut toast = Toast::default();
        assert!(!toast.is_visible());

        let ticket = toast.show("CV download started!");
        assert!(toast.is_visible());
        assert_eq!(toast.message(), "CV download started!");

        assert!(toast.expire(ticket));
        assert!(!toast.is_visible());
        // message is kept so the slide-out still shows text
        assert_eq!(toast.message(), "CV download started!");
    }

    #[test]
    fn test_second_show_overwrites_and_restarts_window() {
        let mut toast = Toast::default();
        let first = toast.show("first");
        let second = toast.show("second");
        assert_eq!(toast.message(), "second");

        // the first window elapsing must not hide the second message
        assert!(!toast.expire(first));
        assert!(toast.is_visible());
        assert_eq!(toast.message(), "second");

        assert!(toast.expire(second));
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_expire_is_idempotent() {
        let mut toast = Toast::default();
        let ticket = toast.show("hello");
        assert!(toast.expire(ticket));
        assert!(!toast.expire(ticket));
    }
}
