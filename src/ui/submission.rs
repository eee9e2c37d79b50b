use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Artificial latency of the simulated send.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// How long the success or error label stays before the form returns to idle.
pub const STATUS_DISPLAY: Duration = Duration::from_secs(3);

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionState {
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
            Self::Success => "Message Sent!",
            Self::Error => "Error",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("message could not be delivered")]
    Rejected,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    #[error("a message is already being sent")]
    Busy,
    #[error("no message is being sent")]
    NotSending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Every field is required. Mirrors the form's `required` attribute, so a
    /// whitespace-only value counts as filled in.
    pub fn validate(&self) -> Result<(), SubmitError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        match fields.iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(SubmitError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

/// Delivers a contact message somewhere.
pub trait MessageSender {
    fn send(&self, message: &ContactMessage) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Stands in for a real delivery backend: waits `delay` using `sleep`, then reports
/// success.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSender<S> {
    delay: Duration,
    sleep: S,
}

impl<S> SimulatedSender<S> {
    pub fn new(delay: Duration, sleep: S) -> Self {
        Self { delay, sleep }
    }
}

impl<S, F> MessageSender for SimulatedSender<S>
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    async fn send(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        log::info!("simulating delivery of message {:?}", message.subject);
        (self.sleep)(self.delay).await;
        Ok(())
    }
}

/// Validates `message` and hands it to `sender`.
pub async fn submit<S: MessageSender>(
    sender: &S,
    message: &ContactMessage,
) -> Result<(), SubmitError> {
    message.validate()?;
    sender.send(message).await
}

/// Identifies the outcome a pending revert belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTicket(u64);

/// `Idle -> Sending -> {Success, Error} -> Idle`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFlow {
    state: SubmissionState,
    generation: u64,
}

impl SubmissionFlow {
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SubmissionState::Sending
    }

    /// Starts a send. A new submission may replace a displayed outcome, but never a
    /// send in flight.
    pub fn begin(&mut self) -> Result<(), FlowError> {
        if self.is_sending() {
            return Err(FlowError::Busy);
        }
        self.state = SubmissionState::Sending;
        self.generation += 1;
        Ok(())
    }

    /// Records the outcome of the send and returns the ticket for the later revert.
    pub fn finish(&mut self, outcome: &Result<(), SubmitError>) -> Result<RevertTicket, FlowError> {
        if !self.is_sending() {
            return Err(FlowError::NotSending);
        }
        self.state = match outcome {
            Ok(()) => SubmissionState::Success,
            Err(_) => SubmissionState::Error,
        };
        Ok(RevertTicket(self.generation))
    }

    /// Returns to `Idle` unless a newer submission started since `ticket` was issued.
    pub fn revert(&mut self, ticket: RevertTicket) -> bool {
        if ticket.0 != self.generation || self.is_sending() {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }
}
