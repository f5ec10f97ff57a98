//! Contact form submission lifecycle
//!
//! The form moves through `idle -> sending -> success | error`, with
//! `error -> sending` allowed for retries. At most one request is in flight:
//! [`ContactForm::begin_submit`] refuses while a request is pending, so rapid
//! repeated clicks collapse into one outbound call.
//!
//! The request itself goes through a [`ContactTransport`], and the form state
//! lives behind a [`FormStore`] so the same [`submit`] driver runs against a
//! reactive signal in the browser and a plain `RefCell` in tests.

use std::cell::RefCell;
use std::future::Future;

use serde::Serialize;
use thiserror::Error;

/// The three values posted to the contact endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// True when every field is an empty string
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Selector for one of the form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Sending => "sending",
            SubmissionPhase::Success => "success",
            SubmissionPhase::Error => "error",
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionPhase::Sending)
    }

    /// Phases from which a new submit is accepted
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionPhase::Idle | SubmissionPhase::Error)
    }
}

/// Failure while delivering the form.
///
/// The user never sees these variants: every one of them lands the form in
/// [`SubmissionPhase::Error`]. They exist for logs.
#[derive(Debug, Clone, Error)]
pub enum ContactError {
    #[error("failed to encode contact payload: {0}")]
    Encode(String),

    #[error("contact request failed: {0}")]
    Transport(String),

    #[error("contact endpoint answered with status {status}")]
    Rejected { status: u16 },

    #[error("contact form cannot be sent from this environment")]
    Unavailable,
}

/// Whether an HTTP status counts as an accepted submission
pub fn is_affirmative(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Outbound side of a submission: one POST, answered by a status code
pub trait ContactTransport {
    fn deliver(&self, payload: &ContactFields) -> impl Future<Output = Result<u16, ContactError>>;
}

/// Contact form state: field values plus lifecycle phase
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    fields: ContactFields,
    phase: SubmissionPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            fields,
            phase: SubmissionPhase::Idle,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn field(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn can_submit(&self) -> bool {
        self.phase.accepts_submit()
    }

    /// Update one input. Refused once the form has succeeded, since the
    /// inputs are gone from the page at that point.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if self.phase == SubmissionPhase::Success {
            return false;
        }
        *self.fields.slot(field) = value.into();
        true
    }

    /// Enter `sending` and hand back the payload to post.
    ///
    /// Returns `None` while a request is already pending or after success.
    pub fn begin_submit(&mut self) -> Option<ContactFields> {
        if !self.can_submit() {
            return None;
        }
        self.phase = SubmissionPhase::Sending;
        Some(self.fields.clone())
    }

    /// Apply the outcome of the pending request.
    ///
    /// Success clears every field; failure keeps them for a retry. Outcomes
    /// arriving when nothing is pending are ignored.
    pub fn settle(&mut self, outcome: Result<(), ContactError>) -> SubmissionPhase {
        if self.phase != SubmissionPhase::Sending {
            return self.phase;
        }

        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.phase = SubmissionPhase::Success;
            }
            Err(_) => {
                self.phase = SubmissionPhase::Error;
            }
        }
        self.phase
    }
}

/// Shared cell holding a [`ContactForm`]
pub trait FormStore {
    /// Run `f` against the form. `None` when the store has been disposed.
    fn modify<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormStore for RefCell<ContactForm> {
    fn modify<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one submission cycle against `store`.
///
/// Issues at most one request; a call made while another is pending (or after
/// success) returns the current phase without touching the transport.
///
/// A failed request leaves the form in [`SubmissionPhase::Error`] and hands
/// the cause back as `Err` so the caller can log it.
pub async fn submit<S, T>(store: &S, transport: &T) -> Result<SubmissionPhase, ContactError>
where
    S: FormStore + ?Sized,
    T: ContactTransport + ?Sized,
{
    let Some(payload) = store.modify(ContactForm::begin_submit).flatten() else {
        return Ok(store.modify(|form| form.phase()).unwrap_or_default());
    };

    let outcome = match transport.deliver(&payload).await {
        Ok(status) if is_affirmative(status) => Ok(()),
        Ok(status) => Err(ContactError::Rejected { status }),
        Err(e) => Err(e),
    };

    let settled = store.modify(|form| form.settle(outcome.clone()));
    outcome.map(|()| settled.unwrap_or(SubmissionPhase::Success))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> ContactFields {
        ContactFields::new("Ada", "ada@example.com", "Hello")
    }

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = ContactForm::new();
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert!(form.fields().is_empty());
        assert!(form.can_submit());
    }

    #[test]
    fn test_set_field_updates_single_value() {
        let mut form = ContactForm::new();
        assert!(form.set_field(ContactField::Email, "ada@example.com"));
        assert_eq!(form.field(ContactField::Email), "ada@example.com");
        assert_eq!(form.field(ContactField::Name), "");
    }

    #[test]
    fn test_begin_submit_enters_sending_with_snapshot() {
        let mut form = ContactForm::with_fields(ada());
        let payload = form.begin_submit();

        assert_eq!(payload, Some(ada()));
        assert_eq!(form.phase(), SubmissionPhase::Sending);
    }

    #[test]
    fn test_begin_submit_refused_while_sending() {
        let mut form = ContactForm::with_fields(ada());
        form.begin_submit();

        for _ in 0..5 {
            assert!(form.begin_submit().is_none());
        }
        assert_eq!(form.phase(), SubmissionPhase::Sending);
    }

    #[test]
    fn test_settle_ok_clears_fields() {
        let mut form = ContactForm::with_fields(ada());
        form.begin_submit();

        assert_eq!(form.settle(Ok(())), SubmissionPhase::Success);
        assert!(form.fields().is_empty());
    }

    #[test]
    fn test_settle_error_keeps_fields() {
        let mut form = ContactForm::with_fields(ada());
        form.begin_submit();

        let phase = form.settle(Err(ContactError::Rejected { status: 500 }));
        assert_eq!(phase, SubmissionPhase::Error);
        assert_eq!(form.fields(), &ada());
    }

    #[test]
    fn test_error_allows_resubmit() {
        let mut form = ContactForm::with_fields(ada());
        form.begin_submit();
        form.settle(Err(ContactError::Transport("offline".to_string())));

        assert!(form.can_submit());
        assert_eq!(form.begin_submit(), Some(ada()));
        assert_eq!(form.phase(), SubmissionPhase::Sending);
    }

    #[test]
    fn test_success_is_terminal() {
        let mut form = ContactForm::with_fields(ada());
        form.begin_submit();
        form.settle(Ok(()));

        assert!(form.begin_submit().is_none());
        assert!(!form.set_field(ContactField::Name, "Grace"));
        assert_eq!(form.phase(), SubmissionPhase::Success);
        assert!(form.fields().is_empty());
    }

    #[test]
    fn test_settle_without_pending_request_is_ignored() {
        let mut form = ContactForm::with_fields(ada());
        assert_eq!(form.settle(Ok(())), SubmissionPhase::Idle);
        assert_eq!(form.fields(), &ada());
    }

    #[test]
    fn test_edits_during_error_are_kept() {
        let mut form = ContactForm::with_fields(ada());
        form.begin_submit();
        form.settle(Err(ContactError::Unavailable));

        form.set_field(ContactField::Message, "Hello again");
        assert_eq!(form.field(ContactField::Message), "Hello again");
        assert_eq!(form.field(ContactField::Name), "Ada");
    }

    #[test]
    fn test_affirmative_status_range() {
        assert!(is_affirmative(200));
        assert!(is_affirmative(204));
        assert!(is_affirmative(299));
        assert!(!is_affirmative(199));
        assert!(!is_affirmative(301));
        assert!(!is_affirmative(404));
        assert!(!is_affirmative(500));
    }

    #[test]
    fn test_payload_serializes_exactly_three_fields() {
        let json = serde_json::to_value(ada()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello"
            })
        );
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(SubmissionPhase::Idle.as_str(), "idle");
        assert_eq!(SubmissionPhase::Sending.as_str(), "sending");
        assert_eq!(SubmissionPhase::Success.as_str(), "success");
        assert_eq!(SubmissionPhase::Error.as_str(), "error");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::Rejected { status: 503 }.to_string(),
            "contact endpoint answered with status 503"
        );
        assert_eq!(
            ContactError::Transport("dns".to_string()).to_string(),
            "contact request failed: dns"
        );
    }
}

#[cfg(all(test, feature = "ssr"))]
mod submit_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn ada() -> ContactFields {
        ContactFields::new("Ada", "ada@example.com", "Hello")
    }

    /// Answers every request with a fixed status
    struct StatusStub {
        status: u16,
        calls: Cell<u32>,
        last: RefCell<Option<ContactFields>>,
    }

    impl StatusStub {
        fn new(status: u16) -> Self {
            Self {
                status,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl ContactTransport for StatusStub {
        fn deliver(
            &self,
            payload: &ContactFields,
        ) -> impl Future<Output = Result<u16, ContactError>> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(payload.clone());
            let status = self.status;
            async move { Ok(status) }
        }
    }

    /// Fails at the transport level
    struct OfflineStub;

    impl ContactTransport for OfflineStub {
        fn deliver(
            &self,
            _payload: &ContactFields,
        ) -> impl Future<Output = Result<u16, ContactError>> {
            async { Err(ContactError::Transport("connection refused".to_string())) }
        }
    }

    /// Suspends once before answering, like a real network round trip
    struct SlowStub {
        calls: Cell<u32>,
    }

    impl ContactTransport for SlowStub {
        fn deliver(
            &self,
            _payload: &ContactFields,
        ) -> impl Future<Output = Result<u16, ContactError>> {
            self.calls.set(self.calls.get() + 1);
            async {
                tokio::task::yield_now().await;
                Ok(200)
            }
        }
    }

    /// Records the phase the store is in while the request is outstanding
    struct PhaseProbe {
        store: Rc<RefCell<ContactForm>>,
        seen: Cell<Option<SubmissionPhase>>,
    }

    impl ContactTransport for PhaseProbe {
        fn deliver(
            &self,
            _payload: &ContactFields,
        ) -> impl Future<Output = Result<u16, ContactError>> {
            self.seen.set(Some(self.store.borrow().phase()));
            async { Ok(200) }
        }
    }

    #[tokio::test]
    async fn test_ok_response_clears_fields() {
        let store = RefCell::new(ContactForm::with_fields(ada()));
        let transport = StatusStub::new(200);

        let phase = submit(&store, &transport).await.unwrap();

        assert_eq!(phase, SubmissionPhase::Success);
        assert_eq!(store.borrow().phase(), SubmissionPhase::Success);
        assert_eq!(store.borrow().fields(), &ContactFields::new("", "", ""));
        assert_eq!(transport.last.borrow().clone(), Some(ada()));
        assert_eq!(transport.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_server_error_keeps_fields() {
        let store = RefCell::new(ContactForm::with_fields(ada()));
        let transport = StatusStub::new(500);

        let outcome = submit(&store, &transport).await;

        assert!(matches!(outcome, Err(ContactError::Rejected { status: 500 })));
        assert_eq!(store.borrow().phase(), SubmissionPhase::Error);
        assert_eq!(store.borrow().fields(), &ada());
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_fields() {
        let store = RefCell::new(ContactForm::with_fields(ada()));

        let outcome = submit(&store, &OfflineStub).await;

        match outcome {
            Err(ContactError::Transport(detail)) => assert_eq!(detail, "connection refused"),
            other => panic!("expected transport failure, got {other:?}"),
        }
        assert_eq!(store.borrow().phase(), SubmissionPhase::Error);
        assert_eq!(store.borrow().fields(), &ada());
    }

    #[tokio::test]
    async fn test_rapid_submits_issue_one_request() {
        let store = RefCell::new(ContactForm::with_fields(ada()));
        let transport = SlowStub {
            calls: Cell::new(0),
        };

        let (first, second, third) = tokio::join!(
            submit(&store, &transport),
            submit(&store, &transport),
            submit(&store, &transport),
        );

        assert_eq!(transport.calls.get(), 1);
        assert_eq!(first.unwrap(), SubmissionPhase::Success);
        assert_eq!(second.unwrap(), SubmissionPhase::Sending);
        assert_eq!(third.unwrap(), SubmissionPhase::Sending);
        assert_eq!(store.borrow().phase(), SubmissionPhase::Success);
    }

    #[tokio::test]
    async fn test_phase_is_sending_while_request_is_outstanding() {
        let store = Rc::new(RefCell::new(ContactForm::with_fields(ada())));
        let probe = PhaseProbe {
            store: store.clone(),
            seen: Cell::new(None),
        };

        submit(store.as_ref(), &probe).await.unwrap();

        assert_eq!(probe.seen.get(), Some(SubmissionPhase::Sending));
    }

    #[tokio::test]
    async fn test_retry_after_error_succeeds() {
        let store = RefCell::new(ContactForm::with_fields(ada()));

        assert!(submit(&store, &StatusStub::new(502)).await.is_err());
        assert_eq!(store.borrow().phase(), SubmissionPhase::Error);
        assert_eq!(
            submit(&store, &StatusStub::new(201)).await.unwrap(),
            SubmissionPhase::Success
        );
        assert!(store.borrow().fields().is_empty());
    }

    #[tokio::test]
    async fn test_submit_after_success_sends_nothing() {
        let store = RefCell::new(ContactForm::with_fields(ada()));
        let transport = StatusStub::new(200);

        submit(&store, &transport).await.unwrap();
        let phase = submit(&store, &transport).await.unwrap();

        assert_eq!(phase, SubmissionPhase::Success);
        assert_eq!(transport.calls.get(), 1);
    }
}
