use http::header::ACCEPT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a submission is in its lifecycle. Only one stage at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    /// Hidden trap input, only bots fill it in.
    Honeypot,
}

/// JSON body sent to the relay. The honeypot never leaves the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay rejected submission with status {status}")]
    Rejected { status: u16 },
}

/// What the caller has to do after [`ContactForm::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Honeypot was filled. Already reported as success, nothing to send.
    Discarded,
    /// A previous attempt has not finished yet.
    InFlight,
    /// Send this payload, then hand the outcome to [`ContactForm::complete`].
    Deliver(ContactPayload),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub honeypot: String,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
            Field::Honeypot => &self.honeypot,
        }
    }

    /// Sets a single field. Never touches `status`, so an error banner stays
    /// visible until the next attempt finishes.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
            Field::Honeypot => self.honeypot = value,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    /// An attempt already in flight wins over everything, including the honeypot,
    /// so nothing can clear the form while a reply is still outstanding.
    pub fn begin_submit(&mut self) -> Submission {
        if self.is_sending() {
            return Submission::InFlight;
        }
        if !self.honeypot.trim().is_empty() {
            log::info!("contact form honeypot filled; discarding submission");
            self.succeed();
            return Submission::Discarded;
        }
        self.status = FormStatus::Sending;
        Submission::Deliver(self.payload())
    }

    pub fn complete(&mut self, outcome: Result<(), RelayError>) {
        match outcome {
            Ok(()) => self.succeed(),
            Err(e) => {
                log::warn!("contact form submission failed: {e}");
                self.status = FormStatus::Error;
            }
        }
    }

    /// Runs a whole submission against `relay`. At most one request is made.
    pub async fn submit<R: FormRelay>(&mut self, relay: &R) -> FormStatus {
        if let Submission::Deliver(payload) = self.begin_submit() {
            let outcome = relay.deliver(&payload).await;
            self.complete(outcome);
        }
        self.status
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }

    fn succeed(&mut self) {
        *self = Self {
            status: FormStatus::Success,
            ..Self::default()
        };
    }
}

/// Something that can forward a contact message to the site owner.
#[allow(async_fn_in_trait)]
pub trait FormRelay {
    async fn deliver(&self, payload: &ContactPayload) -> Result<(), RelayError>;
}

/// Posts JSON to a hosted form relay.
#[derive(Debug, Clone)]
pub struct HttpFormRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFormRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl FormRelay for HttpFormRelay {
    async fn deliver(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        // .json() sets Content-Type
        let res = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            return Err(RelayError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::RefCell,
        sync::{Arc, Mutex},
    };

    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use tokio::net::TcpListener;

    /// Relay double that records every payload and answers with a fixed outcome.
    struct FakeRelay {
        reject_with: Option<u16>,
        calls: RefCell<Vec<ContactPayload>>,
    }

    impl FakeRelay {
        fn ok() -> Self {
            Self {
                reject_with: None,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn rejecting(status: u16) -> Self {
            Self {
                reject_with: Some(status),
                ..Self::ok()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl FormRelay for FakeRelay {
        async fn deliver(&self, payload: &ContactPayload) -> Result<(), RelayError> {
            self.calls.borrow_mut().push(payload.clone());
            match self.reject_with {
                Some(status) => Err(RelayError::Rejected { status }),
                None => Ok(()),
            }
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Ada");
        form.update_field(Field::Email, "ada@example.com");
        form.update_field(Field::Subject, "Hello");
        form.update_field(Field::Message, "Loved the case studies.");
        form
    }

    fn assert_cleared(form: &ContactForm) {
        for field in [
            Field::Name,
            Field::Email,
            Field::Subject,
            Field::Message,
            Field::Honeypot,
        ] {
            assert_eq!(form.field(field), "", "{field:?} should be cleared");
        }
    }

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = ContactForm::new();
        assert_eq!(form.status(), FormStatus::Idle);
        assert_cleared(&form);
    }

    #[test]
    fn test_update_field_is_idempotent() {
        let mut form = ContactForm::new();
        form.update_field(Field::Email, "ada@example.com");
        let once = form.clone();
        form.update_field(Field::Email, "ada@example.com");
        assert_eq!(form, once);
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[tokio::test]
    async fn test_successful_submission_clears_fields() {
        let relay = FakeRelay::ok();
        let mut form = filled_form();

        let status = form.submit(&relay).await;

        assert_eq!(status, FormStatus::Success);
        assert_cleared(&form);
        let calls = relay.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            ContactPayload {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                subject: "Hello".to_string(),
                message: "Loved the case studies.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_honeypot_short_circuits_without_network() {
        let relay = FakeRelay::ok();
        let mut form = filled_form();
        form.update_field(Field::Honeypot, "Acme Corp");

        let status = form.submit(&relay).await;

        assert_eq!(status, FormStatus::Success);
        assert_eq!(relay.call_count(), 0);
        assert_cleared(&form);
    }

    #[test]
    fn test_whitespace_honeypot_is_not_a_bot() {
        let mut form = filled_form();
        form.update_field(Field::Honeypot, "   ");
        assert!(matches!(form.begin_submit(), Submission::Deliver(_)));
        assert_eq!(form.status(), FormStatus::Sending);
    }

    #[tokio::test]
    async fn test_rejected_submission_keeps_fields() {
        let relay = FakeRelay::rejecting(422);
        let mut form = filled_form();
        let before = form.payload();

        let status = form.submit(&relay).await;

        assert_eq!(status, FormStatus::Error);
        assert_eq!(form.payload(), before);
        assert_eq!(relay.call_count(), 1);
    }

    #[tokio::test]
    async fn test_resubmit_after_error_goes_through_sending() {
        let mut form = filled_form();
        form.submit(&FakeRelay::rejecting(500)).await;
        assert_eq!(form.status(), FormStatus::Error);

        // editing does not reset the last outcome
        form.update_field(Field::Message, "Second try");
        assert_eq!(form.status(), FormStatus::Error);

        let relay = FakeRelay::ok();
        let status = form.submit(&relay).await;
        assert_eq!(status, FormStatus::Success);
        assert_eq!(relay.calls.borrow()[0].message, "Second try");
    }

    #[test]
    fn test_begin_submit_while_sending_is_in_flight() {
        let mut form = filled_form();
        assert!(matches!(form.begin_submit(), Submission::Deliver(_)));
        assert_eq!(form.begin_submit(), Submission::InFlight);
        assert_eq!(form.status(), FormStatus::Sending);
    }

    #[test]
    fn test_honeypot_while_sending_does_not_clear_form() {
        let mut form = filled_form();
        assert!(matches!(form.begin_submit(), Submission::Deliver(_)));

        form.update_field(Field::Honeypot, "Acme Corp");
        assert_eq!(form.begin_submit(), Submission::InFlight);
        assert_eq!(form.status(), FormStatus::Sending);
        assert_eq!(form.name, "Ada");

        // the real request's outcome is still the one that lands
        form.complete(Err(RelayError::Rejected { status: 500 }));
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.message, "Loved the case studies.");
    }

    #[tokio::test]
    async fn test_status_is_sending_until_relay_answers() {
        let relay = FakeRelay::ok();
        let mut form = filled_form();
        let Submission::Deliver(payload) = form.begin_submit() else {
            panic!("filled form should deliver");
        };
        assert_eq!(form.status(), FormStatus::Sending);
        // fields stay put while the request is out
        assert_eq!(form.name, "Ada");

        form.complete(relay.deliver(&payload).await);
        assert_eq!(form.status(), FormStatus::Success);
    }

    #[derive(Clone)]
    struct RelayServerState {
        received: Arc<Mutex<Vec<(HeaderMap, ContactPayload)>>>,
        respond_with: StatusCode,
    }

    async fn relay_handler(
        State(state): State<RelayServerState>,
        headers: HeaderMap,
        Json(body): Json<ContactPayload>,
    ) -> StatusCode {
        state
            .received
            .lock()
            .expect("should be able to acquire lock")
            .push((headers, body));
        state.respond_with
    }

    async fn spawn_relay_server(respond_with: StatusCode) -> (String, RelayServerState) {
        let state = RelayServerState {
            received: Arc::new(Mutex::new(Vec::new())),
            respond_with,
        };
        let app = Router::new()
            .route("/f/test", post(relay_handler))
            .with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test relay");
        let addr = listener.local_addr().expect("test relay addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test relay");
        });
        (format!("http://{addr}/f/test"), state)
    }

    #[tokio::test]
    async fn test_http_relay_posts_json() {
        let (endpoint, state) = spawn_relay_server(StatusCode::OK).await;
        let relay = HttpFormRelay::new(endpoint);
        let mut form = filled_form();

        let status = form.submit(&relay).await;

        assert_eq!(status, FormStatus::Success);
        let received = state.received.lock().expect("should be able to acquire lock");
        assert_eq!(received.len(), 1);
        let (headers, body) = &received[0];
        assert_eq!(headers["content-type"], "application/json");
        assert_eq!(headers["accept"], "application/json");
        assert_eq!(body.name, "Ada");
        assert_eq!(body.subject, "Hello");
    }

    #[tokio::test]
    async fn test_http_relay_is_reused_across_submissions() {
        let (endpoint, state) = spawn_relay_server(StatusCode::OK).await;
        let relay = HttpFormRelay::new(endpoint);

        let mut first = filled_form();
        assert_eq!(first.submit(&relay).await, FormStatus::Success);
        let mut second = filled_form();
        second.update_field(Field::Message, "One more thing");
        assert_eq!(second.submit(&relay).await, FormStatus::Success);

        let received = state.received.lock().expect("should be able to acquire lock");
        assert_eq!(received.len(), 2);
        assert_eq!(received[1].1.message, "One more thing");
    }

    #[tokio::test]
    async fn test_http_relay_non_ok_is_rejected() {
        let (endpoint, _state) = spawn_relay_server(StatusCode::UNPROCESSABLE_ENTITY).await;
        let relay = HttpFormRelay::new(endpoint);

        let err = relay
            .deliver(&filled_form().payload())
            .await
            .expect_err("422 should be an error");
        assert!(matches!(err, RelayError::Rejected { status: 422 }));
    }

    #[tokio::test]
    async fn test_http_relay_unreachable_sets_error() {
        // bind then drop so nothing is listening on the port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind unused port");
        let addr = listener.local_addr().expect("unused port addr");
        drop(listener);

        let relay = HttpFormRelay::new(format!("http://{addr}/f/test"));
        let mut form = filled_form();
        let status = form.submit(&relay).await;

        assert_eq!(status, FormStatus::Error);
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_payload_omits_honeypot() {
        let mut form = filled_form();
        form.update_field(Field::Honeypot, "bot");
        let json = serde_json::to_value(form.payload()).expect("payload serializes");
        let obj = json.as_object().expect("payload is an object");
        assert_eq!(obj.len(), 4);
        assert!(obj.keys().all(|k| ["name", "email", "subject", "message"].contains(&k.as_str())));
    }
}
