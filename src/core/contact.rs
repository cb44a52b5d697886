//! Contact form submission flow.
//!
//! One POST per submit, no timeout and no retry. The flow only tracks what
//! the submit button and the success panel should show; the transport that
//! actually sends the form is supplied by the caller.

use std::future::Future;

use crate::config::contact::{FAILURE_ALERT, SENDING_LABEL};
use crate::core::error::SubmitError;

/// Sends the form and reports the HTTP status of the response.
pub trait FormTransport {
    fn post(&self, action: &str) -> impl Future<Output = Result<u16, SubmitError>>;
}

/// Posts the form, treating any non-2xx status as a failure.
pub async fn submit<T: FormTransport>(transport: &T, action: &str) -> Result<(), SubmitError> {
    let status = transport.post(action).await?;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Http(status))
    }
}

/// What the submit button should look like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub label: String,
    pub disabled: bool,
}

/// UI change once the request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormUpdate {
    /// Hide the form and show the success panel.
    ShowSuccess,
    /// Restore the button and tell the user.
    Revert {
        button: ButtonState,
        alert: &'static str,
    },
}

/// Submission state of one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactFlow {
    #[default]
    Editing,
    Sending {
        original_label: String,
    },
    Sent,
}

impl ContactFlow {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending { .. })
    }

    /// Starts a submission. Returns the in-flight button state, or `None`
    /// when a submission is already running or the form was sent.
    pub fn begin(&mut self, button_label: &str) -> Option<ButtonState> {
        if !matches!(self, Self::Editing) {
            return None;
        }
        *self = Self::Sending {
            original_label: button_label.to_string(),
        };
        Some(ButtonState {
            label: SENDING_LABEL.to_string(),
            disabled: true,
        })
    }

    /// Settles the in-flight submission.
    pub fn complete(&mut self, result: Result<(), SubmitError>) -> Option<FormUpdate> {
        if !self.is_sending() {
            return None;
        }
        let Self::Sending { original_label } = std::mem::take(self) else {
            return None;
        };
        match result {
            Ok(()) => {
                *self = Self::Sent;
                Some(FormUpdate::ShowSuccess)
            }
            Err(_) => Some(FormUpdate::Revert {
                button: ButtonState {
                    label: original_label,
                    disabled: false,
                },
                alert: FAILURE_ALERT,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct MockTransport {
        response: Result<u16, SubmitError>,
        calls: RefCell<Vec<String>>,
    }

    impl MockTransport {
        fn new(response: Result<u16, SubmitError>) -> Self {
            Self {
                response,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormTransport for MockTransport {
        async fn post(&self, action: &str) -> Result<u16, SubmitError> {
            self.calls.borrow_mut().push(action.to_string());
            self.response.clone()
        }
    }

    async fn run(transport: &MockTransport) -> (ContactFlow, Option<ButtonState>, Option<FormUpdate>) {
        let mut flow = ContactFlow::default();
        let sending = flow.begin("Schedule a Tour");
        let result = submit(transport, "https://formspree.io/f/test").await;
        let update = flow.complete(result);
        (flow, sending, update)
    }

    #[tokio::test]
    async fn test_success_shows_panel() {
        let transport = MockTransport::new(Ok(200));
        let (flow, sending, update) = run(&transport).await;

        assert_eq!(
            sending,
            Some(ButtonState {
                label: "Sending...".to_string(),
                disabled: true,
            })
        );
        assert_eq!(update, Some(FormUpdate::ShowSuccess));
        assert_eq!(flow, ContactFlow::Sent);
        assert_eq!(transport.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_server_error_reverts_button() {
        let transport = MockTransport::new(Ok(500));
        let (flow, _, update) = run(&transport).await;

        assert_eq!(
            update,
            Some(FormUpdate::Revert {
                button: ButtonState {
                    label: "Schedule a Tour".to_string(),
                    disabled: false,
                },
                alert: FAILURE_ALERT,
            })
        );
        assert_eq!(flow, ContactFlow::Editing);
    }

    #[tokio::test]
    async fn test_network_failure_reverts_button() {
        let transport = MockTransport::new(Err(SubmitError::Network("offline".into())));
        let (flow, _, update) = run(&transport).await;

        assert!(matches!(update, Some(FormUpdate::Revert { .. })));
        assert_eq!(flow, ContactFlow::Editing);
    }

    #[tokio::test]
    async fn test_non_ok_status_is_error() {
        let transport = MockTransport::new(Ok(404));
        assert_eq!(
            submit(&transport, "/contact").await,
            Err(SubmitError::Http(404))
        );
        let transport = MockTransport::new(Ok(204));
        assert_eq!(submit(&transport, "/contact").await, Ok(()));
    }

    #[test]
    fn test_double_submit_ignored() {
        let mut flow = ContactFlow::default();
        assert!(flow.begin("Send").is_some());
        assert!(flow.is_sending());
        assert!(flow.begin("Sending...").is_none());
    }

    #[test]
    fn test_complete_without_begin() {
        let mut flow = ContactFlow::default();
        assert_eq!(flow.complete(Ok(())), None);
        assert_eq!(flow, ContactFlow::Editing);
    }
}
