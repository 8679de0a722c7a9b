use std::cell::{Ref, RefCell};
use std::future::Future;
use std::rc::Rc;

use log::{debug, error, info};
use yew::Callback;

use crate::lead::form::{LeadField, LeadFields, LeadForm, SubmitRejected};
use crate::lead::sender::LeadSender;

const SENT_HEADLINE: &str = "Mesajınız Gönderildi!";
const SENT_DESCRIPTION: &str = "En kısa sürede sizinle iletişime geçeceğiz.";
const FAILED_HEADLINE: &str = "Bir Hata Oluştu";
const FAILED_DESCRIPTION: &str =
    "Lütfen daha sonra tekrar deneyin veya telefon ile iletişime geçin.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A toast to show once a submission settles.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub severity: Severity,
    pub headline: String,
    pub description: String,
}

impl Notice {
    pub fn sent() -> Self {
        Self {
            severity: Severity::Success,
            headline: SENT_HEADLINE.to_string(),
            description: SENT_DESCRIPTION.to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            severity: Severity::Error,
            headline: FAILED_HEADLINE.to_string(),
            description: FAILED_DESCRIPTION.to_string(),
        }
    }
}

/// Fire-and-forget sink for notices.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl Notifier for Callback<Notice> {
    fn notify(&self, notice: Notice) {
        self.emit(notice);
    }
}

/// Ties the form state to a sender and a notifier.
pub struct LeadController<S, N> {
    form: Rc<RefCell<LeadForm>>,
    sender: S,
    notifier: N,
}

impl<S, N> LeadController<S, N>
where
    S: LeadSender + 'static,
    N: Notifier + Clone + 'static,
{
    pub fn new(sender: S, notifier: N) -> Self {
        Self {
            form: Rc::new(RefCell::new(LeadForm::new())),
            sender,
            notifier,
        }
    }

    pub fn form(&self) -> Ref<'_, LeadForm> {
        self.form.borrow()
    }

    pub fn update_field(&self, field: LeadField, value: impl Into<String>) {
        self.form.borrow_mut().update_field(field, value);
    }

    /// Starts a send if none is in flight and the required fields are filled.
    ///
    /// The state change and the snapshot happen before this returns; the
    /// returned future only waits for the provider and settles the form.
    /// `None` means the call was dropped.
    pub fn submit(&self) -> Option<impl Future<Output = ()> + 'static> {
        let snapshot = match self.form.borrow_mut().begin_submit() {
            Ok(snapshot) => snapshot,
            Err(SubmitRejected::InFlight) => {
                debug!("Submit ignored, a message is already being sent");
                return None;
            }
            Err(SubmitRejected::Missing(field)) => {
                debug!("Submit ignored, required field {} is empty", field);
                return None;
            }
        };

        info!("Sending contact form");
        let pending = self.sender.send(snapshot);
        let form = Rc::clone(&self.form);
        let notifier = self.notifier.clone();

        Some(async move {
            let result = pending.await;
            let notice = match &result {
                Ok(()) => Notice::sent(),
                Err(e) => {
                    error!("Failed to send contact form: {}", e);
                    Notice::failed()
                }
            };
            let outcome = form.borrow_mut().finish_submit(result.is_ok());
            info!("Contact form settled: {:?}", outcome);
            notifier.notify(notice);
        })
    }

    pub fn fields(&self) -> LeadFields {
        self.form.borrow().fields().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::form::SubmissionStatus;
    use crate::lead::sender::SendFailure;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::{FutureExt, LocalBoxFuture};
    use std::cell::Cell;

    type Outcome = Result<(), SendFailure>;

    /// Hands each send a oneshot the test resolves by hand.
    #[derive(Default)]
    struct FakeSender {
        calls: Rc<Cell<usize>>,
        sent: Rc<RefCell<Vec<LeadFields>>>,
        pending: Rc<RefCell<Vec<oneshot::Sender<Outcome>>>>,
    }

    impl FakeSender {
        fn resolve_next(&self, outcome: Outcome) {
            let tx = self.pending.borrow_mut().remove(0);
            tx.send(outcome).unwrap();
        }
    }

    impl LeadSender for FakeSender {
        fn send(&self, lead: LeadFields) -> LocalBoxFuture<'static, Outcome> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(lead);
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().push(tx);
            async move { rx.await.unwrap() }.boxed_local()
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier(Rc<RefCell<Vec<Notice>>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    fn controller() -> (LeadController<FakeSender, RecordingNotifier>, RecordingNotifier) {
        let notifier = RecordingNotifier::default();
        let controller = LeadController::new(FakeSender::default(), notifier.clone());
        controller.update_field(LeadField::Name, "Ada");
        controller.update_field(LeadField::Email, "a@b.com");
        controller.update_field(LeadField::Phone, "555");
        controller.update_field(LeadField::Company, "");
        controller.update_field(LeadField::Message, "hi");
        (controller, notifier)
    }

    #[test]
    fn submits_while_in_flight_are_dropped() {
        let (controller, notifier) = controller();

        let first = controller.submit().expect("first submit starts a send");
        assert!(controller.submit().is_none());
        assert!(controller.submit().is_none());
        assert_eq!(controller.sender.calls.get(), 1);
        assert_eq!(controller.form().status(), SubmissionStatus::Submitting);

        controller.sender.resolve_next(Ok(()));
        block_on(first);

        assert_eq!(controller.sender.calls.get(), 1);
        assert_eq!(notifier.0.borrow().len(), 1);
    }

    #[test]
    fn success_resets_fields_and_notifies_once() {
        let (controller, notifier) = controller();

        let pending = controller.submit().unwrap();
        controller.sender.resolve_next(Ok(()));
        block_on(pending);

        assert_eq!(controller.fields(), LeadFields::default());
        assert_eq!(controller.form().status(), SubmissionStatus::Idle);
        assert_eq!(controller.form().last_outcome(), Some(SubmissionStatus::Succeeded));
        assert_eq!(*notifier.0.borrow(), vec![Notice::sent()]);
    }

    #[test]
    fn failure_keeps_fields_and_notifies_once() {
        let (controller, notifier) = controller();
        let before = controller.fields();

        let pending = controller.submit().unwrap();
        controller
            .sender
            .resolve_next(Err(SendFailure::Network("offline".to_string())));
        block_on(pending);

        assert_eq!(controller.fields(), before);
        assert_eq!(controller.form().status(), SubmissionStatus::Idle);
        assert_eq!(controller.form().last_outcome(), Some(SubmissionStatus::Failed));
        assert_eq!(*notifier.0.borrow(), vec![Notice::failed()]);
    }

    #[test]
    fn retry_after_failure_sends_again() {
        let (controller, notifier) = controller();

        let pending = controller.submit().unwrap();
        controller.sender.resolve_next(Err(SendFailure::Rejected {
            status: 412,
            body: "bad template".to_string(),
        }));
        block_on(pending);

        let pending = controller.submit().expect("retry is allowed");
        controller.sender.resolve_next(Ok(()));
        block_on(pending);

        assert_eq!(controller.sender.calls.get(), 2);
        assert_eq!(*notifier.0.borrow(), vec![Notice::failed(), Notice::sent()]);
    }

    #[test]
    fn whitespace_name_is_sent_and_notified() {
        let (controller, notifier) = controller();
        controller.update_field(LeadField::Name, " ");

        let pending = controller.submit().expect("whitespace passes the required check");
        controller.sender.resolve_next(Ok(()));
        block_on(pending);

        assert_eq!(controller.sender.calls.get(), 1);
        assert_eq!(controller.sender.sent.borrow()[0].name, " ");
        assert_eq!(*notifier.0.borrow(), vec![Notice::sent()]);
    }

    #[test]
    fn empty_required_field_never_starts_a_send() {
        let (controller, notifier) = controller();
        controller.update_field(LeadField::Email, "");

        assert!(controller.submit().is_none());
        assert_eq!(controller.form().status(), SubmissionStatus::Idle);
        assert_eq!(controller.sender.calls.get(), 0);
        assert!(notifier.0.borrow().is_empty());
    }

    #[test]
    fn edits_during_flight_apply_to_form_but_not_to_request() {
        let (controller, _notifier) = controller();

        let pending = controller.submit().unwrap();
        controller.update_field(LeadField::Message, "one more thing");
        assert_eq!(controller.fields().message, "one more thing");

        controller
            .sender
            .resolve_next(Err(SendFailure::Network("timeout".to_string())));
        block_on(pending);

        assert_eq!(controller.sender.sent.borrow()[0].message, "hi");
        assert_eq!(controller.fields().message, "one more thing");
    }

    #[test]
    fn callback_notifier_emits() {
        let seen = Rc::new(RefCell::new(None));
        let callback = {
            let seen = Rc::clone(&seen);
            Callback::from(move |notice: Notice| {
                *seen.borrow_mut() = Some(notice);
            })
        };

        callback.notify(Notice::sent());
        assert_eq!(*seen.borrow(), Some(Notice::sent()));
    }
}
