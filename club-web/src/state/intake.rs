//! Registration form state

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_intake::{
    deliver, Field, FieldChange, IntakeForm, RegistrationTransport, Settlement, SubmitRejected,
    SUCCESS_DISPLAY_MS,
};

/// Global intake context
#[derive(Clone, Copy)]
pub struct IntakeContext {
    pub form: RwSignal<IntakeForm>,
}

impl IntakeContext {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(IntakeForm::new()),
        }
    }

    pub fn apply(&self, change: FieldChange) {
        self.form.update(|f| f.apply(change));
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.form.with(|f| f.errors().message(field))
    }

    pub fn is_submitting(&self) -> bool {
        self.form.with(|f| f.is_submitting())
    }

    pub fn is_success(&self) -> bool {
        self.form.with(|f| f.is_success())
    }

    pub fn failure(&self) -> Option<String> {
        self.form.with(|f| f.failure().map(str::to_string))
    }

    /// Drop the draft. A request still in flight settles as discarded.
    pub fn reset(&self) {
        self.form.update(|f| f.reset());
    }

    /// Validate and send the draft in the background.
    ///
    /// `on_done` runs once the success message has been shown, unless the
    /// form was reset in the meantime.
    pub fn submit<T, F>(&self, transport: T, on_done: F)
    where
        T: RegistrationTransport + 'static,
        F: FnOnce() + 'static,
    {
        let form = self.form;

        let ticket = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(SubmitRejected::Invalid(errors))) => {
                log::debug!("Form has {} invalid field(s)", errors.len());
                return;
            }
            Some(Err(e)) => {
                log::debug!("Submit ignored: {e}");
                return;
            }
            None => return,
        };

        leptos::task::spawn_local(async move {
            let result = deliver(&transport, &ticket).await;

            let settled = form.try_update(|f| f.settle(ticket.generation, result));
            if settled != Some(Settlement::Succeeded) {
                return;
            }

            TimeoutFuture::new(SUCCESS_DISPLAY_MS).await;
            if form.try_update(|f| f.finish_success(ticket.generation)) == Some(true) {
                on_done();
            }
        });
    }
}

pub fn provide_intake_context() -> IntakeContext {
    let context = IntakeContext::new();
    provide_context(context);
    context
}

pub fn use_intake_context() -> IntakeContext {
    expect_context::<IntakeContext>()
}
