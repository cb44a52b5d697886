//! Contact form: posts the form asynchronously and swaps in the success
//! panel, or restores the form and alerts on failure.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, FormData, HtmlButtonElement, HtmlFormElement};

use crate::config::selectors::{ACTIVE_CLASS, CONTACT_FORM_ID, FORM_SUCCESS_ID, SUBMIT_BUTTON};
use crate::core::contact::{ButtonState, ContactFlow, FormTransport, FormUpdate, submit};
use crate::core::error::{SubmitError, WidgetError};
use crate::utils::{dom, log};

const WIDGET: &str = "contact";
const FORM_HIDDEN_CLASS: &str = "hidden";

/// Multipart POST of the form's fields through `fetch`.
struct FetchTransport {
    data: FormData,
}

impl FormTransport for FetchTransport {
    async fn post(&self, action: &str) -> Result<u16, SubmitError> {
        let response = Request::post(action)
            .header("Accept", "application/json")
            .body(self.data.clone())
            .map_err(|e| SubmitError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        Ok(response.status())
    }
}

struct ContactForm {
    flow: RefCell<ContactFlow>,
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
    success: Option<Element>,
}

impl ContactForm {
    fn set_button(&self, state: &ButtonState) {
        if let Some(button) = &self.button {
            button.set_text_content(Some(&state.label));
            button.set_disabled(state.disabled);
        }
    }

    fn apply(&self, update: FormUpdate) {
        match update {
            FormUpdate::ShowSuccess => {
                dom::set_class(&self.form, FORM_HIDDEN_CLASS, true);
                if let Some(success) = &self.success {
                    dom::set_class(success, ACTIVE_CLASS, true);
                }
            }
            FormUpdate::Revert { button, alert } => {
                self.set_button(&button);
                dom::alert(alert);
            }
        }
    }

    fn finish(&self, result: Result<(), SubmitError>) {
        if let Err(e) = &result {
            log::error(WIDGET, &format!("submission failed: {e}"));
        }
        // Bind first so the borrow ends before `apply` runs the alert.
        let update = self.flow.borrow_mut().complete(result);
        if let Some(update) = update {
            self.apply(update);
        }
    }

    fn submit(self: &Rc<Self>) {
        let label = self
            .button
            .as_ref()
            .and_then(|button| button.text_content())
            .unwrap_or_default();
        let sending = self.flow.borrow_mut().begin(&label);
        let Some(sending) = sending else {
            return;
        };
        self.set_button(&sending);

        let data = match FormData::new_with_form(&self.form) {
            Ok(data) => data,
            Err(e) => {
                self.finish(Err(SubmitError::Request(format!("{e:?}"))));
                return;
            }
        };
        let action = self.form.action();
        let this = self.clone();
        spawn_local(async move {
            let transport = FetchTransport { data };
            let result = submit(&transport, &action).await;
            this.finish(result);
        });
    }
}

pub fn init() -> Result<(), WidgetError> {
    let form = dom::require_id(CONTACT_FORM_ID)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| WidgetError::MissingElement(CONTACT_FORM_ID))?;

    let contact = Rc::new(ContactForm {
        flow: RefCell::new(ContactFlow::default()),
        button: dom::query_in(&form, SUBMIT_BUTTON).and_then(|b| b.dyn_into().ok()),
        success: dom::by_id(FORM_SUCCESS_ID),
        form: form.clone(),
    });

    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        contact.submit();
    })?;

    log::debug(WIDGET, "bound");
    Ok(())
}
