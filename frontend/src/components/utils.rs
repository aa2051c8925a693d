use super::super::{Model, Msg};
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// First file of a file input, if one was picked.
pub fn chosen_file(e: &Event) -> Option<GlooFile> {
    let input: HtmlInputElement = e.target_unchecked_into();
    input
        .files()
        .and_then(|files| files.item(0))
        .map(GlooFile::from)
}

pub fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    let textarea: HtmlTextAreaElement = e.target_unchecked_into();
    textarea.value()
}

pub fn file_label(file: Option<&GlooFile>) -> String {
    file.map(|f| f.name())
        .unwrap_or_else(|| "No file chosen".to_string())
}

pub fn render_notice(notice: Option<&str>, link: &Scope<Model>) -> Html {
    if let Some(message) = notice {
        html! {
            <div class="error-message" role="alert">
                <p>{ message }</p>
                <button
                    class="dismiss-btn"
                    title="Dismiss"
                    onclick={link.callback(|_| Msg::DismissNotice)}
                >
                    {"×"}
                </button>
            </div>
        }
    } else {
        html! {}
    }
}
