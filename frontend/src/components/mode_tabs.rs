use super::super::{Model, Msg};
use shared::EvaluationMode;
use strum::IntoEnumIterator;
use yew::html::Scope;
use yew::prelude::*;

pub fn render_mode_tabs(active: EvaluationMode, link: &Scope<Model>) -> Html {
    html! {
        <div class="tabs">
            { for EvaluationMode::iter().map(|mode| html! {
                <button
                    key={mode.to_string()}
                    class={classes!("tab-btn", (mode == active).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetMode(mode))}
                >
                    { mode.title() }
                </button>
            })}
        </div>
    }
}
