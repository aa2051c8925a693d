use super::super::{Model, Msg};
use shared::{Completion, EvaluationOutcome};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_evaluate(model: &mut Model, ctx: &Context<Model>) -> bool {
    let pending = match model.session.begin() {
        Ok(pending) => pending,
        Err(err) => {
            log::warn!("Evaluation not started: {}", err);
            model.notice = Some(err.user_message());
            return true;
        }
    };

    model.notice = None;

    spawn_local({
        let link = ctx.link().clone();
        let client = model.client.clone();

        async move {
            let completion = pending.dispatch(&*client).await;
            link.send_message(Msg::EvaluationFinished(completion));
        }
    });

    true
}

pub fn handle_evaluation_finished(model: &mut Model, completion: Completion) -> bool {
    let outcome = model.session.complete(completion);
    match &outcome {
        EvaluationOutcome::Discarded => false,
        _ => {
            model.notice = outcome.notice();
            true
        }
    }
}

pub fn handle_reset(model: &mut Model) -> bool {
    model.session.reset();
    model.notice = None;
    true
}
