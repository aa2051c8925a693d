use super::super::{Model, Msg};
use super::utils::{input_value, textarea_value};
use shared::ManualSubmission;
use yew::html::Scope;
use yew::prelude::*;

pub fn render_manual_form(manual: &ManualSubmission, link: &Scope<Model>) -> Html {
    let removable = manual.answers.len() > 1;

    html! {
        <>
            <div class="form-group">
                <label class="form-label">{"Model Answer:"}</label>
                <textarea
                    class="textarea"
                    rows="3"
                    placeholder="Enter the model answer here..."
                    value={manual.model_answer.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetModelAnswer(textarea_value(&e)))}
                />
            </div>

            <div class="form-group">
                <label class="form-label">{"Keywords:"}</label>
                <input
                    type="text"
                    class="text-input"
                    placeholder="Enter keywords separated by commas"
                    value={manual.keywords.clone()}
                    oninput={link.callback(|e: InputEvent| Msg::SetKeywords(input_value(&e)))}
                />
                <small class="input-hint">{"Important terms that should appear in correct answers"}</small>
            </div>

            <div class="form-group">
                <label class="form-label">{"Student Answers:"}</label>
                { for manual.answers.iter().enumerate().map(|(idx, answer)| html! {
                    <div class="student-answer" key={idx.to_string()}>
                        <div class="answer-header">
                            <span class="answer-number">{ format!("Student Answer {}", idx + 1) }</span>
                            if removable {
                                <button
                                    class="remove-btn"
                                    title="Remove this answer"
                                    onclick={link.callback(move |_| Msg::RemoveAnswer(idx))}
                                >
                                    {"×"}
                                </button>
                            }
                        </div>
                        <textarea
                            class="textarea"
                            rows="3"
                            placeholder="Type or paste student answer here..."
                            value={answer.to_string()}
                            oninput={link.callback(move |e: InputEvent| Msg::UpdateAnswer(idx, textarea_value(&e)))}
                        />
                    </div>
                })}
                <button class="add-btn" onclick={link.callback(|_| Msg::AddAnswer)}>
                    <span class="btn-icon">{"+"}</span>{" Add Another Answer"}
                </button>
            </div>
        </>
    }
}
