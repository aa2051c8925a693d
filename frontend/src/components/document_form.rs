use super::super::{Model, Msg};
use super::utils::{chosen_file, file_label};
use gloo_file::File as GlooFile;
use shared::DocumentSubmission;
use yew::html::Scope;
use yew::prelude::*;

pub fn render_document_form(document: &DocumentSubmission<GlooFile>, link: &Scope<Model>) -> Html {
    html! {
        <>
            { render_file_slot(
                "student-pdf",
                "Upload Student Answers PDF:",
                document.student_file.as_ref(),
                link.callback(|e: Event| Msg::StudentFileChosen(chosen_file(&e))),
            ) }
            { render_file_slot(
                "ideal-pdf",
                "Upload Ideal Answers PDF:",
                document.ideal_file.as_ref(),
                link.callback(|e: Event| Msg::IdealFileChosen(chosen_file(&e))),
            ) }

            <div class="form-group checkbox-group">
                <label class="checkbox-container">
                    <input
                        type="checkbox"
                        checked={document.handwritten}
                        onchange={link.callback(|_| Msg::ToggleHandwritten)}
                    />
                    <span class="checkmark"></span>
                    {"This is a handwritten student answer PDF (use OCR)"}
                </label>
            </div>
        </>
    }
}

fn render_file_slot(
    id: &'static str,
    label: &'static str,
    file: Option<&GlooFile>,
    onchange: Callback<Event>,
) -> Html {
    html! {
        <div class="form-group">
            <label class="form-label">
                <span class="label-icon">{"📄"}</span>{" "}{ label }
            </label>
            <div class="file-input-container">
                <input
                    type="file"
                    id={id}
                    class="file-input"
                    accept="application/pdf"
                    onchange={onchange}
                />
                <label for={id} class="file-label">
                    <span class="file-icon">{"📎"}</span>{" Choose File"}
                </label>
                <span class="file-name">{ file_label(file) }</span>
            </div>
        </div>
    }
}
