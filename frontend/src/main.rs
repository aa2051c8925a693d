mod api;
mod components;
mod config;
mod route;

use std::rc::Rc;

use api::GlooEvaluationClient;
use components::handlers;
use components::header::render_header;
use components::manual_form::render_manual_form;
use components::mode_tabs::render_mode_tabs;
use components::pages::{render_about, render_contact, render_landing};
use components::document_form::render_document_form;
use components::results::render_results;
use components::utils::{debounce, render_notice};
use config::ApiConfig;
use route::Page;
use gloo_file::File as GlooFile;
use shared::{Completion, EvaluationMode, ExamSession};
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // Mode
    SetMode(EvaluationMode),

    // Document form
    StudentFileChosen(Option<GlooFile>),
    IdealFileChosen(Option<GlooFile>),
    ToggleHandwritten,

    // Manual form
    SetModelAnswer(String),
    SetKeywords(String),
    AddAnswer,
    UpdateAnswer(usize, String),
    RemoveAnswer(usize),

    // Submission
    Evaluate,
    EvaluationFinished(Completion),
    Reset,
    DismissNotice,
}

// Main component
pub struct Model {
    page: Page,
    session: ExamSession<GlooFile>,
    notice: Option<String>,
    client: Rc<GlooEvaluationClient>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = ApiConfig::default();
        log::info!("Evaluation service at {}", config.base_url);

        Self {
            page: Page::current(),
            session: ExamSession::new(),
            notice: None,
            client: Rc::new(GlooEvaluationClient::new(config)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetMode(mode) => {
                self.session.set_mode(mode);
                true
            }

            Msg::StudentFileChosen(file) => {
                self.session.set_student_file(file);
                true
            }
            Msg::IdealFileChosen(file) => {
                self.session.set_ideal_file(file);
                true
            }
            Msg::ToggleHandwritten => {
                self.session.toggle_handwritten();
                true
            }

            Msg::SetModelAnswer(text) => {
                self.session.set_model_answer(text);
                true
            }
            Msg::SetKeywords(text) => {
                self.session.set_keywords(text);
                true
            }
            Msg::AddAnswer => {
                self.session.add_answer();
                true
            }
            Msg::UpdateAnswer(index, text) => self.session.update_answer(index, text),
            Msg::RemoveAnswer(index) => self.session.remove_answer(index),

            Msg::Evaluate => handlers::handle_evaluate(self, ctx),
            Msg::EvaluationFinished(completion) => {
                handlers::handle_evaluation_finished(self, completion)
            }
            Msg::Reset => handlers::handle_reset(self),
            Msg::DismissNotice => {
                self.notice = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header(self.page) }

                {
                    match self.page {
                        Page::Landing => render_landing(),
                        Page::Checker => self.render_checker(ctx),
                        Page::About => render_about(),
                        Page::Contact => render_contact(),
                    }
                }

                <footer class="app-footer">
                    <p>{"Exam Checker | Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

// Rendering methods
impl Model {
    fn render_checker(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let loading = self.session.is_loading();

        html! {
            <main class="card">
                <div class="card-header">
                    <h2>{"Automated Exam Evaluation"}</h2>
                    <p class="subtitle">{"AI-powered analysis for accurate and efficient grading"}</p>
                </div>

                { render_mode_tabs(self.session.mode(), link) }

                <div class="card-body">
                    {
                        match self.session.mode() {
                            EvaluationMode::Document => render_document_form(self.session.document(), link),
                            EvaluationMode::Manual => render_manual_form(self.session.manual(), link),
                        }
                    }

                    { render_notice(self.notice.as_deref(), link) }

                    <div class="button-group">
                        <button
                            class={classes!("check-btn", loading.then_some("loading"))}
                            disabled={loading}
                            onclick={debounce(300, {
                                let link = link.clone();
                                move || link.send_message(Msg::Evaluate)
                            })}
                        >
                            {
                                if loading {
                                    html! { <><span class="spinner"></span>{" Processing..."}</> }
                                } else {
                                    html! { <><span class="btn-icon">{"✓"}</span>{" Check Answers"}</> }
                                }
                            }
                        </button>
                        <button class="reset-btn" onclick={link.callback(|_| Msg::Reset)}>
                            <span class="btn-icon">{"↺"}</span>{" Reset"}
                        </button>
                    </div>
                </div>

                { render_results(&self.session.rows()) }
            </main>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
