use crate::route::Page;
use yew::prelude::*;

const NAV: [(Page, &str); 3] = [
    (Page::Checker, "Home"),
    (Page::About, "About"),
    (Page::Contact, "Contact"),
];

/// Renders the navigation bar
pub fn render_header(active: Page) -> Html {
    html! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="logo">
                    <a href="/"><span class="logo-icon">{"✓"}</span>{" Exam Checker"}</a>
                </h1>
                <div class="nav-links">
                    { for NAV.iter().map(|(page, title)| html! {
                        <a
                            href={page.path()}
                            class={classes!("nav-link", (*page == active).then_some("active"))}
                        >
                            { *title }
                        </a>
                    })}
                </div>
            </div>
        </nav>
    }
}
