use yew::prelude::*;

const FEATURES: [(&str, &str, &str); 6] = [
    ("⚡", "Fast Evaluation", "Process hundreds of exams in minutes instead of hours"),
    ("🧠", "AI-Powered Analysis", "Intelligent semantic understanding of student answers"),
    ("📊", "Detailed Reports", "Get comprehensive insights on student performance"),
    ("📝", "Multiple Formats", "Support for PDF uploads and manual text entry"),
    ("🔍", "Keyword Detection", "Automatically identify key concepts in answers"),
    ("📱", "Mobile Friendly", "Grade exams from any device, anywhere"),
];

const STEPS: [(&str, &str); 3] = [
    ("Upload Exams", "Upload student answer PDFs and ideal answer key"),
    ("AI Analysis", "Answers are scored for keywords, grammar, and semantic understanding"),
    ("Review Results", "Get detailed scores for each student answer"),
];

pub fn render_landing() -> Html {
    html! {
        <div class="page landing">
            <section class="hero">
                <h2>{"Grade exams in minutes, not hours"}</h2>
                <p class="subtitle">{"Upload answer sheets or paste answers and get scored feedback instantly."}</p>
                <a href="/examchecker" class="check-btn">{"Get Started"}</a>
            </section>

            <section id="features" class="features">
                <h2>{"Why Choose Exam Checker?"}</h2>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(icon, title, text)| html! {
                        <div class="feature-card">
                            <span class="feature-icon">{ *icon }</span>
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </div>
                    })}
                </div>
            </section>

            <section id="how-it-works" class="steps">
                <h2>{"How It Works"}</h2>
                <ol>
                    { for STEPS.iter().map(|(title, text)| html! {
                        <li><strong>{ *title }</strong>{" "}{ *text }</li>
                    })}
                </ol>
            </section>
        </div>
    }
}

pub fn render_about() -> Html {
    html! {
        <div class="page card">
            <div class="card-header">
                <h2>{"About Exam Checker"}</h2>
                <p class="subtitle">{"Revolutionizing the way educators grade exams"}</p>
            </div>
            <div class="card-body">
                <h3>{"Key Features"}</h3>
                <ul>
                    <li><strong>{"PDF Processing:"}</strong>{" upload typed answer sheets and an ideal answer key."}</li>
                    <li><strong>{"OCR Technology:"}</strong>{" handwritten sheets are read before scoring."}</li>
                    <li><strong>{"Manual Input:"}</strong>{" paste answers, keywords and a model answer directly."}</li>
                    <li><strong>{"Keyword Analysis:"}</strong>{" checks that important terms appear."}</li>
                    <li><strong>{"Semantic Evaluation:"}</strong>{" compares meaning against the model answer."}</li>
                    <li><strong>{"Grammar Checking:"}</strong>{" penalises language errors."}</li>
                </ul>
            </div>
        </div>
    }
}

pub fn render_contact() -> Html {
    html! {
        <div class="page card">
            <div class="card-header">
                <h2>{"Contact Us"}</h2>
                <p class="subtitle">{"Get in touch with our team for support or inquiries"}</p>
            </div>
            <div class="card-body contact-list">
                <p><span class="label-icon">{"📧"}</span>{" Email: "}<a href="mailto:support@examchecker.com">{"support@examchecker.com"}</a></p>
                <p><span class="label-icon">{"📞"}</span>{" Phone: +1 (555) 123-4567"}</p>
                <p><span class="label-icon">{"🏢"}</span>{" Office: 123 Education Lane, Learning City, ED 54321"}</p>
            </div>
        </div>
    }
}
