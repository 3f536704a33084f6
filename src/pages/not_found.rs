use leptos::*;
use leptos_router::{use_location, A};

/// Where a lost visitor most likely wanted to go
const SUGGESTIONS: [(&str, &str, &str); 3] = [
    ("/", "Charge sandbox", "place charges and watch the field"),
    ("/widgets", "Widgets", "Coulomb force and coordinate conversions"),
    ("/feedback", "Feedback", "tell us which experiment is missing"),
];

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <main class="container about-page">
            <header>
                <h1>"404"</h1>
                <p class="tagline">
                    "No experiment at " <code>{move || location.pathname.get()}</code>
                </p>
            </header>

            <section class="about-section">
                <h2>"Try one of these"</h2>
                <ul class="lab-links">
                    {SUGGESTIONS
                        .iter()
                        .map(|&(href, title, blurb)| view! {
                            <li>
                                <A href=href>{title}</A>
                                " \u{00b7} " {blurb}
                            </li>
                        })
                        .collect_view()}
                </ul>
            </section>
        </main>
    }
}
