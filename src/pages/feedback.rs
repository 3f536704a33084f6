use crate::components::{FeedbackForm, FeedbackList};
use leptos::*;
use leptos_router::{use_query_map, A};

#[component]
pub fn FeedbackPage() -> impl IntoView {
    // The received list is for whoever runs the server, so it stays off the default view
    let query = use_query_map();
    let show_list = move || query.with(|q| q.get("view").map(String::as_str) == Some("all"));

    view! {
        <main class="container">
            <header>
                <h1>"Feedback"</h1>
                <p class="tagline">"Questions, ideas, bug reports"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back to the lab"</A>
            </nav>

            <section class="interactive">
                <FeedbackForm/>
            </section>

            <Show when=show_list>
                <section class="interactive">
                    <FeedbackList/>
                </section>
            </Show>
        </main>
    }
}
