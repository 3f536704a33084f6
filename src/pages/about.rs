use leptos::*;
use leptos_router::A;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="container about-page">
            <header>
                <h1>"EM Lab"</h1>
                <p class="tagline">"About this project"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back to the lab"</A>
            </nav>

            <section class="about-section">
                <h2>"What it is"</h2>
                <p>
                    "EM Lab is a small virtual laboratory for introductory electrostatics. "
                    "Instead of reading about field lines, you drop charges onto a canvas and "
                    "watch the field rearrange as you drag them around."
                </p>
            </section>

            <section class="about-section">
                <h2>"How it works"</h2>
                <p>
                    "The simulations are written in Rust and compiled to WebAssembly, so all the "
                    "physics runs in your browser. Your input values are remembered in local "
                    "storage on this device only."
                </p>
                <p>
                    "The one exception is the "
                    <A href="/feedback">"feedback form"</A>
                    ", which sends what you type to a small feedback server."
                </p>
            </section>

            <nav class="back-nav bottom">
                <A href="/">"< Back to the lab"</A>
            </nav>

            <footer>
                <p>"AGPL-3.0"</p>
            </footer>
        </main>
    }
}
