use crate::components::{CoordinateWidget, CoulombWidget};
use leptos::*;
use leptos_router::A;

#[component]
pub fn WidgetsPage() -> impl IntoView {
    view! {
        <main class="container">
            <header>
                <h1>"Widgets"</h1>
                <p class="tagline">"Small calculators for everyday electrostatics"</p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back to the lab"</A>
            </nav>

            <section class="interactive">
                <div class="model-container">
                    <CoulombWidget/>
                    <CoordinateWidget/>
                </div>
            </section>
        </main>
    }
}
