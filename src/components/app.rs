use crate::components::{ChargeSandbox, PotentialGraph};
use crate::storage::LabSettings;
use leptos::*;
use leptos_router::A;

/// Lab home: the charge sandbox and the potential graph.
#[component]
pub fn App() -> impl IntoView {
    let settings = LabSettings::use_settings();

    view! {
        <main class="container">
            <header>
                <h1>"EM Lab"</h1>
                <p class="tagline">"A virtual electromagnetics laboratory"</p>
            </header>

            <section class="intro">
                <h2>"Charges and Fields"</h2>
                <p>
                    "Every charge pushes or pulls on every other charge. Place a few charges below "
                    "and switch on the field view to see which way a small positive test charge "
                    "would be pushed at each point."
                </p>
                <p>
                    "Further down, the potential graph shows how the electric potential of a single "
                    "point charge falls off with distance. The "
                    <A href="/theory">"theory page"</A>
                    " has the formulas behind both."
                </p>
            </section>

            <section class="interactive">
                <h2>"Try It Yourself"</h2>
                <div class="model-container">
                    <ChargeSandbox/>
                    <PotentialGraph/>
                </div>
                <button class="reset-button" on:click=move |_| settings.reset()>
                    "Reset inputs to defaults"
                </button>
            </section>

            <footer>
                <p>"Runs entirely in your browser. Only feedback you choose to send leaves the page."</p>
            </footer>
        </main>
    }
}
