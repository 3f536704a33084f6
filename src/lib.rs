pub mod analytics;
pub mod components;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod feedback;
pub mod pages;
pub mod physics;
pub mod sandbox;
pub mod storage;

use components::{App, NavBar};
use leptos::*;
use leptos_router::*;
use pages::{AboutPage, FeedbackPage, NotFoundPage, TheoryPage, WidgetsPage};
use storage::LabSettings;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Workaround for Leptos 0.6 router not re-rendering on browser back/forward.
///
/// The router updates its location signal on `popstate` but `<Routes>` doesn't
/// always re-evaluate, so reload at the new URL instead. Inputs survive through
/// localStorage; placed charges do not.
fn setup_popstate_reload() {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }) as Box<dyn Fn(web_sys::Event)>);

    if let Some(window) = web_sys::window() {
        let _ =
            window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"The lab hit an error. Try refreshing the page or resetting your inputs."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        storage::clear_settings();
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reset & Reload"</button>
                </div>
            </main>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

/// Provides the shared settings, then routes. Inside the ErrorBoundary so a
/// failure while loading them is caught.
#[component]
fn RootInner() -> impl IntoView {
    LabSettings::provide();

    view! {
        <Router>
            <NavBar/>
            <Routes>
                <Route path="/" view=App/>
                <Route path="/widgets" view=WidgetsPage/>
                <Route path="/theory" view=TheoryPage/>
                <Route path="/feedback" view=FeedbackPage/>
                <Route path="/about" view=AboutPage/>
                <Route path="/*" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    setup_popstate_reload();
    mount_to_body(Root);
}
