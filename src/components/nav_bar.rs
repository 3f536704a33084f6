use leptos::*;
use leptos_router::{use_location, A};

/// Links shown in the top bar, in order
const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Lab"),
    ("/widgets", "Widgets"),
    ("/theory", "Theory"),
    ("/feedback", "Feedback"),
    ("/about", "About"),
];

pub(crate) fn is_active(current: &str, href: &str) -> bool {
    current == href || (href != "/" && current.starts_with(href))
}

#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <A href="/" class="nav-brand">"EM Lab"</A>
                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            let class = move || {
                                if is_active(&location.pathname.get(), href) {
                                    "nav-link active"
                                } else {
                                    "nav-link"
                                }
                            };
                            view! { <A href=href class=class>{label}</A> }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
