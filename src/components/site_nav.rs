use leptos::prelude::*;

const LINKS: [(&str, &str); 3] = [
    ("/", "Home"),
    ("/analyze", "Analyze My Swing"),
    ("/health", "Service Status"),
];

#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <header class="header">
            <a href="/" class="logo">
                <span class="logo-mark">"SwingPro"</span>
                <span class="logo-tagline">"Swing like the pros"</span>
            </a>
            <nav class="nav">
                <ul class="nav-list">
                    {LINKS.into_iter().map(|(href, label)| view! {
                        <li class="nav-item">
                            <a href=href class="nav-link">{label}</a>
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
            </nav>
        </header>
    }
}
