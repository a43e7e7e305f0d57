//! Top navigation bar with brand and page links.

use leptos::prelude::*;

/// Navbar shown on every page.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                "RealEstate Analyzer"
            </a>
            <div class="navbar__links">
                <a href="/" class="navbar__link">
                    "Home"
                </a>
                <a href="/about" class="navbar__link">
                    "About"
                </a>
            </div>
        </nav>
    }
}
