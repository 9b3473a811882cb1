use crate::shared::icons::icon;
use leptos::prelude::*;

/// Top navigation bar.
///
/// Logout is a stub: there is no session to terminate in this application.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <ul>
                <li>
                    <a href="/">{icon("home")}" Home"</a>
                </li>
                <li>
                    <button class="btn btn-secondary">
                        {icon("logout")}
                        " Logout"
                    </button>
                </li>
            </ul>
        </nav>
    }
}
