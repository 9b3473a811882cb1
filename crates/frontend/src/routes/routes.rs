use crate::domain::a002_transaction::ui::list::CustomerTransactionsList;
use crate::layout::navbar::Navbar;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page-title">"Customers Transactions"</h1>
            <CustomerTransactionsList />
        </section>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main>
                <Routes fallback=|| view! { <p class="error">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
