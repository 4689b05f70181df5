//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{Footer, NavBar};
use crate::pages::{ContactPage, HomePage, PricingPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <NavBar />
            <main class="app">
                <Routes fallback=|| view! { <p>"Siden finnes ikke"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/priser") view=PricingPage />
                    <Route path=path!("/kontakt") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
