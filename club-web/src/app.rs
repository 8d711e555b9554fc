//! Club site app shell
//!
//! The landing page is the only route; everything else is a 404.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::Particles;
use crate::pages::LandingPage;
use crate::state::intake::provide_intake_context;
use crate::state::page::provide_page_context;

#[component]
pub fn App() -> impl IntoView {
    provide_page_context();
    provide_intake_context();

    view! {
        <Router>
            <div class="app-container">
                <Particles/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
