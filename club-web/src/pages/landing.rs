//! Landing page: hero, stats, next event, gallery and join section.

use leptos::prelude::*;
use lib_site::{Section, STATS, UPCOMING_EVENT};

use crate::components::{
    EventGallery, EventModal, Footer, HeroTypewriter, Navbar, RegistrationModal,
};
use crate::services::provide_scroll_service;
use crate::state::page::use_page_context;

#[component]
pub fn LandingPage() -> impl IntoView {
    let page = use_page_context();
    let scroll = provide_scroll_service(page);

    // Runs after the sections are in the DOM.
    Effect::new(move || scroll.start());
    on_cleanup(move || scroll.stop());

    let event = &UPCOMING_EVENT;

    view! {
        <Navbar/>

        <main class="landing">
            <section id="hero" class="hero">
                <span class="pill">"🚀 Building the future, one line at a time"</span>
                <h1 class="hero-title">
                    "Code Your"
                    <HeroTypewriter/>
                </h1>
                <p class="hero-sub">
                    "Join our vibrant community of developers, innovators and problem-solvers. \
                     Transform ideas into reality through code."
                </p>
                <button
                    class="btn btn-lg"
                    on:click=move |_| scroll.scroll_to_section(Section::Upcoming)
                >
                    "Explore Events →"
                </button>
            </section>

            <section id="stats" class="stats reveal">
                {STATS
                    .iter()
                    .map(|stat| view! {
                        <div class="stat">
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section id="upcoming" class="upcoming reveal">
                <h2 class="section-title">"🎯 Next Event"</h2>
                <div class="card upcoming-card">
                    <div class="upcoming-head">
                        <div>
                            <h3>{event.title}</h3>
                            <p class="muted">{event.subtitle}</p>
                        </div>
                        <span class="spots">{format!("{} spots left", event.spots_left())}</span>
                    </div>
                    <div class="upcoming-meta">
                        <span>{event.date}</span>
                        <span>{event.time}</span>
                        <span>{event.location}</span>
                        <span>{format!("{}/{}", event.registered, event.spots)}</span>
                    </div>
                    <p>{event.description}</p>
                    <button class="btn btn-block" on:click=move |_| page.open_registration()>
                        "Register Now"
                    </button>
                </div>
            </section>

            <section id="past" class="past reveal">
                <EventGallery/>
            </section>

            <section id="join-us" class="join-us reveal">
                <span class="pill">"Ready to start coding?"</span>
                <h2>"Join Our " <span class="accent">"Community"</span></h2>
                <p>"Be part of something bigger. Learn, build and grow with passionate developers."</p>
                <button class="btn btn-lg" on:click=move |_| page.open_registration()>
                    "✨ Start Your Journey"
                </button>
            </section>
        </main>

        <Footer/>
        <EventModal/>
        <RegistrationModal/>
    }
}
