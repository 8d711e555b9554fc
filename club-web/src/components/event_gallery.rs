//! Past events gallery, three cards per slide

use leptos::prelude::*;
use lib_site::{EventRecord, PAST_EVENTS};

use crate::state::page::use_page_context;

#[component]
pub fn EventGallery() -> impl IntoView {
    let carousel = use_page_context().carousel;

    let cards = move || {
        let c = carousel.get();
        c.page_items(&PAST_EVENTS[..], c.page())
            .iter()
            .map(|event| view! { <EventCard event=event/> })
            .collect_view()
    };

    let dots = move || {
        (0..carousel.with(|c| c.total_slides()))
            .map(|i| {
                view! {
                    <button
                        class="dot"
                        class:active=move || carousel.with(|c| c.page() == i)
                        aria-label=format!("Go to slide {}", i + 1)
                        on:click=move |_| carousel.update(|c| {
                            c.go_to(i);
                        })
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="gallery">
            <div class="gallery-header">
                <h2 class="section-title">"📸 Past Events"</h2>
                <div class="gallery-controls">
                    <button
                        class="carousel-btn"
                        aria-label="Previous slide"
                        disabled=move || !carousel.with(|c| c.can_prev())
                        on:click=move |_| carousel.update(|c| {
                            c.prev();
                        })
                    >
                        "‹"
                    </button>
                    <button
                        class="carousel-btn"
                        aria-label="Next slide"
                        disabled=move || !carousel.with(|c| c.can_next())
                        on:click=move |_| carousel.update(|c| {
                            c.next();
                        })
                    >
                        "›"
                    </button>
                </div>
            </div>
            <div class="gallery-grid">{cards}</div>
            <div class="gallery-dots">{dots}</div>
        </div>
    }
}

#[component]
fn EventCard(event: &'static EventRecord) -> impl IntoView {
    let page = use_page_context();
    let (tags, hidden) = event.tech_preview();

    view! {
        <article class="event-card">
            <div class="event-card-top">
                <span class=format!("badge {}", event.category.badge_class())>
                    {event.category.label()}
                </span>
                <span class="rating">{format!("★ {:.1}", event.rating)}</span>
            </div>
            <h3>{event.title}</h3>
            <p class="muted">{event.short_description}</p>
            <div class="event-meta">
                <span>{event.short_date()}</span>
                <span>{format!("{} participants", event.participants)}</span>
            </div>
            <div class="tags">
                {tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                {(hidden > 0).then(|| view! { <span class="tag more">{format!("+{hidden}")}</span> })}
            </div>
            <button class="btn btn-outline" on:click=move |_| page.open_event(event.id)>
                "View Details"
            </button>
        </article>
    }
}
