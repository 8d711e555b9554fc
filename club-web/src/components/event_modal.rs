//! Read-only detail modal for a past event

use leptos::prelude::*;
use lib_site::{EventExtra, EventRecord};

use crate::state::page::use_page_context;

#[component]
pub fn EventModal() -> impl IntoView {
    let page = use_page_context();

    move || {
        page.viewer.with(|v| v.selected()).map(|event| {
            view! {
                <div class="modal-backdrop" on:click=move |_| page.close_event()>
                    <div class="modal event-detail" on:click=|ev| ev.stop_propagation()>
                        <button
                            class="modal-close"
                            aria-label="Close"
                            on:click=move |_| page.close_event()
                        >
                            "✕"
                        </button>
                        <EventDetail event=event/>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn EventDetail(event: &'static EventRecord) -> impl IntoView {
    view! {
        <span class=format!("badge {}", event.category.badge_class())>
            {event.category.label()}
        </span>
        <h2>{event.title}</h2>
        <div class="event-meta">
            <span>{event.date}</span>
            <span>{event.duration}</span>
            <span>{event.location}</span>
            <span>{format!("{} participants", event.participants)}</span>
            <span class="rating">{format!("★ {:.1}", event.rating)}</span>
        </div>
        <p>{event.full_description}</p>

        <h3>"Highlights"</h3>
        <ul class="highlights">
            {event.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
        </ul>

        <h3>"Technologies"</h3>
        <div class="tags">
            {event.technologies.iter().map(|t| view! { <span class="tag">{*t}</span> }).collect_view()}
        </div>

        {extra_details(event.extra)}
    }
}

fn extra_details(extra: EventExtra) -> AnyView {
    match extra {
        EventExtra::Winners { first, second, third } => view! {
            <section class="event-extra">
                <h3>"🏆 Winners"</h3>
                <ol class="winners">
                    <li>{format!("🥇 {first}")}</li>
                    <li>{format!("🥈 {second}")}</li>
                    <li>{format!("🥉 {third}")}</li>
                </ol>
            </section>
        }
        .into_any(),
        EventExtra::Projects { instructor, projects } => view! {
            <section class="event-extra">
                <h3>"Instructor"</h3>
                <p>{instructor}</p>
                <h3>"Projects Built"</h3>
                <ul>{projects.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}</ul>
            </section>
        }
        .into_any(),
        EventExtra::Speakers(speakers) => view! {
            <section class="event-extra">
                <h3>"🎤 Speakers"</h3>
                <ul>{speakers.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}</ul>
            </section>
        }
        .into_any(),
        EventExtra::Achievements { total_prs, repositories, new_contributors } => view! {
            <section class="event-extra">
                <h3>"Achievements"</h3>
                <div class="achievements">
                    <div><strong>{total_prs}</strong><span>"PRs opened"</span></div>
                    <div><strong>{repositories}</strong><span>"Repositories"</span></div>
                    <div><strong>{new_contributors}</strong><span>"New contributors"</span></div>
                </div>
            </section>
        }
        .into_any(),
        EventExtra::None => ().into_any(),
    }
}
