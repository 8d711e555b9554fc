//! Navigation bar with the active-section highlight and mobile menu

use leptos::prelude::*;
use lib_site::{NavItem, NAV_ITEMS};

use crate::services::use_scroll_service;
use crate::state::page::use_page_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let page = use_page_context();
    let scroll = use_scroll_service();

    let go = move |item: NavItem| {
        page.navigate(&item);
        scroll.scroll_to_section(item.section);
    };

    view! {
        <header class="navbar">
            <div class="nav-inner">
                <button class="brand" on:click=move |_| go(NAV_ITEMS[0])>
                    <span class="brand-mark">"APC"</span>
                    <span class="brand-name">"Programming Club"</span>
                </button>

                <nav class="nav-links">
                    {NAV_ITEMS
                        .into_iter()
                        .map(move |item| view! {
                            <button
                                class="nav-link"
                                class:active=move || page.is_active(item.section)
                                on:click=move |_| go(item)
                            >
                                {item.label}
                            </button>
                        })
                        .collect_view()}
                </nav>

                <button class="btn join-btn" on:click=move |_| page.open_registration()>
                    "Join Now"
                </button>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| page.toggle_menu()
                >
                    {move || if page.menu_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || page.menu_open()>
                <div class="mobile-menu">
                    {NAV_ITEMS
                        .into_iter()
                        .map(move |item| view! {
                            <button class="mobile-link" on:click=move |_| go(item)>
                                {item.label}
                            </button>
                        })
                        .collect_view()}
                    <button class="btn btn-block" on:click=move |_| page.open_registration()>
                        "Join Programming Club"
                    </button>
                </div>
            </Show>
        </header>
    }
}
