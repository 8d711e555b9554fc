//! Contact footer

use leptos::prelude::*;
use lib_site::NAV_ITEMS;

use crate::services::use_scroll_service;
use crate::state::page::use_page_context;
use crate::utils::constants::{
    CLUB_NAME, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_LABEL, SOCIAL_LINKS,
};

#[component]
pub fn Footer() -> impl IntoView {
    let page = use_page_context();
    let scroll = use_scroll_service();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer id="contact-us" class="footer reveal">
            <div class="footer-grid">
                <div>
                    <h3>"Contact Us"</h3>
                    <p>"Have questions or want to collaborate? Reach out to us:"</p>
                    <ul class="contact-list">
                        <li><a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a></li>
                        <li><a href=format!("tel:{CONTACT_PHONE}")>{CONTACT_PHONE_LABEL}</a></li>
                        <li>{CONTACT_ADDRESS}</li>
                    </ul>
                </div>

                <div>
                    <h3>"Quick Links"</h3>
                    <ul class="quick-links">
                        {NAV_ITEMS
                            .into_iter()
                            .map(move |item| view! {
                                <li>
                                    <button on:click=move |_| {
                                        page.navigate(&item);
                                        scroll.scroll_to_section(item.section);
                                    }>
                                        {item.label}
                                    </button>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h3>"Follow Us"</h3>
                    <div class="social-links">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(name, href)| view! { <a href=*href title=*name>{*name}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                {format!("© {year} {CLUB_NAME}. All rights reserved.")}
            </div>
        </footer>
    }
}
