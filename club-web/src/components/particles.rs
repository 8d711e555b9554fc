//! Floating background particles

use leptos::prelude::*;

const PARTICLE_COUNT: usize = 30;

#[component]
pub fn Particles() -> impl IntoView {
    let particles = (0..PARTICLE_COUNT)
        .map(|_| {
            let random = js_sys::Math::random;
            let size = random() * 3.0 + 1.0;
            let style = format!(
                "left: {:.2}%; top: {:.2}%; width: {size:.2}px; height: {size:.2}px; \
                 animation-duration: {:.2}s; animation-delay: {:.2}s;",
                random() * 100.0,
                random() * 100.0,
                random() * 15.0 + 10.0,
                random() * 5.0,
            );
            view! { <div class="particle" style=style></div> }
        })
        .collect_view();

    view! {
        <div class="particles" aria-hidden="true">
            {particles}
        </div>
    }
}
