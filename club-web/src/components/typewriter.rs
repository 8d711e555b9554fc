//! Hero phrase typed out one character at a time

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_site::Typewriter;

#[component]
pub fn HeroTypewriter() -> impl IntoView {
    let text = RwSignal::new(String::new());

    leptos::task::spawn_local(async move {
        let mut typewriter = Typewriter::default();
        loop {
            let frame = typewriter.tick();
            // Signal disposed: the hero has been unmounted.
            if text.try_set(frame.text).is_some() {
                break;
            }
            TimeoutFuture::new(frame.delay_ms).await;
        }
    });

    view! {
        <span class="typewriter">
            {move || text.get()}
            <span class="cursor">"|"</span>
        </span>
    }
}
