//! Registration modal
//!
//! Inputs carry the draft field name in `name`; every edit goes through
//! `FieldChange::from_input` so the DOM and the draft agree on names.

use leptos::prelude::*;
use lib_intake::{
    AcademicYear, ExperienceLevel, Field, FieldChange, FieldInputError, Interest,
    RegistrationDraft,
};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::services::GlooTransport;
use crate::state::intake::{use_intake_context, IntakeContext};
use crate::state::page::use_page_context;
use crate::utils::constants::REGISTRATION_URL;

fn read_change(ev: &web_sys::Event) -> Result<FieldChange, FieldInputError> {
    let target = event_target::<web_sys::Element>(ev);
    let name = target.get_attribute("name").unwrap_or_default();
    let checked = target
        .dyn_ref::<HtmlInputElement>()
        .is_some_and(|input| input.type_() == "checkbox" && input.checked());

    FieldChange::from_input(&name, &event_target_value(ev), checked)
}

fn on_input(intake: IntakeContext, ev: &web_sys::Event) {
    match read_change(ev) {
        Ok(change) => intake.apply(change),
        Err(e) => log::warn!("Ignoring form input: {e}"),
    }
}

fn text_value(draft: &RegistrationDraft, field: Field) -> String {
    match field {
        Field::FullName => draft.full_name.clone(),
        Field::Email => draft.email.clone(),
        Field::Phone => draft.phone.clone(),
        Field::Branch => draft.branch.clone(),
        Field::GithubProfile => draft.github_profile.clone(),
        _ => String::new(),
    }
}

#[component]
pub fn RegistrationModal() -> impl IntoView {
    let page = use_page_context();
    let intake = use_intake_context();

    let close = move || {
        intake.reset();
        page.close_registration();
    };

    view! {
        <Show when=move || page.registration_open()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal registration" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <div>
                            <h2>"Join Programming Club"</h2>
                            <p class="muted">"Start your coding journey with us!"</p>
                        </div>
                        <button class="modal-close" aria-label="Close" on:click=move |_| close()>
                            "✕"
                        </button>
                    </div>
                    <Show when=move || intake.is_success() fallback=|| view! { <RegistrationForm/> }>
                        <div class="success">
                            <div class="success-icon">"✓"</div>
                            <h3>"Welcome to the Club! 🎉"</h3>
                            <p class="muted">"You'll receive a confirmation email shortly."</p>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn RegistrationForm() -> impl IntoView {
    let page = use_page_context();
    let intake = use_intake_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        intake.submit(GlooTransport::new(REGISTRATION_URL), move || {
            page.close_registration()
        });
    };

    view! {
        <form class="registration-form" novalidate=true on:submit=on_submit>
            {move || intake.failure().map(|m| view! { <div class="failure-banner" role="alert">{m}</div> })}

            <div class="form-grid">
                <TextField field=Field::FullName label="Full Name *" kind="text" placeholder="Enter your name"/>
                <TextField field=Field::Email label="Email *" kind="email" placeholder="your@email.com"/>
                <TextField field=Field::Phone label="Phone *" kind="tel" placeholder="(555) 123-4567"/>

                <div class="form-field">
                    <label for="year">"Academic Year *"</label>
                    <select
                        id="year"
                        name=Field::Year.as_str()
                        class:invalid=move || intake.error(Field::Year).is_some()
                        prop:value=move || intake.form.with(|f| f.draft().year.map(|y| y.as_str()).unwrap_or_default())
                        on:change=move |ev| on_input(intake, &ev)
                    >
                        <option value="">"Select year"</option>
                        {AcademicYear::ALL
                            .into_iter()
                            .map(|year| view! { <option value=year.as_str()>{year.label()}</option> })
                            .collect_view()}
                    </select>
                    <FieldMessage field=Field::Year/>
                </div>

                <TextField field=Field::Branch label="Branch/Major *" kind="text" placeholder="Computer Science, IT, etc."/>

                <div class="form-field">
                    <label for="experience">"Programming Experience *"</label>
                    <select
                        id="experience"
                        name=Field::Experience.as_str()
                        aria-label="Programming Experience"
                        class:invalid=move || intake.error(Field::Experience).is_some()
                        prop:value=move || intake.form.with(|f| f.draft().experience.map(|e| e.as_str()).unwrap_or_default())
                        on:change=move |ev| on_input(intake, &ev)
                    >
                        <option value="">"Select level"</option>
                        {ExperienceLevel::ALL
                            .into_iter()
                            .map(|level| view! { <option value=level.as_str()>{level.label()}</option> })
                            .collect_view()}
                    </select>
                    <FieldMessage field=Field::Experience/>
                </div>
            </div>

            <div class="form-field">
                <label>"Interests * (Select all that apply)"</label>
                <div class="interest-grid">
                    {Interest::ALL
                        .into_iter()
                        .map(|interest| view! {
                            <label class="interest-option">
                                <input
                                    type="checkbox"
                                    name=Field::Interests.as_str()
                                    value=interest.label()
                                    prop:checked=move || intake.form.with(|f| f.draft().has_interest(interest))
                                    on:change=move |ev| on_input(intake, &ev)
                                />
                                <span>{interest.label()}</span>
                            </label>
                        })
                        .collect_view()}
                </div>
                <FieldMessage field=Field::Interests/>
            </div>

            <TextField field=Field::GithubProfile label="GitHub Profile (Optional)" kind="url" placeholder="https://github.com/username"/>

            <label class="attended-option">
                <input
                    type="checkbox"
                    name=Field::AttendedBefore.as_str()
                    prop:checked=move || intake.form.with(|f| f.draft().attended_before)
                    on:change=move |ev| on_input(intake, &ev)
                />
                <div>
                    <span>"I've attended programming club events before"</span>
                    <p class="muted">"Check if you're already familiar with our community"</p>
                </div>
            </label>

            <button type="submit" class="btn btn-block" disabled=move || intake.is_submitting()>
                {move || if intake.is_submitting() { "Joining..." } else { "Join Programming Club" }}
            </button>
        </form>
    }
}

#[component]
fn TextField(
    field: Field,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let intake = use_intake_context();

    view! {
        <div class="form-field">
            <label for=field.as_str()>{label}</label>
            <input
                id=field.as_str()
                name=field.as_str()
                type=kind
                placeholder=placeholder
                class:invalid=move || intake.error(field).is_some()
                prop:value=move || intake.form.with(|f| text_value(f.draft(), field))
                on:input=move |ev| on_input(intake, &ev)
            />
            <FieldMessage field=field/>
        </div>
    }
}

#[component]
fn FieldMessage(field: Field) -> impl IntoView {
    let intake = use_intake_context();

    move || intake.error(field).map(|m| view! { <p class="field-error">{m}</p> })
}
