use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::{
    contact::{ContactForm, Field, FormRelay, FormStatus, HttpFormRelay, RelayError, Submission},
    profile::PROFILE,
};

const INPUT_CLASS: &str = "w-full px-3.5 py-2.5 rounded-lg border border-stone-200/60 dark:border-stone-700 bg-white dark:bg-stone-900 placeholder-stone-400 focus:outline-none focus:ring-2 focus:ring-stone-900/20 text-sm";

#[component]
pub fn Contact(endpoint: String) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    // one client for the lifetime of the section
    let relay = StoredValue::new(HttpFormRelay::new(endpoint));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Submission::Deliver(payload)) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        let relay = relay.get_value();
        log::debug!("sending contact form to {}", relay.endpoint());
        spawn_local(async move {
            let outcome = relay.deliver(&payload).await;
            apply_outcome(form, outcome);
        });
    };

    let value = move |field: Field| form.with(|f| f.field(field).to_string());
    let set = move |field: Field, ev: leptos::ev::Event| {
        form.update(|f| f.update_field(field, event_target_value(&ev)));
    };

    view! {
        <section id="contact" class="py-16 sm:py-20 lg:py-24 px-5 sm:px-6 lg:px-8 bg-stone-50 dark:bg-stone-900/40">
            <div class="max-w-4xl mx-auto">
                <div class="mb-12 text-center">
                    <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold tracking-tight mb-3">
                        "Get in touch"
                    </h2>
                    <p class="text-xs sm:text-sm text-stone-500 max-w-xl mx-auto">
                        "I usually reply within 24–48 hours."
                    </p>
                </div>
                <div class="grid lg:grid-cols-3 gap-6 sm:gap-8">
                    <div class="lg:col-span-2 rounded-lg border border-stone-200/60 dark:border-stone-800 bg-white/70 dark:bg-stone-950/60 p-6 sm:p-8">
                        <form on:submit=on_submit class="space-y-4" aria-live="polite">
                            // trap for bots; hidden from people and screen readers
                            <input
                                type="text"
                                name="company"
                                class="hidden"
                                tabindex="-1"
                                autocomplete="off"
                                aria-hidden="true"
                                prop:value=move || value(Field::Honeypot)
                                on:input=move |ev| set(Field::Honeypot, ev)
                            />
                            <div class="grid sm:grid-cols-2 gap-4">
                                <input
                                    required
                                    name="name"
                                    placeholder="Your name"
                                    class=INPUT_CLASS
                                    prop:value=move || value(Field::Name)
                                    on:input=move |ev| set(Field::Name, ev)
                                />
                                <input
                                    required
                                    type="email"
                                    name="email"
                                    placeholder="Email"
                                    class=INPUT_CLASS
                                    prop:value=move || value(Field::Email)
                                    on:input=move |ev| set(Field::Email, ev)
                                />
                            </div>
                            <input
                                name="subject"
                                placeholder="Subject (optional)"
                                class=INPUT_CLASS
                                prop:value=move || value(Field::Subject)
                                on:input=move |ev| set(Field::Subject, ev)
                            />
                            <textarea
                                required
                                name="message"
                                placeholder="Message"
                                rows="5"
                                class=INPUT_CLASS
                                prop:value=move || value(Field::Message)
                                on:input=move |ev| set(Field::Message, ev)
                            ></textarea>
                            <button
                                type="submit"
                                disabled=move || form.with(|f| f.is_sending())
                                class="inline-flex items-center gap-2 px-5 py-2.5 rounded-md bg-stone-900 text-white dark:bg-white dark:text-stone-900 text-sm font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                            >
                                {move || {
                                    if form.with(|f| f.is_sending()) { "Sending…" } else { "Send Message" }
                                }}
                            </button>
                            <StatusBanner status=Signal::derive(move || form.with(|f| f.status())) />
                        </form>
                    </div>
                    <div class="rounded-lg border border-stone-200/60 dark:border-stone-800 bg-white/70 dark:bg-stone-950/60 p-5 sm:p-6 space-y-3.5 text-sm">
                        <h3 class="font-semibold text-xs uppercase tracking-wider mb-3">"Links"</h3>
                        <a href=format!("mailto:{}", PROFILE.email) class="block truncate hover:underline">
                            {PROFILE.email}
                        </a>
                        <a href=PROFILE.linkedin_url target="_blank" rel="noreferrer" class="block hover:underline">
                            "LinkedIn"
                        </a>
                        <a href=PROFILE.github_url target="_blank" rel="noreferrer" class="block hover:underline">
                            "GitHub"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Hands the relay's answer to the form. The section may be gone by the time the
/// relay answers; then the answer is dropped and this returns false.
fn apply_outcome(form: RwSignal<ContactForm>, outcome: Result<(), RelayError>) -> bool {
    let applied = form.try_update(|f| f.complete(outcome)).is_some();
    if !applied {
        log::debug!("contact form disposed before relay responded; dropping outcome");
    }
    applied
}

#[component]
fn StatusBanner(status: Signal<FormStatus>) -> impl IntoView {
    move || match status.get() {
        FormStatus::Success => Some(
            view! {
                <p class="mt-3 text-sm text-green-700 bg-green-50 border border-green-200/80 rounded-md p-3 dark:text-green-300 dark:bg-green-900/30 dark:border-green-800">
                    "Thanks! Your message has been sent."
                </p>
            }
            .into_any(),
        ),
        FormStatus::Error => Some(
            view! {
                <p class="mt-3 text-sm text-red-700 bg-red-50 border border-red-200/80 rounded-md p-3 dark:text-red-300 dark:bg-red-900/30 dark:border-red-800">
                    "Please check your inputs and try again."
                </p>
            }
            .into_any(),
        ),
        FormStatus::Idle | FormStatus::Sending => None,
    }
}
