use leptos::prelude::*;

use crate::profile::PROFILE;

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <div class="relative">
            <div class="absolute -inset-2 rounded-full bg-gradient-to-tr from-indigo-500/30 to-stone-300/20 blur-xl"></div>
            <img
                src=PROFILE.avatar_url
                alt=format!("{} avatar", PROFILE.name)
                loading="eager"
                decoding="async"
                class="relative w-44 h-44 sm:w-56 sm:h-56 md:w-64 md:h-64 rounded-full object-cover border-4 border-white dark:border-stone-900 shadow-xl"
            />
        </div>
    }
}
