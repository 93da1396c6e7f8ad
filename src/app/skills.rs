use leptos::prelude::*;

use crate::profile::SKILLS;

#[component]
pub fn SkillStack() -> impl IntoView {
    view! {
        <section id="skills" class="py-16 sm:py-20 px-5 sm:px-6 lg:px-8">
            <div class="max-w-5xl mx-auto">
                <div class="mb-12 text-center">
                    <h2 class="text-3xl sm:text-4xl font-bold tracking-tight mb-3">"Toolbox"</h2>
                    <p class="text-stone-600 dark:text-stone-400">
                        "Technologies and practices I use to build products"
                    </p>
                </div>
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-5">
                    {SKILLS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="rounded-lg border border-stone-200 dark:border-stone-800 p-5">
                                    <h3 class="text-xs font-semibold uppercase tracking-wider mb-3">
                                        {group.group}
                                    </h3>
                                    <div class="flex flex-wrap gap-2">
                                        {group
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <span class="text-xs px-2 py-1 rounded-md bg-stone-100 dark:bg-stone-800 border border-stone-200 dark:border-stone-700">
                                                        {*item}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
