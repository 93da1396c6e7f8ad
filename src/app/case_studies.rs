use leptos::prelude::*;

use crate::profile::{toggle_expanded, Project, PROJECTS};

#[component]
pub fn CaseStudies() -> impl IntoView {
    let (expanded, set_expanded) = signal(None::<usize>);

    view! {
        <section id="work" class="py-16 sm:py-20 lg:py-24 px-5 sm:px-6 lg:px-8">
            <div class="max-w-5xl mx-auto">
                <div class="mb-12 sm:mb-14 text-center">
                    <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold tracking-tight mb-4">
                        "Selected Work"
                    </h2>
                    <p class="text-stone-600 dark:text-stone-400 text-base sm:text-lg max-w-xl mx-auto">
                        "Product-focused projects from concept to impact"
                    </p>
                </div>
                <div class="divide-y divide-stone-200/60 dark:divide-stone-800">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let is_open = move || expanded.get() == Some(index);
                            view! {
                                <article>
                                    <button
                                        class="w-full text-left p-5 sm:p-6 hover:bg-stone-50/40 dark:hover:bg-stone-900/40 rounded-md"
                                        aria-expanded=move || is_open().to_string()
                                        aria-controls=format!("case-study-{index}")
                                        on:click=move |_| {
                                            set_expanded.update(|e| *e = toggle_expanded(*e, index))
                                        }
                                    >
                                        <div class="flex items-start justify-between gap-6">
                                            <div class="flex-1">
                                                <div class="flex flex-wrap items-center gap-2 mb-2">
                                                    <h3 class="text-lg sm:text-xl font-semibold">
                                                        {project.name}
                                                    </h3>
                                                    {project
                                                        .badges
                                                        .iter()
                                                        .map(|b| {
                                                            view! {
                                                                <span class="text-xs px-2 py-0.5 rounded-md bg-stone-100 dark:bg-stone-800 border border-stone-200 dark:border-stone-700">
                                                                    {*b}
                                                                </span>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                                <p class="text-sm text-stone-600 dark:text-stone-400 mb-3">
                                                    {project.tagline}
                                                </p>
                                                <TechList tech=project.tech />
                                            </div>
                                            <span
                                                class=move || {
                                                    if is_open() {
                                                        "rotate-180 transition-transform text-stone-500"
                                                    } else {
                                                        "transition-transform text-stone-500"
                                                    }
                                                }
                                                aria-hidden="true"
                                            >
                                                "⌄"
                                            </span>
                                        </div>
                                    </button>
                                    <Show when=is_open>
                                        <CaseStudyDetail index project />
                                    </Show>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TechList(tech: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-1.5">
            {tech
                .iter()
                .map(|t| {
                    view! {
                        <span class="text-xs px-2 py-1 rounded-md bg-stone-50 dark:bg-stone-900 text-stone-600 dark:text-stone-300">
                            {*t}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CaseStudyDetail(index: usize, project: &'static Project) -> impl IntoView {
    let block = |label: &'static str, text: &'static str| {
        view! {
            <div>
                <h4 class="text-xs font-semibold uppercase tracking-wider text-stone-500 mb-1.5">
                    {label}
                </h4>
                <p class="text-sm leading-relaxed">{text}</p>
            </div>
        }
    };

    view! {
        <div id=format!("case-study-{index}") class="px-5 sm:px-6 pb-6 space-y-5">
            {project
                .image
                .map(|src| {
                    view! {
                        <div class="overflow-hidden rounded-lg border border-stone-200 dark:border-stone-800">
                            <img
                                src=src
                                alt=format!("{} preview", project.name)
                                loading="lazy"
                                class="w-full h-auto object-cover"
                            />
                        </div>
                    }
                })}
            {block("Problem", project.problem)}
            {block("Solution", project.solution)}
            {(!project.technical_highlights.is_empty())
                .then(|| {
                    view! {
                        <div>
                            <h4 class="text-xs font-semibold uppercase tracking-wider text-stone-500 mb-1.5">
                                "Technical highlights"
                            </h4>
                            <ul class="list-disc pl-5 space-y-1 text-sm">
                                {project
                                    .technical_highlights
                                    .iter()
                                    .map(|h| view! { <li>{*h}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })}
            {block("Impact", project.impact)}
            {project.next_steps.map(|text| block("Next steps", text))}
            <div class="flex flex-wrap gap-3 pt-2">
                {project
                    .repo
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noreferrer"
                                class="text-sm px-3 py-1.5 rounded-md border border-stone-300 dark:border-stone-700"
                            >
                                "View Code"
                            </a>
                        }
                    })}
                {project
                    .demo
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noreferrer"
                                class="text-sm px-3 py-1.5 rounded-md border border-stone-300 dark:border-stone-700"
                            >
                                "Live Demo"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
