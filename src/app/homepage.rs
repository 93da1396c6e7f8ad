use leptos::prelude::*;
use leptos_meta::Title;

use super::{avatar::Avatar, case_studies::CaseStudies, contact::Contact, skills::SkillStack};
use crate::{
    config::{build_time, last_updated_label},
    profile::{HIGHLIGHTS, NOW, PRINCIPLES, PROFILE, SIGNATURE_LINE},
};

#[component]
pub fn HomePage(endpoint: String) -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <ProofStrip />
        <CaseStudies />
        <SkillStack />
        <BuildPhilosophy />
        <NowSection />
        <Contact endpoint />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="border-b border-stone-200/60 dark:border-stone-800/60">
            <div class="max-w-6xl mx-auto px-5 sm:px-6 lg:px-8 py-16 sm:py-24 grid md:grid-cols-[1.4fr_1fr] gap-10 items-center">
                <div>
                    <p class="text-xs uppercase tracking-wider text-indigo-600 dark:text-indigo-400 font-semibold">
                        {PROFILE.name} " · " {PROFILE.location}
                    </p>
                    <h1 class="mt-3 text-4xl sm:text-5xl font-bold tracking-tight leading-tight">
                        {PROFILE.statement}
                    </h1>
                    <p class="mt-4 text-lg text-stone-600 dark:text-stone-300 max-w-2xl">
                        {PROFILE.subtext}
                    </p>
                    <div class="mt-8 flex flex-wrap gap-3">
                        <a
                            href=PROFILE.resume_url
                            target="_blank"
                            rel="noreferrer"
                            class="inline-flex items-center px-5 py-2.5 rounded-md bg-stone-900 text-white dark:bg-white dark:text-stone-900 text-sm font-medium"
                        >
                            "Resume"
                        </a>
                        <a
                            href=PROFILE.github_url
                            target="_blank"
                            rel="noreferrer"
                            class="inline-flex items-center px-5 py-2.5 rounded-md border border-stone-300 dark:border-stone-700 text-sm font-medium"
                        >
                            "GitHub"
                        </a>
                    </div>
                </div>
                <div class="flex justify-center md:justify-end">
                    <Avatar />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProofStrip() -> impl IntoView {
    view! {
        <section class="py-6 px-5 sm:px-6 lg:px-8 bg-stone-50 dark:bg-stone-900/40">
            <div class="max-w-5xl mx-auto flex flex-wrap justify-center gap-x-8 gap-y-3 text-sm text-stone-600 dark:text-stone-300">
                {HIGHLIGHTS
                    .iter()
                    .map(|h| view! { <span class="inline-flex items-center gap-2">"🏆 " {*h}</span> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn BuildPhilosophy() -> impl IntoView {
    view! {
        <section class="py-16 sm:py-20 px-5 sm:px-6 lg:px-8 bg-stone-50 dark:bg-stone-900/40">
            <div class="max-w-5xl mx-auto">
                <div class="mb-12 text-center">
                    <h2 class="text-3xl sm:text-4xl font-bold tracking-tight mb-3">
                        "Build Philosophy"
                    </h2>
                    <p class="text-stone-600 dark:text-stone-400">
                        "Principles that guide how I build products"
                    </p>
                </div>
                <div class="grid sm:grid-cols-2 gap-5">
                    {PRINCIPLES
                        .iter()
                        .map(|p| {
                            view! {
                                <div class="rounded-lg border border-stone-200 dark:border-stone-800 bg-white dark:bg-stone-950 p-6">
                                    <h3 class="font-semibold mb-2">{p.title}</h3>
                                    <p class="text-sm text-stone-600 dark:text-stone-400 leading-relaxed">
                                        {p.description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="mt-10 text-center text-sm font-medium text-stone-500">{SIGNATURE_LINE}</p>
            </div>
        </section>
    }
}

#[component]
fn NowSection() -> impl IntoView {
    // build time rather than "today" so server and client render the same text
    let last_updated = last_updated_label(build_time());
    view! {
        <section id="now" class="py-16 sm:py-20 px-5 sm:px-6 lg:px-8">
            <div class="max-w-3xl mx-auto">
                <h2 class="text-3xl sm:text-4xl font-bold tracking-tight mb-6">"Now"</h2>
                <div class="rounded-lg border-l-4 border-indigo-500 bg-stone-50 dark:bg-stone-900/40 p-6">
                    <p class="text-base leading-relaxed">{NOW}</p>
                    <p class="mt-4 text-xs text-stone-500">"Last updated: " {last_updated}</p>
                </div>
            </div>
        </section>
    }
}
