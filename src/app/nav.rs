use leptos::{ev, html, prelude::*};
use wasm_bindgen::JsCast;

use crate::{
    config::{NavSection, SiteConfig},
    nav::{MenuEvent, NavState, ScrollMetrics, SectionBounds},
    profile::PROFILE,
    theme::Theme,
};

#[component]
pub fn TopNav(config: SiteConfig, theme: Signal<Theme>, set_theme: Callback<Theme>) -> impl IntoView {
    let state = RwSignal::new(NavState::new());
    let menu_open = Memo::new(move |_| state.with(|s| s.menu_open()));
    let dismissable = Memo::new(move |_| state.with(|s| s.wants_dismiss_listeners()));
    let nav_ref = NodeRef::<html::Nav>::new();
    let sections = config.sections;
    let lookahead = config.scroll_lookahead;

    let recompute = move || {
        let bounds = measure_sections(sections);
        let metrics = measure_scroll();
        state.update(|s| s.on_scroll(&metrics, lookahead, &bounds));
    };

    // scroll-spy subscription, lives as long as the nav
    Effect::new(move |_| {
        recompute();
        let on_scroll = window_event_listener(ev::scroll, move |_| recompute());
        let on_resize = window_event_listener(ev::resize, move |_| recompute());
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    });

    // dismiss listeners only exist while the menu is open
    listen_while(dismissable, move || {
        log::debug!("mobile menu open; listening for dismiss");
        let on_key = window_event_listener(ev::keydown, move |e| {
            let key = e.key();
            state.update(|s| {
                s.on_menu_event(MenuEvent::Key(&key));
            });
        });
        let on_click = window_event_listener(ev::click, move |e| {
            let inside = click_inside(nav_ref, &e);
            state.update(|s| {
                s.on_menu_event(MenuEvent::Click { inside });
            });
        });
        move || {
            on_key.remove();
            on_click.remove();
        }
    });

    let link_class = move |id: &'static str, mobile: bool| {
        let active = state.with(|s| s.is_active(id));
        match (mobile, active) {
            (false, true) => "px-3 py-2 text-sm font-medium rounded-md text-stone-900 bg-stone-100 dark:text-white dark:bg-stone-800",
            (false, false) => "px-3 py-2 text-sm font-medium rounded-md text-stone-600 hover:text-stone-900 dark:text-stone-400 dark:hover:text-white",
            (true, true) => "block w-full px-4 py-2 text-sm font-medium rounded-md text-stone-900 bg-stone-50 dark:text-white dark:bg-stone-800",
            (true, false) => "block w-full px-4 py-2 text-sm font-medium rounded-md text-stone-600 hover:bg-stone-50 dark:text-stone-400 dark:hover:bg-stone-800",
        }
    };

    let nav_links = move |mobile: bool| {
        sections
            .iter()
            .map(|section| {
                let id = section.id;
                view! {
                    <a
                        href=format!("#{id}")
                        class=move || link_class(id, mobile)
                        aria-current=move || state.with(|s| s.is_active(id)).then_some("true")
                        on:click=move |_| state.update(|s| s.select())
                    >
                        {section.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav
            node_ref=nav_ref
            class="sticky top-0 z-50 backdrop-blur bg-white/80 dark:bg-stone-950/80 border-b border-stone-200/60 dark:border-stone-800/60"
        >
            <div
                class="absolute top-0 left-0 h-0.5 bg-indigo-500 transition-[width] duration-100"
                style:width=move || format!("{}%", state.with(|s| s.scroll_progress()))
                aria-hidden="true"
            ></div>
            <div class="max-w-6xl mx-auto px-5 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href="#" class="font-semibold tracking-tight">
                    {PROFILE.name}
                </a>
                <div class="hidden md:flex items-center gap-1">{nav_links(false)}</div>
                <div class="hidden md:flex items-center gap-2">
                    <a
                        href=format!("mailto:{}", PROFILE.email)
                        class="px-3.5 py-2 text-sm font-medium rounded-md border border-stone-300/60 dark:border-stone-700"
                    >
                        "Email"
                    </a>
                    <a
                        href=PROFILE.resume_url
                        target="_blank"
                        rel="noreferrer"
                        class="px-3.5 py-2 text-sm font-medium rounded-md border border-stone-300/60 dark:border-stone-700"
                    >
                        "Resume"
                    </a>
                    <ThemeToggle theme set_theme />
                </div>
                <div class="flex md:hidden items-center gap-2">
                    <ThemeToggle theme set_theme />
                    <button
                        class="p-2 rounded-md text-stone-600 hover:text-stone-900 dark:text-stone-300"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| state.update(|s| s.toggle_menu())
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden px-5 py-4 space-y-1 border-t border-stone-200/60 dark:border-stone-800">
                    {nav_links(true)}
                    <a
                        href=format!("mailto:{}", PROFILE.email)
                        class="block w-full px-4 py-2 mt-2 text-sm font-medium rounded-md border border-stone-300/80 dark:border-stone-700"
                    >
                        "Email"
                    </a>
                    <a
                        href=PROFILE.resume_url
                        target="_blank"
                        rel="noreferrer"
                        class="block w-full px-4 py-2 mt-2 text-sm font-medium rounded-md border border-stone-300/80 dark:border-stone-700"
                    >
                        "Resume"
                    </a>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn ThemeToggle(theme: Signal<Theme>, set_theme: Callback<Theme>) -> impl IntoView {
    view! {
        <button
            class="p-2 rounded-md border border-stone-300/60 dark:border-stone-700 hover:border-indigo-500"
            aria-label="Toggle theme"
            on:click=move |_| set_theme.run(theme.get_untracked().toggled())
        >
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}

/// Calls `attach` each time `active` turns true. What it returns runs when `active`
/// turns false again or the owner goes away, so every attach gets exactly one detach.
fn listen_while<D>(active: Memo<bool>, attach: impl Fn() -> D + 'static)
where
    D: FnOnce() + Send + Sync + 'static,
{
    Effect::new(move |_| {
        if active.get() {
            on_cleanup(attach());
        }
    });
}

fn measure_sections(sections: &[NavSection]) -> Vec<SectionBounds> {
    let doc = document();
    sections
        .iter()
        .filter_map(|s| {
            let el = doc
                .get_element_by_id(s.id)?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()?;
            Some(SectionBounds::new(
                s.id,
                f64::from(el.offset_top()),
                f64::from(el.offset_height()),
            ))
        })
        .collect()
}

fn measure_scroll() -> ScrollMetrics {
    let win = window();
    ScrollMetrics {
        scroll_y: win.scroll_y().unwrap_or_default(),
        document_height: document()
            .document_element()
            .map(|el| f64::from(el.scroll_height()))
            .unwrap_or_default(),
        viewport_height: win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default(),
    }
}

/// Missing nav counts as inside so the menu is never closed by accident.
fn click_inside(nav_ref: NodeRef<html::Nav>, ev: &web_sys::MouseEvent) -> bool {
    let Some(nav) = nav_ref.get_untracked() else {
        return true;
    };
    let target = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    nav.contains(target.as_ref())
}
