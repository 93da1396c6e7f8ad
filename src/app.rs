mod avatar;
mod case_studies;
mod contact;
mod homepage;
mod nav;
mod skills;

use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{
    storage::{use_local_storage_with_options, UseStorageOptions},
    use_preferred_dark,
};

use crate::{
    config::{build_time, copyright_year, SiteConfig},
    profile::PROFILE,
    theme::{displayed_theme, Theme, DARK_CLASS, THEME_STORAGE_KEY},
};
use homepage::HomePage;
use nav::TopNav;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = SiteConfig::default();
    let endpoint = config.form_relay_endpoint.clone();
    let (theme, set_theme) = use_theme();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />

        <Router>
            <div class="min-h-screen bg-white text-stone-900 dark:bg-stone-950 dark:text-stone-100">
                <TopNav config theme set_theme />
                <main class="flex flex-col w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route
                            path=path!("/")
                            view=move || view! { <HomePage endpoint=endpoint.clone() /> }
                        />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// Current theme plus a setter that writes the choice through to local storage.
///
/// First visit follows the OS color scheme; once the visitor toggles, the stored
/// value always wins. Until the client has mounted, the theme is what the server
/// rendered, so hydration never sees a different icon than the one on screen.
fn use_theme() -> (Signal<Theme>, Callback<Theme>) {
    let (stored, set_stored, _) = use_local_storage_with_options::<String, FromToStringCodec>(
        THEME_STORAGE_KEY,
        UseStorageOptions::default().delay_during_hydration(true),
    );
    let prefers_dark = use_preferred_dark();

    // only ever flips on the client
    let (mounted, set_mounted) = signal(false);
    Effect::watch(|| (), move |_, _, _| set_mounted.set(true), true);

    let theme = Signal::derive(move || {
        displayed_theme(mounted.get(), &stored.get(), prefers_dark.get())
    });
    let set_theme = Callback::new(move |t: Theme| {
        log::debug!("theme set to {t}");
        set_stored.set(t.to_string());
    });

    Effect::new(move |_| {
        let dark = theme.get().is_dark();
        let Some(root) = document().document_element() else {
            return;
        };
        if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, dark) {
            log::warn!("couldn't toggle theme class: {e:?}");
        }
    });

    (theme, set_theme)
}

#[component]
fn Footer() -> impl IntoView {
    let year = copyright_year(build_time());
    view! {
        <footer class="py-10 border-t border-stone-200 dark:border-stone-800">
            <div class="max-w-6xl mx-auto px-5 sm:px-6 lg:px-8 text-sm flex flex-col sm:flex-row items-center gap-2 justify-between">
                <p>{format!("© {year} {}. All rights reserved.", PROFILE.name)}</p>
                <div class="flex items-center gap-3">
                    <a href=PROFILE.github_url class="hover:text-indigo-600 dark:hover:text-indigo-400">
                        "GitHub"
                    </a>
                    <a href=PROFILE.linkedin_url class="hover:text-indigo-600 dark:hover:text-indigo-400">
                        "LinkedIn"
                    </a>
                </div>
            </div>
        </footer>
    }
}
