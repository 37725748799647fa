use leptos::{either::Either, ev, prelude::*};
use leptos_meta::{Html, Title};

use super::{
    fade::FadeIn,
    nav::Navigation,
    sections::{Certifications, Contact, Footer, Hero, Projects, Publications, Skills},
    theme::use_theme,
};
use crate::{
    content::{portfolio, ContentError},
    cursor::CursorTracker,
    theme::visible_theme,
};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let (mounted, set_mounted) = signal(false);
    let cursor = RwSignal::new(CursorTracker::default());
    let store = use_theme();

    // effects only run in the browser, after hydration
    Effect::new(move |_| set_mounted(true));

    let listener = window_event_listener(ev::mousemove, move |ev| {
        cursor.update(|c| c.record(ev.client_x(), ev.client_y()));
    });
    on_cleanup(move || listener.remove());

    let theme_class = move || visible_theme(mounted.get(), &*store).map(|t| t.as_str());

    view! {
        <Title text="Home" />
        <Html attr:class=theme_class />
        <div class="min-h-screen relative overflow-hidden">
            <div
                class=move || cursor.with(CursorTracker::overlay_class)
                style=move || cursor.with(CursorTracker::overlay_style)
                aria-hidden="true"
            ></div>
            {match portfolio() {
                Ok(portfolio) => {
                    Either::Left(
                        view! {
                            <Navigation mounted=mounted />
                            <Hero profile=portfolio.profile() />
                            <FadeIn>
                                <Projects projects=portfolio.projects() />
                            </FadeIn>
                            <FadeIn>
                                <Skills skills=portfolio.skills() expertise=portfolio.expertise() />
                            </FadeIn>
                            <FadeIn>
                                <Publications publication=portfolio.publication() />
                            </FadeIn>
                            <FadeIn>
                                <Certifications certifications=portfolio.certifications() />
                            </FadeIn>
                            <FadeIn>
                                <Contact contacts=portfolio.contacts() />
                            </FadeIn>
                            <Footer profile=portfolio.profile() />
                        },
                    )
                }
                Err(error) => Either::Right(view! { <ContentUnavailable error=error /> }),
            }}
        </div>
    }
}

#[component]
fn ContentUnavailable(error: ContentError) -> impl IntoView {
    log::error!("couldn't load portfolio content: {error}");
    view! {
        <div class="flex min-h-screen items-center justify-center p-8">
            <div class="max-w-xl p-6 rounded-md border border-red-500/40 bg-red-500/10">
                <h1 class="text-xl font-bold mb-2">"Portfolio content failed to load"</h1>
                <pre class="whitespace-pre-wrap text-sm">{error.to_string()}</pre>
            </div>
        </div>
    }
}
