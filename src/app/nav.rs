use leptos::{ev::MouseEvent, prelude::*};

use super::theme::use_theme;
use crate::theme::{toggle_theme, visible_theme};

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "#home"),
    ("Projects", "#projects"),
    ("Skills", "#skills"),
    ("Contact", "#contact"),
];

#[component]
pub fn Navigation(#[prop(into)] mounted: Signal<bool>) -> impl IntoView {
    view! {
        <nav class="fixed top-0 inset-x-0 z-40 backdrop-blur-md bg-background/70 border-b border-foreground/10">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold">
                    "Portfolio"
                </a>
                <div class="flex items-center gap-6">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="hidden md:inline text-foreground/70 hover:text-primary transition-colors duration-200"
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle mounted=mounted />
                </div>
            </div>
        </nav>
    }
}

#[component]
fn ThemeToggle(mounted: Signal<bool>) -> impl IntoView {
    let store = use_theme();
    let on_click = {
        let store = store.clone();
        move |_: MouseEvent| {
            let theme = toggle_theme(&*store);
            log::debug!("theme switched to {theme}");
        }
    };

    view! {
        <button
            type="button"
            class="p-2 rounded-full hover:bg-foreground/10 transition-colors duration-200"
            aria-label="Toggle theme"
            on:click=on_click
        >
            {move || {
                visible_theme(mounted.get(), &*store)
                    .map(|theme| view! { <i class=theme.toggle_icon()></i> })
            }}
        </button>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{app::theme::provide_theme_store, theme::Theme};
    use leptos::tachys::view::RenderHtml;

    fn render_nav(mounted: bool) -> String {
        Owner::new().with(|| {
            provide_theme_store();
            use_theme().set_theme(Theme::Light);
            view! { <Navigation mounted=Signal::stored(mounted) /> }.to_html()
        })
    }

    #[test]
    fn test_no_toggle_icon_before_mount() {
        let html = render_nav(false);
        assert!(html.contains("aria-label=\"Toggle theme\""));
        assert!(!html.contains("extra-moon"), "{html}");
        assert!(!html.contains("extra-sun"), "{html}");
        assert!(!html.contains("class=\"light\""));
        assert!(!html.contains("class=\"dark\""));
    }

    #[test]
    fn test_toggle_icon_after_mount() {
        let html = render_nav(true);
        // light is active, so the button offers the moon
        assert!(html.contains("extra-moon"), "{html}");
        assert!(!html.contains("extra-sun"));
    }

    #[test]
    fn test_anchor_links() {
        let html = render_nav(false);
        for (_, href) in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{href}\"")), "missing {href}");
        }
    }
}
