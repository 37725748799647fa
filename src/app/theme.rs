use std::{ops::Deref, sync::Arc};

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::theme::{Theme, ThemeStore};

/// Theme preference held in signals, so reads inside reactive closures re-render on toggle.
#[derive(Clone, Copy)]
struct SignalThemeStore {
    theme: Signal<Option<Theme>>,
    set_theme: WriteSignal<Option<Theme>>,
}

impl ThemeStore for SignalThemeStore {
    fn theme(&self) -> Option<Theme> {
        self.theme.get()
    }

    fn set_theme(&self, theme: Theme) {
        self.set_theme.set(Some(theme));
    }
}

/// Handle to whichever store backs the theme, shared through context.
#[derive(Clone)]
pub struct ThemeHandle(Arc<dyn ThemeStore>);

impl Deref for ThemeHandle {
    type Target = dyn ThemeStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// Browser builds persist the preference to local storage. The server has no
/// storage, so it renders with an empty in-memory preference.
pub fn provide_theme_store() {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) =
        use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);

    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(None::<Theme>);
        (Signal::from(theme), set_theme)
    };

    provide_context(ThemeHandle(Arc::new(SignalThemeStore { theme, set_theme })));
}

pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>().unwrap_or_else(|| {
        log::warn!("no theme store in context, falling back to default theme");
        ThemeHandle(Arc::new(DefaultThemeStore))
    })
}

/// Used when no store was provided: always reports no preference and drops writes.
struct DefaultThemeStore;

impl ThemeStore for DefaultThemeStore {
    fn theme(&self) -> Option<Theme> {
        None
    }

    fn set_theme(&self, _theme: Theme) {}
}
