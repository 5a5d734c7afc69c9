//! Process-wide default theme and the provider abstraction.
//!
//! The default is a replaceable factory, not a stored theme: every read
//! evaluates the factory installed at that moment. The binary installs
//! the configured factory once at startup; library code should take a
//! [`ThemeProvider`] and only fall back to [`GlobalDefault`] at the
//! outermost composition point.

use std::sync::{Arc, OnceLock, RwLock};

use winkit_logger as logger;

use crate::{Color, StyleTheme};

type Factory = Arc<dyn Fn() -> StyleTheme + Send + Sync>;

static GLOBAL_DEFAULT: OnceLock<RwLock<Factory>> = OnceLock::new();

fn builtin_default() -> StyleTheme {
    StyleTheme::from_colors(Color::White, Color::Black)
}

fn slot() -> &'static RwLock<Factory> {
    GLOBAL_DEFAULT.get_or_init(|| {
        let factory: Factory = Arc::new(builtin_default);
        RwLock::new(factory)
    })
}

/// Replace the factory behind [`StyleTheme::global_default`].
///
/// Affects every later read; themes already constructed are unchanged.
pub fn set_global_default<F>(factory: F)
where
    F: Fn() -> StyleTheme + Send + Sync + 'static,
{
    install(Arc::new(factory));
    logger::debug("Global default theme replaced");
}

/// Restore the built-in default (white on black).
pub fn reset_global_default() {
    install(Arc::new(builtin_default));
    logger::debug("Global default theme reset");
}

fn install(factory: Factory) {
    // A poisoned lock still holds a valid factory, so recover it
    let mut guard = slot().write().unwrap_or_else(|e| e.into_inner());
    *guard = factory;
}

/// Evaluate the installed factory.
pub(crate) fn current() -> StyleTheme {
    // Clone out of the lock so the factory may itself read the default
    let factory = Arc::clone(&slot().read().unwrap_or_else(|e| e.into_inner()));
    factory()
}

/// Source of the theme a control uses when none is set explicitly.
pub trait ThemeProvider {
    fn theme(&self) -> StyleTheme;
}

impl<F> ThemeProvider for F
where
    F: Fn() -> StyleTheme,
{
    fn theme(&self) -> StyleTheme {
        self()
    }
}

impl ThemeProvider for StyleTheme {
    fn theme(&self) -> StyleTheme {
        *self
    }
}

/// Provider backed by the process-wide default factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalDefault;

impl ThemeProvider for GlobalDefault {
    fn theme(&self) -> StyleTheme {
        current()
    }
}
