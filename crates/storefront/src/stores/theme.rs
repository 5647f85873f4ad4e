//! Theme preference store.

use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::stores::SubscriptionId;

type ThemeCallback = Arc<dyn Fn(Theme) + Send + Sync>;

/// Light/dark display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stable string form ("light" / "dark").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

/// Reactive theme preference container.
///
/// Initialized to [`Theme::Light`] at startup; never persisted across
/// sessions. Cheaply cloneable handle; all clones share the same state.
#[derive(Clone, Default)]
pub struct ThemeStore {
    inner: Arc<ThemeStoreInner>,
}

#[derive(Default)]
struct ThemeStoreInner {
    theme: Mutex<Theme>,
    subscribers: Mutex<Vec<(u64, ThemeCallback)>>,
    next_subscriber: AtomicU64,
}

impl ThemeStore {
    /// Create a store holding the default (light) theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current theme.
    #[must_use]
    pub fn get(&self) -> Theme {
        *self.lock_theme()
    }

    /// Set the theme, notifying subscribers if it changed.
    pub fn set(&self, theme: Theme) {
        {
            let mut current = self.lock_theme();
            if *current == theme {
                return;
            }
            *current = theme;
        }
        self.notify(theme);
    }

    /// Flip light <-> dark unconditionally and return the new theme.
    pub fn toggle(&self) -> Theme {
        let next = {
            let mut current = self.lock_theme();
            *current = current.toggled();
            *current
        };
        self.notify(next);
        next
    }

    /// Register a callback invoked whenever the theme changes.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Theme) + Send + Sync + 'static,
    {
        let id = self.inner.next_subscriber.fetch_add(1, Ordering::Relaxed);
        self.lock_subscribers().push((id, Arc::new(callback)));
        SubscriptionId::new(id)
    }

    /// Drop a previously registered callback.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock_subscribers().retain(|(sid, _)| *sid != id.value());
    }

    fn lock_theme(&self) -> std::sync::MutexGuard<'_, Theme> {
        self.inner
            .theme
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lock_subscribers(&self) -> std::sync::MutexGuard<'_, Vec<(u64, ThemeCallback)>> {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn notify(&self, theme: Theme) {
        let callbacks: Vec<ThemeCallback> = self
            .lock_subscribers()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(theme);
        }
    }
}
