//! Observable holders for UI state the layout owns.
//!
//! Theme, sidebar and particle visibility are each their own holder. Readers
//! call [`Observable::get`]; anything that needs to react to changes takes a
//! [`watch::Receiver`] from [`Observable::subscribe`].

use crate::config::model::ThemeMode;
use tokio::sync::watch;

#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone + PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        let (tx, _rx) = watch::channel(value);
        Self { tx }
    }

    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Store `value`, notifying subscribers only if it differs from the
    /// current one. Returns whether it changed.
    pub fn set(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    /// Mutate in place. Subscribers are notified if the value changed.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        self.tx.send_if_modified(|current| {
            let before = current.clone();
            f(current);
            *current != before
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

#[derive(Debug)]
pub struct UiStore {
    pub theme: Observable<ThemeMode>,
    pub sidebar_open: Observable<bool>,
    pub particles_visible: Observable<bool>,
}

impl UiStore {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme: Observable::new(theme),
            sidebar_open: Observable::new(false),
            particles_visible: Observable::new(true),
        }
    }

    pub fn toggle_theme(&self) -> ThemeMode {
        self.theme.update(|mode| *mode = mode.toggled());
        self.theme.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_reports_changes() {
        let open = Observable::new(false);
        assert!(!open.set(false));
        assert!(open.set(true));
        assert!(open.get());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes_only() {
        let store = UiStore::new(ThemeMode::Dark);
        let mut rx = store.theme.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.theme.set(ThemeMode::Dark);
        assert!(!rx.has_changed().unwrap());

        assert_eq!(store.toggle_theme(), ThemeMode::Light);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), ThemeMode::Light);
    }

    #[test]
    fn test_holders_are_independent() {
        let store = UiStore::new(ThemeMode::Light);
        let sidebar = store.sidebar_open.subscribe();
        store.particles_visible.set(false);
        assert!(!sidebar.has_changed().unwrap());
        assert!(store.sidebar_open.set(true));
        assert!(sidebar.has_changed().unwrap());
    }
}
