//! # Navigation & Identity
//!
//! The shelf never talks to a browser. Pages and the upload desk receive a [`Navigator`] to
//! move between [`Route`]s, and the account icon consults an [`IdentityStore`] to decide
//! whether the visitor goes to their profile or to the login screen.
//!
//! In-memory implementations of both capabilities are provided for the demo binary and tests.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Identity key set by a successful login.
pub const USER_ID_KEY: &str = "userId";

/// Every screen of the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Books,
    Book(String),
    Notes,
    Note(String),
    Upload,
    Login,
    Signup,
    ForgotPassword,
    Profile,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    Unknown(String),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Books => f.write_str("/books"),
            Route::Book(id) => write!(f, "/books/{id}"),
            Route::Notes => f.write_str("/notes"),
            Route::Note(id) => write!(f, "/notes/{id}"),
            Route::Upload => f.write_str("/upload"),
            Route::Login => f.write_str("/login"),
            Route::Signup => f.write_str("/signup"),
            Route::ForgotPassword => f.write_str("/forgot-password"),
            Route::Profile => f.write_str("/profile"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let unknown = || RouteError::Unknown(path.to_string());
        let segments: Vec<&str> = path
            .strip_prefix('/')
            .ok_or_else(unknown)?
            .split('/')
            .collect();

        match segments.as_slice() {
            [""] => Ok(Route::Home),
            ["books"] => Ok(Route::Books),
            ["books", id] if !id.is_empty() => Ok(Route::Book(id.to_string())),
            ["notes"] => Ok(Route::Notes),
            ["notes", id] if !id.is_empty() => Ok(Route::Note(id.to_string())),
            ["upload"] => Ok(Route::Upload),
            ["login"] => Ok(Route::Login),
            ["signup"] => Ok(Route::Signup),
            ["forgot-password"] => Ok(Route::ForgotPassword),
            ["profile"] => Ok(Route::Profile),
            _ => Err(unknown()),
        }
    }
}

/// Moves the visitor to another screen.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Key-value identity data left behind by the login flow.
pub trait IdentityStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Where the account icon leads: the profile when someone is signed in, else the login screen.
pub fn account_destination(store: &dyn IdentityStore) -> Route {
    match store.get(USER_ID_KEY) {
        Some(_) => Route::Profile,
        None => Route::Login,
    }
}

/// Records every navigation in order.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    history: Mutex<Vec<Route>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    fn history_guard(&self) -> MutexGuard<'_, Vec<Route>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn history(&self) -> Vec<Route> {
        self.history_guard().clone()
    }

    /// The most recent destination, if any.
    pub fn current(&self) -> Option<Route> {
        self.history_guard().last().cloned()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(route = %route, "Navigating");
        self.history_guard().push(route);
    }
}

#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries().remove(key)
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_round_trip() {
        let routes = [
            Route::Home,
            Route::Books,
            Route::Book("book-7".into()),
            Route::Notes,
            Route::Note("note-12".into()),
            Route::Upload,
            Route::Login,
            Route::Signup,
            Route::ForgotPassword,
            Route::Profile,
        ];
        for route in routes {
            assert_eq!(route.to_string().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_unknown_paths_are_rejected() {
        for path in ["", "books", "/library", "/books/", "/books/1/extra", "/profile/me"] {
            assert_eq!(
                path.parse::<Route>(),
                Err(RouteError::Unknown(path.to_string())),
                "{path}"
            );
        }
    }

    #[test]
    fn test_account_destination_follows_user_id() {
        let store = MemoryIdentityStore::new();
        assert_eq!(account_destination(&store), Route::Login);

        store.set(USER_ID_KEY, "user-1");
        assert_eq!(account_destination(&store), Route::Profile);

        store.remove(USER_ID_KEY);
        assert_eq!(account_destination(&store), Route::Login);
    }

    #[test]
    fn test_memory_navigator_records_history() {
        let navigator = MemoryNavigator::new();
        assert_eq!(navigator.current(), None);

        navigator.navigate(Route::Upload);
        navigator.navigate(Route::Books);
        assert_eq!(navigator.current(), Some(Route::Books));
        assert_eq!(navigator.history(), vec![Route::Upload, Route::Books]);
    }
}
