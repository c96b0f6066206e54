//! Session context: the persisted current-user record and login navigation.
//!
//! The API client reads the record before every request to attach the bearer
//! token, and expires it when the backend answers 401. The record lives in a
//! [`SessionStore`]; where the user is sent afterwards is decided by a
//! [`Navigator`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, info, warn};

use crate::error::{ApiError, Result};
use crate::models::User;

/// Storage for the current-user record.
pub trait SessionStore: Send + Sync {
    /// Read the record. Missing or unreadable records read as `None`.
    fn load(&self) -> Option<User>;

    /// Replace the record.
    fn save(&self, user: &User) -> Result<()>;

    /// Remove the record. Removing a missing record is not an error.
    fn clear(&self) -> Result<()>;
}

/// In-process session storage.
#[derive(Debug, Default)]
pub struct MemorySession {
    user: RwLock<Option<User>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing record.
    pub fn with_user(user: User) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }
}

impl SessionStore for MemorySession {
    fn load(&self) -> Option<User> {
        self.user.read().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, user: &User) -> Result<()> {
        let mut guard = self
            .user
            .write()
            .map_err(|_| ApiError::Session("session lock poisoned".into()))?;
        *guard = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .user
            .write()
            .map_err(|_| ApiError::Session("session lock poisoned".into()))?;
        *guard = None;
        Ok(())
    }
}

/// Session storage backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSession {
    fn load(&self) -> Option<User> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return None,
        };

        if contents.trim().is_empty() {
            return None;
        }

        match serde_json::from_str(&contents) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable session record");
                None
            }
        }
    }

    fn save(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(user)
            .map_err(|e| ApiError::Session(format!("failed to encode user record: {}", e)))?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "Saved session record");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Views the client can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// Receives navigation requests issued by the client.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that records the current route.
#[derive(Debug, Default)]
pub struct Router {
    current: Mutex<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    pub fn current(&self) -> Route {
        self.current.lock().map(|r| *r).unwrap_or_default()
    }
}

impl Navigator for Router {
    fn navigate(&self, route: Route) {
        debug!(path = route.path(), "Navigating");
        if let Ok(mut current) = self.current.lock() {
            *current = route;
        }
    }
}

/// The session context shared by the API client and the views.
pub struct Session {
    store: Box<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    pub fn new(store: impl SessionStore + 'static, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            store: Box::new(store),
            navigator,
        }
    }

    /// In-memory session with its own router, handy for tests and tools.
    pub fn in_memory() -> Self {
        Self::new(MemorySession::new(), Arc::new(Router::default()))
    }

    pub fn current_user(&self) -> Option<User> {
        self.store.load()
    }

    /// Bearer token of the current user, if any.
    pub fn token(&self) -> Option<String> {
        self.current_user()
            .and_then(|u| u.bearer_token().map(str::to_string))
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Persist the user and go to the dashboard.
    pub fn sign_in(&self, user: User) -> Result<()> {
        self.store.save(&user)?;
        info!(username = %user.username, "Signed in");
        self.navigator.navigate(Route::Dashboard);
        Ok(())
    }

    /// Drop the record and go to the login view.
    pub fn sign_out(&self) -> Result<()> {
        self.store.clear()?;
        info!("Signed out");
        self.navigator.navigate(Route::Login);
        Ok(())
    }

    /// Called when the backend rejects a request with 401.
    ///
    /// Never fails: a record that cannot be removed is logged and the
    /// redirect still happens.
    pub fn expire(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear expired session record");
        }
        warn!("Session expired, redirecting to login");
        self.navigator.navigate(Route::Login);
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(store: impl SessionStore + 'static) -> (Session, Arc<Router>) {
        let router = Arc::new(Router::new(Route::Dashboard));
        (Session::new(store, router.clone()), router)
    }

    #[test]
    fn test_memory_session_round_trip() {
        let store = MemorySession::new();
        assert!(store.load().is_none());

        store.save(&User::new("alice", "a@example.com")).unwrap();
        assert_eq!(store.load().unwrap().username, "alice");

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_file_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSession::new(dir.path().join("nested").join("session.json"));

        assert!(store.load().is_none());
        store
            .save(&User::new("bob", "b@example.com").with_token("abc"))
            .unwrap();
        assert_eq!(store.load().unwrap().token.as_deref(), Some("abc"));

        store.clear().unwrap();
        assert!(store.load().is_none());
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn test_file_session_treats_garbage_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        assert!(FileSession::new(&path).load().is_none());
    }

    #[test]
    fn test_empty_record_means_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{}").unwrap();

        let (session, _) = session_with(FileSession::new(&path));
        assert!(session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_expire_clears_and_redirects() {
        let (session, router) =
            session_with(MemorySession::with_user(User::new("c", "c@x").with_token("t")));
        assert_eq!(session.token().as_deref(), Some("t"));

        session.expire();

        assert!(session.current_user().is_none());
        assert_eq!(router.current(), Route::Login);
    }

    #[test]
    fn test_sign_in_navigates_to_dashboard() {
        let router = Arc::new(Router::default());
        let session = Session::new(MemorySession::new(), router.clone());
        assert_eq!(router.current(), Route::Login);

        session.sign_in(User::new("d", "d@x")).unwrap();
        assert_eq!(router.current(), Route::Dashboard);
        assert_eq!(Route::Dashboard.path(), "/dashboard");
    }
}
