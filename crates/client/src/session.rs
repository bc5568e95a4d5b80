use std::{
    fs, io,
    path::PathBuf,
    sync::{Mutex, PoisonError, RwLock},
};

use serde::{Deserialize, Serialize};

use crate::model::User;

/// An authenticated session: the bearer token plus the profile of the user it
/// belongs to, as handed out by the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Where sessions are persisted between runs.
///
/// The browser build of this application keeps the token in local storage;
/// here the medium is injected so the store is testable without one.
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session) -> io::Result<()>;
    fn clear(&self) -> io::Result<()>;
}

/// In-memory storage, for tests and throwaway clients.
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<Session>>,
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<Session> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, session: &Session) -> io::Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// JSON-file storage for CLI use.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Option<Session> {
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    fn save(&self, session: &Session) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

/// Single-writer session cell shared by every resource call.
///
/// Reads happen before each request (to attach the bearer token); the only
/// writers are `login`, `logout` and the 401 interceptor. The
/// on-unauthorized hook is the login-redirect collaborator and fires once
/// per invalidation.
pub struct SessionStore {
    current: RwLock<Option<Session>>,
    storage: Box<dyn SessionStorage>,
    on_unauthorized: Option<Box<dyn Fn() + Send + Sync>>,
}

impl SessionStore {
    pub fn new(
        storage: Box<dyn SessionStorage>,
        on_unauthorized: Option<Box<dyn Fn() + Send + Sync>>,
    ) -> Self {
        let current = RwLock::new(storage.load());
        Self {
            current,
            storage,
            on_unauthorized,
        }
    }

    pub fn set(&self, session: Session) {
        if let Err(err) = self.storage.save(&session) {
            tracing::warn!(error = %err, "failed to persist session");
        }
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    pub fn get(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|session| session.token.clone())
    }

    pub fn clear(&self) {
        if let Err(err) = self.storage.clear() {
            tracing::warn!(error = %err, "failed to clear persisted session");
        }
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Clears the session and fires the on-unauthorized hook. Called by the
    /// transport layer on any 401, regardless of which resource triggered it.
    pub(crate) fn invalidate(&self) {
        self.clear();
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_types::Role;

    fn session() -> Session {
        Session {
            token: "tok".to_string(),
            user: User {
                id: 1,
                username: "ana".to_string(),
                role: Role::Admin,
            },
        }
    }

    #[test]
    fn store_loads_existing_session_from_storage() {
        let storage = MemoryStorage::default();
        storage.save(&session()).unwrap();
        let store = SessionStore::new(Box::new(storage), None);
        assert_eq!(store.token().as_deref(), Some("tok"));
    }

    #[test]
    fn invalidate_clears_and_fires_hook() {
        use std::sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        };

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let store = SessionStore::new(
            Box::new(MemoryStorage::default()),
            Some(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
        );
        store.set(session());
        store.invalidate();
        assert!(store.get().is_none());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn file_storage_round_trips() {
        let dir = std::env::temp_dir().join(format!("gaveta_test_{}", std::process::id()));
        let storage = FileStorage::new(dir.join("session.json"));
        storage.save(&session()).unwrap();
        let loaded = storage.load().unwrap();
        assert_eq!(loaded.user.username, "ana");
        storage.clear().unwrap();
        assert!(storage.load().is_none());
        // Clearing twice is fine.
        storage.clear().unwrap();
        let _ = fs::remove_dir_all(dir);
    }
}
