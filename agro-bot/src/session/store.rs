//! Session object and the in-memory store that keys sessions by id.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

use super::log::ConversationLog;
use super::mode::ModeRouter;
use crate::core::Mode;

/// State of one interactive session: conversation log and mode.
///
/// Created on session start (greeting seeded), reset on explicit `/clear`, dropped on session end.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    log: ConversationLog,
    router: ModeRouter,
    created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: impl Into<String>, greeting: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            log: ConversationLog::with_greeting(greeting),
            router: ModeRouter::new(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut ConversationLog {
        &mut self.log
    }

    pub fn mode(&self) -> Mode {
        self.router.get()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.router.set(mode);
    }
}

type SessionMap = HashMap<String, Arc<Mutex<Session>>>;

/// Sessions keyed by id. Each session sits behind its own mutex so one session is handled
/// by one request at a time while different sessions proceed independently.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<SessionMap>>,
    greeting: String,
}

impl SessionStore {
    /// Creates an empty store; new sessions are seeded with `greeting`.
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(SessionMap::new())),
            greeting: greeting.into(),
        }
    }

    /// Starts a session under a fresh random id.
    pub async fn create(&self) -> (String, Arc<Mutex<Session>>) {
        let id = Uuid::new_v4().to_string();
        let session = self.get_or_create(&id).await;
        (id, session)
    }

    /// Returns the session for `id`, creating it (with the greeting) on first use.
    pub async fn get_or_create(&self, id: &str) -> Arc<Mutex<Session>> {
        {
            let sessions = self.sessions.read().await;
            if let Some(existing) = sessions.get(id) {
                return existing.clone();
            }
        }
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(id.to_string())
            .or_insert_with(|| {
                info!(session_id = %id, "Session started");
                Arc::new(Mutex::new(Session::new(id, self.greeting.clone())))
            })
            .clone()
    }

    /// Ends the session; returns whether it existed.
    pub async fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            info!(session_id = %id, "Session ended");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
