use crate::store::RecordStore;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::debug;
use ulid::Ulid;

pub type SessionId = Ulid;

#[derive(Debug)]
struct Session {
    last_seen: Instant,
    store: RecordStore,
}

impl Session {
    fn is_idle(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_seen) >= ttl
    }
}

#[derive(Clone)]
pub struct AppState {
    sessions: Arc<Mutex<HashMap<SessionId, Session>>>,
    pub session_ttl: Duration,
}

impl AppState {
    pub fn new(session_ttl: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            session_ttl,
        }
    }

    /// Runs `read` against the session's store, or an empty one when the
    /// session is unknown or has gone idle. Reading counts as activity.
    pub async fn with_store<T>(
        &self,
        session: Option<SessionId>,
        read: impl FnOnce(&RecordStore) -> T,
    ) -> T {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;
        if let Some(id) = session {
            if sessions.get(&id).is_some_and(|s| s.is_idle(now, self.session_ttl)) {
                sessions.remove(&id);
            }
        }
        let live = match session {
            Some(id) => sessions.get_mut(&id),
            None => None,
        };
        match live {
            Some(entry) => {
                entry.last_seen = now;
                read(&entry.store)
            }
            None => read(&RecordStore::new()),
        }
    }

    pub async fn with_store_mut<T>(
        &self,
        session: SessionId,
        write: impl FnOnce(&mut RecordStore) -> T,
    ) -> T {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;
        let entry = sessions.entry(session).or_insert_with(|| Session {
            last_seen: now,
            store: RecordStore::new(),
        });
        if entry.is_idle(now, self.session_ttl) {
            entry.store = RecordStore::new();
        }
        entry.last_seen = now;
        write(&mut entry.store)
    }

    /// Drops the session's store. Returns whether one existed.
    pub async fn end_session(&self, session: SessionId) -> bool {
        self.sessions.lock().await.remove(&session).is_some()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Drops every session idle for at least the TTL. Returns how many went.
    pub async fn sweep_idle(&self) -> usize {
        self.sweep_idle_at(Instant::now()).await
    }

    async fn sweep_idle_at(&self, now: Instant) -> usize {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle(now, self.session_ttl));
        before - sessions.len()
    }

    pub fn spawn_sweeper(&self) -> JoinHandle<()> {
        let state = self.clone();
        let period = (state.session_ttl / 2).max(Duration::from_secs(1));
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let evicted = state.sweep_idle().await;
                if evicted > 0 {
                    debug!(evicted, "expired idle sessions");
                }
            }
        })
    }
}
