// In-memory editing sessions. Each session owns one FormStateStore; nothing is persisted
// and a session's document is dropped when the session is deleted or left idle too long.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::ResumeDocument;
use crate::render::{render, FormattedDocument};
use crate::wizard::{FormStateStore, StepInfo, ALL_STEPS};

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Last time a request touched this session.
    pub last_seen: Instant,
    pub store: FormStateStore,
}

impl Session {
    fn new() -> Self {
        Session {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            last_seen: Instant::now(),
            store: FormStateStore::new(),
        }
    }
}

/// Everything the editor needs after a request: the active step, the
/// document, and the preview rendered from that same document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub step: StepInfo,
    pub steps: Vec<StepInfo>,
    pub document: ResumeDocument,
    pub preview: FormattedDocument,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        let document = session.store.document().clone();
        SessionView {
            id: session.id,
            created_at: session.created_at,
            step: session.store.step().into(),
            steps: ALL_STEPS.iter().copied().map(StepInfo::from).collect(),
            preview: render(&document),
            document,
        }
    }
}

/// Live sessions keyed by id, bounded by `max_sessions`.
///
/// Sessions idle for longer than `idle_timeout` are evicted lazily, whenever a
/// new session is created.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    max_sessions: usize,
    idle_timeout: Duration,
}

impl SessionRegistry {
    pub fn new(max_sessions: usize, idle_timeout: Duration) -> Self {
        SessionRegistry {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
            idle_timeout,
        }
    }

    pub async fn create(&self) -> Result<SessionView, AppError> {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, s| now.duration_since(s.last_seen) <= self.idle_timeout);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {evicted} idle sessions");
        }
        if sessions.len() >= self.max_sessions {
            warn!("Session limit of {} reached", self.max_sessions);
            return Err(AppError::CapacityExceeded);
        }
        let session = Session::new();
        let view = SessionView::from(&session);
        info!("Created session {}", session.id);
        sessions.insert(session.id, session);
        Ok(view)
    }

    /// Runs `f` against the session without mutating its document.
    /// Still counts as activity for idle eviction.
    pub async fn read<T>(&self, id: Uuid, f: impl FnOnce(&Session) -> T) -> Result<T, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        session.last_seen = Instant::now();
        Ok(f(session))
    }

    pub async fn view(&self, id: Uuid) -> Result<SessionView, AppError> {
        self.read(id, |session| SessionView::from(session)).await
    }

    /// Applies one store mutation and returns the refreshed view.
    /// `op` returns whether it changed anything.
    pub async fn update(
        &self,
        id: Uuid,
        op: impl FnOnce(&mut FormStateStore) -> bool,
    ) -> Result<SessionView, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        session.last_seen = Instant::now();
        if op(&mut session.store) {
            debug!("Session {id} updated");
        } else {
            debug!("Session {id} unchanged");
        }
        Ok(SessionView::from(&*session))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let removed = self.sessions.write().await.remove(&id);
        match removed {
            Some(_) => {
                info!("Ended session {id}");
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PersonalField, Section};

    const IDLE: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_create_and_view() {
        let registry = SessionRegistry::new(4, IDLE);
        let created = registry.create().await.unwrap();
        assert_eq!(created.step.number, 1);
        assert_eq!(created.steps.len(), 5);
        assert_eq!(created.document, ResumeDocument::default());
        assert_eq!(created.preview.header.display_name, "YOUR NAME");

        let viewed = registry.view(created.id).await.unwrap();
        assert_eq!(viewed.id, created.id);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_refreshes_preview() {
        let registry = SessionRegistry::new(4, IDLE);
        let id = registry.create().await.unwrap().id;
        let view = registry
            .update(id, |store| store.set_personal_field(PersonalField::FullName, "Ada"))
            .await
            .unwrap();
        assert_eq!(view.document.personal.full_name, "Ada");
        assert_eq!(view.preview.header.display_name, "Ada");
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let registry = SessionRegistry::new(4, IDLE);
        let a = registry.create().await.unwrap().id;
        let b = registry.create().await.unwrap().id;
        registry
            .update(a, |store| store.add_entry(Section::Experience.blank_entry()))
            .await
            .unwrap();
        let view_b = registry.view(b).await.unwrap();
        assert!(view_b.document.experience.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let registry = SessionRegistry::new(4, IDLE);
        let id = Uuid::new_v4();
        assert!(matches!(registry.view(id).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            registry.update(id, |s| s.next_step()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(registry.remove(id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_capacity_limit() {
        let registry = SessionRegistry::new(1, IDLE);
        let first = registry.create().await.unwrap();
        assert!(matches!(
            registry.create().await,
            Err(AppError::CapacityExceeded)
        ));
        registry.remove(first.id).await.unwrap();
        assert!(registry.create().await.is_ok());
    }

    #[tokio::test]
    async fn test_idle_sessions_are_evicted_on_create() {
        tokio::time::pause();
        let registry = SessionRegistry::new(2, IDLE);
        let stale = registry.create().await.unwrap().id;
        let active = registry.create().await.unwrap().id;
        assert!(matches!(
            registry.create().await,
            Err(AppError::CapacityExceeded)
        ));

        tokio::time::advance(Duration::from_secs(45)).await;
        registry.view(active).await.unwrap();
        tokio::time::advance(Duration::from_secs(30)).await;

        let fresh = registry.create().await.unwrap().id;
        assert_eq!(registry.len().await, 2);
        assert!(matches!(registry.view(stale).await, Err(AppError::NotFound(_))));
        assert!(registry.view(active).await.is_ok());
        assert!(registry.view(fresh).await.is_ok());
    }

    #[tokio::test]
    async fn test_abandoned_sessions_free_capacity() {
        tokio::time::pause();
        let registry = SessionRegistry::new(2, IDLE);
        registry.create().await.unwrap();
        registry.create().await.unwrap();
        tokio::time::advance(Duration::from_secs(7 * 24 * 60 * 60)).await;
        assert!(registry.create().await.is_ok());
        assert_eq!(registry.len().await, 1);
    }
}
