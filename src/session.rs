use std::convert::Infallible;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use dashmap::DashMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::models::{ResultRecord, Submission};

pub const SESSION_COOKIE_NAME: &str = "session_id";
static SESSION_EXPIRATION: Duration = Duration::from_secs(60 * 60 * 24); // 1 day
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
  Info,
  Success,
  Warning,
}

impl FlashLevel {
  pub fn as_str(&self) -> &'static str {
    match self {
      FlashLevel::Info => "info",
      FlashLevel::Success => "success",
      FlashLevel::Warning => "warning",
    }
  }
}

/// Message shown once on the next page render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Flash {
  pub level: FlashLevel,
  pub message: String,
}

impl Flash {
  pub fn success(message: impl Into<String>) -> Self {
    Self {
      level: FlashLevel::Success,
      message: message.into(),
    }
  }

  pub fn warning(message: impl Into<String>) -> Self {
    Self {
      level: FlashLevel::Warning,
      message: message.into(),
    }
  }
}

#[derive(Clone, Debug)]
pub struct UserSession {
  pub form: Submission,
  pub result: Option<ResultRecord>,
  pub flash: Option<Flash>,
  pending: bool,
  last_seen: Instant,
}

impl Default for UserSession {
  fn default() -> Self {
    Self {
      form: Submission::default(),
      result: None,
      flash: None,
      pending: false,
      last_seen: Instant::now(),
    }
  }
}

impl UserSession {
  pub fn is_pending(&self) -> bool {
    self.pending
  }
}

/// Process-wide UI state keyed by session id.
///
/// Sessions are stored on their first submission and expire after a day of
/// inactivity. At `max_sessions` the least recently seen idle session is evicted.
#[derive(Clone)]
pub struct SessionStorage {
  sessions: Arc<DashMap<String, UserSession>>,
  max_sessions: usize,
}

impl Default for SessionStorage {
  fn default() -> Self {
    Self::with_capacity(DEFAULT_MAX_SESSIONS)
  }
}

impl SessionStorage {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_capacity(max_sessions: usize) -> Self {
    Self {
      sessions: Arc::new(DashMap::new()),
      max_sessions: max_sessions.max(1),
    }
  }

  pub fn get_user_session(&self, session_id: &str) -> Option<UserSession> {
    self
      .sessions
      .get(session_id)
      .map(|session| session.value().clone())
  }

  /// Snapshot of the session for rendering. The flash message is consumed.
  ///
  /// Unknown ids render the default view and are not stored.
  pub fn take_view(&self, session_id: &str) -> UserSession {
    match self.sessions.get_mut(session_id) {
      Some(mut session) => {
        session.last_seen = Instant::now();
        let view = session.clone();
        session.flash = None;
        view
      },
      None => UserSession::default(),
    }
  }

  pub fn update<F>(&self, session_id: &str, f: F)
  where
    F: FnOnce(&mut UserSession),
  {
    self.prune_if_new(session_id);
    let mut session = self.sessions.entry(session_id.to_string()).or_default();
    session.last_seen = Instant::now();
    f(session.value_mut());
  }

  /// Move the session to `Pending`. Returns `None` when a request is already in flight.
  ///
  /// The session goes back to idle when the returned guard is dropped.
  pub fn try_begin(&self, session_id: &str) -> Option<PendingGuard> {
    self.prune_if_new(session_id);
    let mut session = self.sessions.entry(session_id.to_string()).or_default();
    if session.pending {
      return None;
    }
    session.pending = true;
    session.last_seen = Instant::now();
    drop(session);
    trace!("session {} is pending", session_id);
    Some(PendingGuard {
      store: self.clone(),
      session_id: session_id.to_string(),
    })
  }

  pub fn len(&self) -> usize {
    self.sessions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.sessions.is_empty()
  }

  fn prune_if_new(&self, session_id: &str) {
    if self.sessions.contains_key(session_id) {
      return;
    }
    let before = self.sessions.len();
    self
      .sessions
      .retain(|_, session| session.pending || session.last_seen.elapsed() < SESSION_EXPIRATION);
    let removed = before.saturating_sub(self.sessions.len());
    if removed > 0 {
      debug!("removed {} expired sessions", removed);
    }

    if self.sessions.len() >= self.max_sessions {
      let oldest = self
        .sessions
        .iter()
        .filter(|session| !session.pending)
        .min_by_key(|session| session.last_seen)
        .map(|session| session.key().clone());
      if let Some(oldest) = oldest {
        debug!("session limit {} reached, evict {}", self.max_sessions, oldest);
        self.sessions.remove(&oldest);
      }
    }
  }
}

pub struct PendingGuard {
  store: SessionStorage,
  session_id: String,
}

impl Drop for PendingGuard {
  fn drop(&mut self) {
    if let Some(mut session) = self.store.sessions.get_mut(&self.session_id) {
      session.pending = false;
    }
    trace!("session {} is idle", self.session_id);
  }
}

/// Session id taken from the `session_id` cookie, minted when absent.
///
/// Handlers must return `cookie_jar` so a freshly minted id reaches the browser.
pub struct WebSession {
  pub session_id: String,
  pub cookie_jar: CookieJar,
}

#[async_trait]
impl<S> FromRequestParts<S> for WebSession
where
  S: Send + Sync,
{
  type Rejection = Infallible;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    let cookie_jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = cookie_jar.get(SESSION_COOKIE_NAME) {
      if !cookie.value().is_empty() {
        let session_id = cookie.value().to_string();
        return Ok(Self {
          session_id,
          cookie_jar,
        });
      }
    }

    let session_id = uuid::Uuid::new_v4();
    debug!("new session: {}", session_id);
    Ok(Self {
      session_id: session_id.to_string(),
      cookie_jar: cookie_jar.add(new_session_cookie(session_id)),
    })
  }
}

pub fn new_session_cookie(id: uuid::Uuid) -> Cookie<'static> {
  let mut cookie = Cookie::new(SESSION_COOKIE_NAME, id.to_string());
  cookie.set_path("/");
  cookie.set_http_only(true);
  cookie.set_same_site(SameSite::Lax);
  cookie
}
