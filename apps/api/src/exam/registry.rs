//! In-memory registry of open mock-test sessions and their countdown tickers.
//!
//! Each session sits behind its own `tokio::sync::Mutex`. While a session is in
//! `test`, one ticker task calls `MockSession::tick` every period; the ticker
//! is aborted as soon as the session leaves `test` or is closed.
//!
//! Clients are not guaranteed to close their sessions, so every `open` first
//! evicts sessions outside `test` that have not been touched for
//! `SESSION_IDLE_TTL`. A session abandoned mid-test is auto-submitted by its
//! ticker and becomes evictable one TTL later.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::exam::session::{MockSession, Phase, SessionError, SessionView, TickOutcome};

const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);
const SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

struct SessionSlot {
    session: MockSession,
    ticker: Option<JoinHandle<()>>,
    last_touched: Instant,
}

impl SessionSlot {
    fn is_idle(&self, now: Instant) -> bool {
        self.session.phase() != Phase::Test
            && now.saturating_duration_since(self.last_touched) >= SESSION_IDLE_TTL
    }

    fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}

#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<Mutex<SessionSlot>>>>>,
    tick_period: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD)
    }
}

impl SessionRegistry {
    pub fn new(tick_period: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            tick_period,
        }
    }

    /// Opens a session in the `instructions` phase.
    pub async fn open(&self, title: &str) -> (Uuid, SessionView) {
        self.evict_idle().await;

        let id = Uuid::new_v4();
        let session = MockSession::new(title);
        let view = SessionView::from(&session);
        let slot = SessionSlot {
            session,
            ticker: None,
            last_touched: Instant::now(),
        };
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(slot)));
        info!("Opened mock test {id}");
        (id, view)
    }

    pub async fn view(&self, id: Uuid) -> Result<SessionView, AppError> {
        let slot = self.slot(id).await?;
        let mut guard = slot.lock().await;
        guard.last_touched = Instant::now();
        Ok(SessionView::from(&guard.session))
    }

    /// Applies `op` to the session, then starts or stops its ticker to match
    /// the resulting phase. A failed `op` leaves the session untouched.
    pub async fn update<T, F>(&self, id: Uuid, op: F) -> Result<(T, SessionView), AppError>
    where
        F: FnOnce(&mut MockSession) -> Result<T, SessionError>,
    {
        let slot = self.slot(id).await?;
        let mut guard = slot.lock().await;
        guard.last_touched = Instant::now();

        let before = guard.session.phase();
        let value = op(&mut guard.session)?;
        let after = guard.session.phase();

        if after != Phase::Test {
            guard.stop_ticker();
        } else if before != Phase::Test {
            // Entering test (start or retake) always restarts the countdown.
            guard.stop_ticker();
            guard.ticker = Some(self.spawn_ticker(id, slot.clone()));
        }

        Ok((value, SessionView::from(&guard.session)))
    }

    /// Discards the session and its ticker. Returns whether it existed.
    pub async fn close(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id);
        match removed {
            Some(slot) => {
                slot.lock().await.stop_ticker();
                info!("Closed mock test {id}");
                true
            }
            None => false,
        }
    }

    /// Drops idle sessions. Returns how many were removed.
    pub async fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let mut idle = Vec::new();
        for (id, slot) in sessions.iter() {
            if slot.lock().await.is_idle(now) {
                idle.push(*id);
            }
        }
        for id in &idle {
            if let Some(slot) = sessions.remove(id) {
                slot.lock().await.stop_ticker();
            }
        }
        if !idle.is_empty() {
            info!("Evicted {} idle mock tests", idle.len());
        }
        idle.len()
    }

    async fn slot(&self, id: Uuid) -> Result<Arc<Mutex<SessionSlot>>, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Mock test {id} not found")))
    }

    fn spawn_ticker(&self, id: Uuid, slot: Arc<Mutex<SessionSlot>>) -> JoinHandle<()> {
        let period = self.tick_period;
        tokio::spawn(async move {
            // First tick one full period after entering test.
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                let mut guard = slot.lock().await;
                match guard.session.tick() {
                    TickOutcome::Running { remaining_secs } => {
                        if remaining_secs % 60 == 0 {
                            debug!("Mock test {id}: {remaining_secs}s remaining");
                        }
                    }
                    TickOutcome::AutoSubmitted(outcome) => {
                        info!(
                            "Mock test {id} auto-submitted at time-up with score {}",
                            outcome.score
                        );
                        guard.ticker = None;
                        guard.last_touched = Instant::now();
                        break;
                    }
                    TickOutcome::Idle => break,
                }
            }
        })
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    #[cfg(test)]
    async fn ticker_running(&self, id: Uuid) -> bool {
        match self.slot(id).await {
            Ok(slot) => slot
                .lock()
                .await
                .ticker
                .as_ref()
                .is_some_and(|h| !h.is_finished()),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::session::{SubmitOutcome, EXAM_DURATION_SECS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    async fn started(registry: &SessionRegistry) -> Uuid {
        let (id, _) = registry.open("RRB NTPC Mock").await;
        registry
            .update(id, |s| s.start(&mut StdRng::seed_from_u64(3)))
            .await
            .unwrap();
        id
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_decrements_every_second() {
        let registry = SessionRegistry::default();
        let id = started(&registry).await;

        time::sleep(Duration::from_millis(3_500)).await;

        let view = registry.view(id).await.unwrap();
        assert_eq!(view.remaining_secs, EXAM_DURATION_SECS - 3);
        assert!(registry.ticker_running(id).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_reaching_zero_auto_submits() {
        let registry = SessionRegistry::new(Duration::from_millis(10));
        let id = started(&registry).await;
        registry
            .update(id, |s| {
                s.jump(0)?;
                let right = s.questions()[0].correct_index;
                s.answer(right)
            })
            .await
            .unwrap();

        time::sleep(Duration::from_millis(10 * EXAM_DURATION_SECS as u64 + 50)).await;

        let view = registry.view(id).await.unwrap();
        assert_eq!(view.phase, Phase::Result);
        assert_eq!(view.remaining_secs, 0);
        assert_eq!(view.result.unwrap().score, 2.0);
        assert!(!registry.ticker_running(id).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_submit_stops_the_clock() {
        let registry = SessionRegistry::default();
        let id = started(&registry).await;
        time::sleep(Duration::from_millis(2_500)).await;

        let (outcome, view) = registry.update(id, |s| s.submit(true)).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Scored(_)));
        assert_eq!(view.remaining_secs, EXAM_DURATION_SECS - 2);
        assert!(!registry.ticker_running(id).await);

        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(
            registry.view(id).await.unwrap().remaining_secs,
            EXAM_DURATION_SECS - 2
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_retake_restarts_countdown() {
        let registry = SessionRegistry::default();
        let id = started(&registry).await;
        time::sleep(Duration::from_millis(4_500)).await;
        registry.update(id, |s| s.submit(true)).await.unwrap();

        let (_, view) = registry
            .update(id, |s| s.retake(&mut StdRng::seed_from_u64(4)))
            .await
            .unwrap();
        assert_eq!(view.phase, Phase::Test);
        assert_eq!(view.remaining_secs, EXAM_DURATION_SECS);

        time::sleep(Duration::from_millis(1_500)).await;
        assert_eq!(
            registry.view(id).await.unwrap().remaining_secs,
            EXAM_DURATION_SECS - 1
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_operation_keeps_ticker_and_state() {
        let registry = SessionRegistry::default();
        let id = started(&registry).await;

        let err = registry.update(id, |s| s.jump(500)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(registry.ticker_running(id).await);
        assert_eq!(registry.view(id).await.unwrap().current_index, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_discards_session() {
        let registry = SessionRegistry::default();
        let id = started(&registry).await;

        assert!(registry.close(id).await);
        assert!(!registry.close(id).await);
        assert!(matches!(
            registry.view(id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_results_are_evicted_after_idle_ttl() {
        let registry = SessionRegistry::default();
        for _ in 0..50 {
            let id = started(&registry).await;
            registry.update(id, |s| s.submit(true)).await.unwrap();
        }
        let (fresh, _) = registry.open("Fresh").await;
        assert_eq!(registry.len().await, 51);

        time::sleep(SESSION_IDLE_TTL + Duration::from_secs(1)).await;
        registry.view(fresh).await.unwrap();

        assert_eq!(registry.evict_idle().await, 50);
        assert_eq!(registry.len().await, 1);
        assert!(registry.view(fresh).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_sweeps_idle_sessions() {
        let registry = SessionRegistry::default();
        let (stale, _) = registry.open("Stale").await;

        time::sleep(SESSION_IDLE_TTL).await;
        registry.open("Next").await;

        assert!(matches!(
            registry.view(stale).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_running_test_is_kept_until_auto_submit_then_evicted() {
        let registry = SessionRegistry::new(Duration::from_millis(10));
        let id = started(&registry).await;

        // Countdown lasts 54s at this tick period; the session stays in test.
        time::sleep(Duration::from_secs(40)).await;
        assert_eq!(registry.evict_idle().await, 0);

        time::sleep(Duration::from_secs(20)).await;
        assert_eq!(registry.view(id).await.unwrap().phase, Phase::Result);

        time::sleep(SESSION_IDLE_TTL).await;
        assert_eq!(registry.evict_idle().await, 1);
    }
}
