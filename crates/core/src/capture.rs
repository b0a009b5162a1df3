//! Capture attempt state machine: scan → resolve → submit → report.
//!
//! One attempt per scan; transitions are one-directional and no state is
//! revisited. A failed attempt is never retried in place — a fresh scan
//! creates a fresh attempt. Resolution strictly precedes submission, so
//! no score-affecting call is ever made for a code that did not resolve.

use std::future::Future;
use std::pin::Pin;

use tracing::debug;

use crate::campus::identifiers::TargetIdentifier;

/// A scanned code mapped to a capture target and its point value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub target_id: TargetIdentifier,
    pub point_value: u32,
}

#[derive(Clone, Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("no target matches the scanned code")]
    NotFound,

    #[error("resolver request failed: {0}")]
    Network(String),
}

#[derive(Clone, Debug, thiserror::Error)]
pub enum SubmitError {
    /// The target was already claimed by this player. The workflow folds
    /// this into success with zero points awarded.
    #[error("target already captured")]
    AlreadyCaptured,

    /// The backend refused the capture (inactive target, group mismatch).
    #[error("capture rejected: {0}")]
    Rejected(String),

    #[error("submission request failed: {0}")]
    Network(String),
}

/// External resolver and submission endpoints, injected by the host.
/// Timeout and transport policy live behind this seam, not in the core.
pub trait CaptureBackend: Send + Sync {
    /// Map a decoded scan payload to a target identity and point value.
    fn resolve_code<'a>(
        &'a self,
        code: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<ResolvedTarget, ResolveError>> + Send + 'a>>;

    /// Submit a capture for a resolved target, returning the points
    /// awarded. Idempotent server-side: a repeat capture reports
    /// `AlreadyCaptured` instead of double-awarding.
    fn submit_capture<'a>(
        &'a self,
        target: &'a TargetIdentifier,
    ) -> Pin<Box<dyn Future<Output = Result<u32, SubmitError>> + Send + 'a>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptState {
    Idle,
    Resolving,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    ResolutionFailed,
    SubmissionFailed,
}

/// The unit of work for one scan.
#[derive(Clone, Debug)]
pub struct CaptureAttempt {
    raw_code: String,
    state: AttemptState,
    resolved: Option<ResolvedTarget>,
    failure: Option<FailureReason>,
    awarded_points: Option<u32>,
}

impl CaptureAttempt {
    pub fn new(raw_code: impl Into<String>) -> Self {
        Self {
            raw_code: raw_code.into(),
            state: AttemptState::Idle,
            resolved: None,
            failure: None,
            awarded_points: None,
        }
    }

    pub fn raw_code(&self) -> &str {
        &self.raw_code
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn resolved_target(&self) -> Option<&ResolvedTarget> {
        self.resolved.as_ref()
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        self.failure
    }

    pub fn awarded_points(&self) -> Option<u32> {
        self.awarded_points
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, AttemptState::Succeeded | AttemptState::Failed)
    }

    /// Drive the attempt from `Idle` to a terminal state. An attempt
    /// that already left `Idle` is returned unchanged.
    pub async fn run(mut self, backend: &dyn CaptureBackend) -> Self {
        if self.state != AttemptState::Idle {
            return self;
        }

        self.state = AttemptState::Resolving;
        debug!(code = %self.raw_code, "resolving scanned code");
        let target = match backend.resolve_code(&self.raw_code).await {
            Ok(target) => target,
            Err(err) => {
                debug!(code = %self.raw_code, %err, "resolution failed");
                return self.fail(FailureReason::ResolutionFailed);
            }
        };

        self.resolved = Some(target.clone());
        self.state = AttemptState::Submitting;
        debug!(target_id = %target.target_id, "submitting capture");
        match backend.submit_capture(&target.target_id).await {
            Ok(points) => self.succeed(points),
            // A repeat scan of an already-claimed target is a benign
            // no-op for the player, not a failure.
            Err(SubmitError::AlreadyCaptured) => self.succeed(0),
            Err(err) => {
                debug!(target_id = %target.target_id, %err, "submission failed");
                self.fail(FailureReason::SubmissionFailed)
            }
        }
    }

    fn succeed(mut self, points: u32) -> Self {
        self.state = AttemptState::Succeeded;
        self.awarded_points = Some(points);
        debug!(code = %self.raw_code, points, "capture succeeded");
        self
    }

    fn fail(mut self, reason: FailureReason) -> Self {
        self.state = AttemptState::Failed;
        self.failure = Some(reason);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("a scan attempt is already in flight")]
    AttemptInFlight,

    #[error("no scan attempt ready to run")]
    NoPendingAttempt,
}

/// The single mutable current-attempt slot for one scan session.
///
/// At most one attempt exists at a time; a new scan is only accepted
/// once the previous attempt is terminal. Abandoning the session simply
/// drops the slot — the machine holds no external resources, so there is
/// nothing to cancel.
#[derive(Debug, Default)]
pub struct ScanSession {
    current: Option<CaptureAttempt>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&CaptureAttempt> {
        self.current.as_ref()
    }

    /// Accept a scanned code, creating a fresh `Idle` attempt.
    pub fn begin(&mut self, raw_code: impl Into<String>) -> Result<(), ScanError> {
        if self.current.as_ref().is_some_and(|a| !a.is_terminal()) {
            return Err(ScanError::AttemptInFlight);
        }
        self.current = Some(CaptureAttempt::new(raw_code));
        Ok(())
    }

    /// Run the pending attempt to its terminal state.
    pub async fn drive(&mut self, backend: &dyn CaptureBackend) -> Result<&CaptureAttempt, ScanError> {
        match self.current.take() {
            Some(attempt) if attempt.state() == AttemptState::Idle => {
                let finished = attempt.run(backend).await;
                Ok(&*self.current.insert(finished))
            }
            other => {
                self.current = other;
                Err(ScanError::NoPendingAttempt)
            }
        }
    }

    /// Hand the terminal attempt to the UI and clear the slot. Returns
    /// `None` while an attempt is still pending.
    pub fn take_result(&mut self) -> Option<CaptureAttempt> {
        if self.current.as_ref()?.is_terminal() {
            self.current.take()
        } else {
            None
        }
    }
}
