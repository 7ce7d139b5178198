//! Content Judge Port - The AI judgment of page content quality.
//!
//! Judging never fails. Implementations convert every internal failure
//! (missing credentials, network errors, unusable replies) into
//! [`AiJudgment::fallback`].

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::judgment::AiJudgment;
use crate::domain::signals::Signals;

#[async_trait]
pub trait ContentJudge: Send + Sync {
    /// Judges the page described by `signals`.
    async fn judge(&self, analysis_id: Uuid, url: &str, signals: &Signals) -> AiJudgment;

    /// Whether a model is configured. False means every call returns the fallback.
    fn is_enabled(&self) -> bool;
}
