//! Ordered-candidate iteration for the per-scene model ladder.

use reelsmith_error::ReelsmithError;
use std::future::Future;
use tracing::warn;

/// One failed attempt on the ladder.
#[derive(Debug)]
pub struct ModelFailure {
    /// Candidate that was tried
    pub model: String,
    /// Why it failed
    pub error: ReelsmithError,
}

impl std::fmt::Display for ModelFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.model, self.error)
    }
}

/// Result of walking a candidate ladder.
#[derive(Debug)]
pub enum FallbackOutcome<T> {
    /// First candidate that succeeded
    Success {
        /// Produced value
        value: T,
        /// Candidate that produced it
        model: String,
    },
    /// Every candidate failed, in attempt order
    Exhausted(Vec<ModelFailure>),
}

impl<T> FallbackOutcome<T> {
    /// True for `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, FallbackOutcome::Success { .. })
    }
}

/// Try `attempt` against each candidate in order, stopping at the first
/// success.
///
/// A candidate is only tried after the previous one has failed. An empty
/// candidate list is immediately exhausted.
///
/// # Examples
///
/// ```
/// use reelsmith_error::HttpError;
/// use reelsmith_workflow::{FallbackOutcome, try_candidates};
///
/// # tokio_test_block(async {
/// let models = vec!["a".to_string(), "b".to_string()];
/// let outcome = try_candidates(&models, |model| async move {
///     if model == "a" {
///         Err(HttpError::new("down").into())
///     } else {
///         Ok::<_, reelsmith_error::ReelsmithError>(model.len())
///     }
/// })
/// .await;
///
/// match outcome {
///     FallbackOutcome::Success { model, .. } => assert_eq!(model, "b"),
///     FallbackOutcome::Exhausted(_) => unreachable!(),
/// }
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
/// # }
/// ```
pub async fn try_candidates<T, F, Fut>(candidates: &[String], mut attempt: F) -> FallbackOutcome<T>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T, ReelsmithError>>,
{
    let mut failures = Vec::with_capacity(candidates.len());

    for model in candidates {
        match attempt(model.clone()).await {
            Ok(value) => {
                return FallbackOutcome::Success {
                    value,
                    model: model.clone(),
                };
            }
            Err(error) => {
                warn!(model = %model, error = %error, "Candidate failed, trying next");
                failures.push(ModelFailure {
                    model: model.clone(),
                    error,
                });
            }
        }
    }

    FallbackOutcome::Exhausted(failures)
}
