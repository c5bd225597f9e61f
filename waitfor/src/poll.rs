use super::*;

/// How a wait ended.
#[derive(Debug)]
pub enum PollOutcome {
    /// The condition held on cycle `attempts`.
    Success { attempts: u32 },
    /// The attempt budget ran out. `last_error` is the failure seen on the
    /// final attempt, if that attempt failed rather than came back unready.
    Exhausted {
        attempts: u32,
        last_error: Option<FetchError>,
    },
    /// A fetch failed for a kind that does not retry fetch errors.
    FatalFetchError(FetchError),
}

impl PollOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl fmt::Display for PollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { attempts } => write!(f, "condition satisfied after {attempts} attempt(s)"),
            Self::Exhausted {
                attempts,
                last_error: Some(err),
            } => write!(f, "could not connect after {attempts} retries: {err}"),
            Self::Exhausted {
                attempts,
                last_error: None,
            } => write!(f, "condition not satisfied after {attempts} retries"),
            Self::FatalFetchError(err) => write!(f, "{err}"),
        }
    }
}

/// Drives fetch, evaluate and sleep cycles for a single [`WaitSpec`].
#[derive(Debug)]
pub struct PollLoop<F> {
    spec: WaitSpec,
    fetcher: F,
}

impl<F: Fetch> PollLoop<F> {
    pub fn new(spec: WaitSpec, fetcher: F) -> Self {
        Self { spec, fetcher }
    }

    /// Poll until the condition holds or the wait can no longer succeed.
    ///
    /// The fetcher is released before this returns, on every outcome.
    pub async fn run(self) -> PollOutcome {
        let Self { spec, mut fetcher } = self;
        let outcome = poll(&spec, &mut fetcher).await;
        fetcher.release().await;
        outcome
    }
}

async fn poll<F: Fetch>(spec: &WaitSpec, fetcher: &mut F) -> PollOutcome {
    let kind = spec.kind();
    tracing::info!("Waiting for {}...", spec.target());

    let mut attempts: u32 = 0;
    loop {
        attempts = attempts.saturating_add(1);

        let last_error = match fetcher.fetch().await {
            Ok(snapshot) => {
                let evaluation = snapshot.evaluate();
                for line in &evaluation.lines {
                    tracing::info!(%kind, attempt = attempts, "State: {line}");
                }
                if evaluation.satisfied {
                    tracing::info!(%kind, attempts, "{}", kind.success_message());
                    return PollOutcome::Success { attempts };
                }
                None
            }
            Err(err) if kind.fetch_errors_are_fatal() => {
                tracing::error!(%kind, attempt = attempts, %err, "Query failed, giving up");
                return PollOutcome::FatalFetchError(err);
            }
            Err(err) => {
                tracing::warn!(%kind, attempt = attempts, "{kind} not ready yet: {err}");
                Some(err)
            }
        };

        if spec.is_exhausted(attempts) {
            return PollOutcome::Exhausted {
                attempts,
                last_error,
            };
        }

        tracing::debug!(%kind, interval = ?spec.interval(), "Sleeping before next attempt");
        tokio::time::sleep(spec.interval()).await;
    }
}
