//! Wait until a readiness condition holds.
//!
//! A [`WaitSpec`] names what to wait for, a [`Fetch`] implementation pulls a
//! fresh [`Snapshot`] of the backing system every cycle, and [`PollLoop`]
//! drives fetch, evaluate and sleep until the condition is satisfied or the
//! attempt budget runs out.

use std::fmt;
use std::num::NonZeroU32;
use std::time::Duration;

use waitfor_ext as k8s;

pub use condition::Evaluation;
pub use condition::Snapshot;
pub use fetch::DatabaseFetcher;
pub use fetch::Fetch;
pub use fetch::FetchError;
pub use fetch::Fetcher;
pub use fetch::JobFetcher;
pub use fetch::PodFetcher;
pub use poll::PollLoop;
pub use poll::PollOutcome;
pub use waitfor_kubeapi::KubeApi;
pub use waitfor_sql::DEFAULT_PORT as DEFAULT_SQL_PORT;
pub use waitfor_sql::DbTarget;
pub use waitfor_sql::SqlProbe;

mod condition;
mod fetch;
mod poll;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitKind {
    PodReady,
    JobComplete,
    DbReachable,
}

impl WaitKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::PodReady => "Pod",
            Self::JobComplete => "Job",
            Self::DbReachable => "Database",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::PodReady => "All pods are ready!",
            Self::JobComplete => "All Jobs are Completed!",
            Self::DbReachable => "Connection established!",
        }
    }

    /// Whether a failed fetch ends the wait instead of counting as "not ready yet".
    pub fn fetch_errors_are_fatal(self) -> bool {
        match self {
            Self::PodReady | Self::JobComplete => true,
            Self::DbReachable => false,
        }
    }
}

impl fmt::Display for WaitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label().fmt(f)
    }
}

/// Namespace plus label expression matching a set of cluster resources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterSelector {
    pub namespace: String,
    pub label: String,
}

impl ClusterSelector {
    pub fn new(namespace: impl ToString, label: impl ToString) -> Self {
        let namespace = namespace.to_string();
        let label = label.to_string();
        Self { namespace, label }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Pods(ClusterSelector),
    Jobs(ClusterSelector),
    Database(DbTarget),
}

impl Target {
    pub fn kind(&self) -> WaitKind {
        match self {
            Self::Pods(_) => WaitKind::PodReady,
            Self::Jobs(_) => WaitKind::JobComplete,
            Self::Database(_) => WaitKind::DbReachable,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pods(selector) | Self::Jobs(selector) => write!(
                f,
                "{}s in namespace {} with selector '{}'",
                self.kind(),
                selector.namespace,
                selector.label
            ),
            Self::Database(target) => write!(f, "database {target}"),
        }
    }
}

/// What to wait for and how often to look.
///
/// Cluster waits have no attempt cap and rely on the caller's own deadline
/// (for example the pod's `activeDeadlineSeconds`). Database waits always
/// carry an attempt budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitSpec {
    target: Target,
    interval: Duration,
    max_attempts: Option<NonZeroU32>,
}

impl WaitSpec {
    pub fn pods(selector: ClusterSelector, interval: Duration) -> Self {
        Self {
            target: Target::Pods(selector),
            interval,
            max_attempts: None,
        }
    }

    pub fn jobs(selector: ClusterSelector, interval: Duration) -> Self {
        Self {
            target: Target::Jobs(selector),
            interval,
            max_attempts: None,
        }
    }

    pub fn database(target: DbTarget, interval: Duration, retries: NonZeroU32) -> Self {
        Self {
            target: Target::Database(target),
            interval,
            max_attempts: Some(retries),
        }
    }

    pub fn kind(&self) -> WaitKind {
        self.target.kind()
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn max_attempts(&self) -> Option<NonZeroU32> {
        self.max_attempts
    }

    fn is_exhausted(&self, attempts: u32) -> bool {
        self.max_attempts
            .is_some_and(|max_attempts| attempts >= max_attempts.get())
    }
}
