use super::*;

use k8s::batchv1;
use k8s::corev1;

mod database;
mod job;
mod pod;

/// State of the backing system as seen by a single fetch.
#[derive(Clone, Debug)]
pub enum Snapshot {
    Pods(Vec<corev1::Pod>),
    Jobs(Vec<batchv1::Job>),
    /// A failed probe surfaces as a fetch error rather than as
    /// `reachable: false`; the flag keeps the evaluator a pure function of the
    /// snapshot like the cluster kinds.
    Database { target: String, reachable: bool },
}

impl Snapshot {
    pub fn kind(&self) -> WaitKind {
        match self {
            Self::Pods(_) => WaitKind::PodReady,
            Self::Jobs(_) => WaitKind::JobComplete,
            Self::Database { .. } => WaitKind::DbReachable,
        }
    }

    /// Judge the snapshot. Pure: the result depends on nothing but `self`.
    pub fn evaluate(&self) -> Evaluation {
        match self {
            Self::Pods(pods) => pod::evaluate(pods),
            Self::Jobs(jobs) => job::evaluate(jobs),
            Self::Database { target, reachable } => database::evaluate(target, *reachable),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub satisfied: bool,
    /// One display line per item, in fetch order.
    pub lines: Vec<String>,
}

impl Evaluation {
    fn nothing_found(kind: WaitKind) -> Self {
        Self {
            satisfied: false,
            lines: vec![format!("No {kind}s found yet...")],
        }
    }
}

#[cfg(test)]
mod tests;
