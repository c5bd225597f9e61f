use std::future::Future;

use waitfor_sql::ProbeError;

use super::*;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to list {kind}s in namespace {namespace:?} with selector {selector:?}: {source}")]
    Kube {
        kind: WaitKind,
        namespace: String,
        selector: String,
        #[source]
        source: kube::Error,
    },
    #[error(transparent)]
    Probe(#[from] ProbeError),
}

/// Pulls the current state of whatever is being waited on.
///
/// Zero matching items is a valid snapshot, not an error. `release` is called
/// exactly once, after the last `fetch`, whatever the outcome of the wait.
pub trait Fetch {
    fn fetch(&mut self) -> impl Future<Output = Result<Snapshot, FetchError>> + Send;

    fn release(self) -> impl Future<Output = ()> + Send
    where
        Self: Sized;
}

#[derive(Debug)]
pub struct PodFetcher {
    api: KubeApi,
    selector: ClusterSelector,
}

impl PodFetcher {
    pub fn new(api: KubeApi, selector: ClusterSelector) -> Self {
        Self { api, selector }
    }
}

impl Fetch for PodFetcher {
    async fn fetch(&mut self) -> Result<Snapshot, FetchError> {
        let ClusterSelector { namespace, label } = &self.selector;
        self.api
            .list_pods(namespace, label)
            .await
            .map(Snapshot::Pods)
            .map_err(|source| kube_error(WaitKind::PodReady, &self.selector, source))
    }

    async fn release(self) {
        tracing::debug!(api = ?self.api, "Releasing Kubernetes client");
    }
}

#[derive(Debug)]
pub struct JobFetcher {
    api: KubeApi,
    selector: ClusterSelector,
}

impl JobFetcher {
    pub fn new(api: KubeApi, selector: ClusterSelector) -> Self {
        Self { api, selector }
    }
}

impl Fetch for JobFetcher {
    async fn fetch(&mut self) -> Result<Snapshot, FetchError> {
        let ClusterSelector { namespace, label } = &self.selector;
        self.api
            .list_jobs(namespace, label)
            .await
            .map(Snapshot::Jobs)
            .map_err(|source| kube_error(WaitKind::JobComplete, &self.selector, source))
    }

    async fn release(self) {
        tracing::debug!(api = ?self.api, "Releasing Kubernetes client");
    }
}

/// Each fetch is one connectivity probe.
#[derive(Debug)]
pub struct DatabaseFetcher {
    probe: SqlProbe,
}

impl DatabaseFetcher {
    pub fn new(probe: SqlProbe) -> Self {
        Self { probe }
    }
}

impl Fetch for DatabaseFetcher {
    async fn fetch(&mut self) -> Result<Snapshot, FetchError> {
        self.probe.ping().await?;
        Ok(Snapshot::Database {
            target: self.probe.target().to_string(),
            reachable: true,
        })
    }

    async fn release(self) {
        tracing::debug!(db = %self.probe.target(), "Releasing database probe");
    }
}

/// The closed set of fetchers a [`WaitSpec`] can resolve to.
#[derive(Debug)]
pub enum Fetcher {
    Pods(PodFetcher),
    Jobs(JobFetcher),
    Database(DatabaseFetcher),
}

impl Fetch for Fetcher {
    async fn fetch(&mut self) -> Result<Snapshot, FetchError> {
        match self {
            Self::Pods(fetcher) => fetcher.fetch().await,
            Self::Jobs(fetcher) => fetcher.fetch().await,
            Self::Database(fetcher) => fetcher.fetch().await,
        }
    }

    async fn release(self) {
        match self {
            Self::Pods(fetcher) => fetcher.release().await,
            Self::Jobs(fetcher) => fetcher.release().await,
            Self::Database(fetcher) => fetcher.release().await,
        }
    }
}

fn kube_error(kind: WaitKind, selector: &ClusterSelector, source: kube::Error) -> FetchError {
    FetchError::Kube {
        kind,
        namespace: selector.namespace.clone(),
        selector: selector.label.clone(),
        source,
    }
}

#[cfg(test)]
mod tests;
