use std::fmt;

use kube::api;
use kube::config;
use waitfor_ext as k8s;

use k8s::batchv1;
use k8s::corev1;

/// Errors raised while building a cluster client.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("failed to load kubeconfig: {0}")]
    Kubeconfig(#[from] config::KubeconfigError),
    #[error("failed to create Kubernetes client: {0}")]
    Client(#[from] kube::Error),
}

pub struct KubeApi {
    client: kube::Client,
}

impl KubeApi {
    /// Create a KubeApi from the ambient cluster credentials.
    ///
    /// In-cluster service account credentials are tried first. When they are
    /// not available the kubeconfig is loaded instead, honouring `KUBECONFIG`
    /// and falling back to `~/.kube/config`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), waitfor_kubeapi::BootstrapError> {
    /// let api = waitfor_kubeapi::KubeApi::new().await?;
    /// // use `api`...
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new() -> Result<Self, BootstrapError> {
        tracing::info!("Trying in-cluster config...");
        let config = match kube::Config::incluster() {
            Ok(config) => config,
            Err(err) => {
                tracing::info!(%err, "No in-cluster config, falling back to kubeconfig...");
                let options = config::KubeConfigOptions::default();
                kube::Config::from_kubeconfig(&options).await?
            }
        };
        let client = kube::Client::try_from(config)?;
        Ok(Self::with_client(client))
    }

    /// Create a KubeApi backed by the provided Kubernetes client.
    pub fn with_client(client: kube::Client) -> Self {
        Self { client }
    }

    /// Lists the Pods in `namespace` matching the label `selector`.
    ///
    /// An empty list is a valid answer; only a failed request is an error.
    /// Items keep the order the API server returned them in.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(api: &waitfor_kubeapi::KubeApi) -> kube::Result<()> {
    /// let pods = api.list_pods("vault", "app.kubernetes.io/instance=vault").await?;
    /// println!("matched {} pods", pods.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_pods(&self, namespace: &str, selector: &str) -> kube::Result<Vec<corev1::Pod>> {
        let lp = list_params(selector);
        self.pods(namespace).list(&lp).await.map(|list| list.items)
    }

    /// Lists the Jobs in `namespace` matching the label `selector`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(api: &waitfor_kubeapi::KubeApi) -> kube::Result<()> {
    /// let jobs = api.list_jobs("snipeit", "job=generate-app-key").await?;
    /// println!("matched {} jobs", jobs.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_jobs(&self, namespace: &str, selector: &str) -> kube::Result<Vec<batchv1::Job>> {
        let lp = list_params(selector);
        self.jobs(namespace).list(&lp).await.map(|list| list.items)
    }

    fn pods(&self, namespace: &str) -> api::Api<corev1::Pod> {
        api::Api::namespaced(self.client.clone(), namespace)
    }

    fn jobs(&self, namespace: &str) -> api::Api<batchv1::Job> {
        api::Api::namespaced(self.client.clone(), namespace)
    }
}

fn list_params(selector: &str) -> api::ListParams {
    api::ListParams::default().labels(selector)
}

impl fmt::Debug for KubeApi {
    /// Formats the `KubeApi` for debugging while redacting the `client`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KubeApi")
            .field("client", &"<kube::Client>")
            .finish()
    }
}

#[cfg(test)]
mod tests;
