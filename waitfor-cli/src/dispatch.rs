use waitfor::{
    DatabaseFetcher, Fetcher, JobFetcher, KubeApi, PodFetcher, PollLoop, PollOutcome, SqlProbe,
    Target, WaitSpec,
};
use waitfor_kubeapi::BootstrapError;

/// Builds the fetcher for `spec` and polls it to a terminal outcome.
///
/// Only client bootstrap can fail here; everything after that is reported
/// through the [`PollOutcome`].
pub(crate) async fn run(spec: WaitSpec) -> Result<PollOutcome, BootstrapError> {
    let fetcher = fetcher(spec.target()).await?;
    Ok(PollLoop::new(spec, fetcher).run().await)
}

async fn fetcher(target: &Target) -> Result<Fetcher, BootstrapError> {
    let fetcher = match target {
        Target::Pods(selector) => {
            let api = KubeApi::new().await?;
            Fetcher::Pods(PodFetcher::new(api, selector.clone()))
        }
        Target::Jobs(selector) => {
            let api = KubeApi::new().await?;
            Fetcher::Jobs(JobFetcher::new(api, selector.clone()))
        }
        Target::Database(db) => {
            let probe = SqlProbe::new(db.clone());
            Fetcher::Database(DatabaseFetcher::new(probe))
        }
    };
    Ok(fetcher)
}
