use std::num::NonZeroU32;
use std::time::Duration;

use time::ext::NumericalStdDuration as _;
use waitfor::{ClusterSelector, DbTarget, WaitSpec};

use super::cli::{Cli, Command, DEFAULT_NAMESPACE, GlobalArgs, SqlArgs};

/// Rejected command line input. The wait never starts.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("you must provide a label")]
    MissingLabel,
    #[error("user, password, server and database are required (missing: {})", .0.join(", "))]
    MissingSqlFields(Vec<&'static str>),
    #[error("invalid wait time {value:?}: {reason}")]
    InvalidTimer { value: String, reason: String },
    #[error("retries must be at least 1")]
    ZeroRetries,
}

impl TryFrom<&Cli> for WaitSpec {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let interval = parse_timer(&cli.global.timer)?;
        match &cli.command {
            Command::Pod => cluster_selector(&cli.global).map(|selector| Self::pods(selector, interval)),
            Command::Job => cluster_selector(&cli.global).map(|selector| Self::jobs(selector, interval)),
            Command::Sql(args) => {
                let target = db_target(args)?;
                let retries = NonZeroU32::new(args.retries).ok_or(ConfigError::ZeroRetries)?;
                Ok(Self::database(target, interval, retries))
            }
        }
    }
}

fn cluster_selector(global: &GlobalArgs) -> Result<ClusterSelector, ConfigError> {
    let namespace = match global.namespace.as_deref().filter(|ns| !ns.is_empty()) {
        Some(namespace) => {
            tracing::info!("Namespace set by user: {namespace:?}");
            namespace
        }
        None => {
            tracing::info!("No namespace set by user... Using default namespace: {DEFAULT_NAMESPACE:?}");
            DEFAULT_NAMESPACE
        }
    };

    let label = global.label.as_deref().ok_or(ConfigError::MissingLabel)?;
    tracing::info!("Label set by user: {label:?}");

    Ok(ClusterSelector::new(namespace, label))
}

fn db_target(args: &SqlArgs) -> Result<DbTarget, ConfigError> {
    let fields = [
        ("user", &args.user),
        ("password", &args.password),
        ("server", &args.server),
        ("database", &args.database),
    ];
    let missing: Vec<_> = fields
        .iter()
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(ConfigError::MissingSqlFields(missing));
    }

    let field = |value: &Option<String>| value.clone().unwrap_or_default();
    Ok(DbTarget {
        user: field(&args.user),
        password: field(&args.password),
        server: field(&args.server),
        port: args.port,
        database: field(&args.database),
    })
}

/// Plain integers are seconds; anything else is read as a Go style duration.
pub(crate) fn parse_timer(value: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidTimer {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let interval = match value.parse::<u64>() {
        Ok(seconds) => seconds.std_seconds(),
        Err(_) => {
            let nanos = go_parse_duration::parse_duration(value)
                .map_err(|err| invalid(&format!("{err:?}")))?;
            let nanos = u64::try_from(nanos).map_err(|_| invalid("must not be negative"))?;
            Duration::from_nanos(nanos)
        }
    };

    if interval.is_zero() {
        return Err(invalid("must be greater than zero"));
    }
    Ok(interval)
}
