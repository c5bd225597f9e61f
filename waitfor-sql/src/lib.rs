use std::fmt;
use std::time::Duration;

use sqlx::Connection as _;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};

pub const DEFAULT_PORT: u16 = 3306;

/// Upper bound for a single connect + ping round trip.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("error opening connection: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("ping failed: {0}")]
    Ping(#[source] sqlx::Error),
    #[error("no answer within {0:?}")]
    Timeout(Duration),
}

/// Where and as whom to connect.
#[derive(Clone, PartialEq, Eq)]
pub struct DbTarget {
    pub user: String,
    pub password: String,
    pub server: String,
    pub port: u16,
    pub database: String,
}

impl DbTarget {
    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.server)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl fmt::Display for DbTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            user,
            server,
            port,
            database,
            ..
        } = self;
        write!(f, "{user}@{server}:{port}/{database}")
    }
}

impl fmt::Debug for DbTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbTarget")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}

pub struct SqlProbe {
    target: DbTarget,
    options: MySqlConnectOptions,
    timeout: Duration,
}

impl SqlProbe {
    pub fn new(target: DbTarget) -> Self {
        let options = target.connect_options();
        Self {
            target,
            options,
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    pub fn target(&self) -> &DbTarget {
        &self.target
    }

    /// Opens a fresh connection, pings the server and closes the connection again.
    ///
    /// The connection is closed whether or not the ping succeeds, so a probe
    /// never leaves a session open on the server.
    pub async fn ping(&self) -> Result<(), ProbeError> {
        tokio::time::timeout(self.timeout, self.connect_and_ping())
            .await
            .map_err(|_| ProbeError::Timeout(self.timeout))?
    }

    async fn connect_and_ping(&self) -> Result<(), ProbeError> {
        let mut conn = MySqlConnection::connect_with(&self.options)
            .await
            .map_err(ProbeError::Connect)?;
        let pinged = conn.ping().await.map_err(ProbeError::Ping);
        if let Err(err) = conn.close().await {
            tracing::debug!(db = %self.target, %err, "Failed to close probe connection");
        }
        pinged
    }
}

impl fmt::Debug for SqlProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlProbe")
            .field("target", &self.target)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
