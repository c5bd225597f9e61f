use clap::{Args, Parser, Subcommand};
use constcat::concat;

const ENV_PREFIX: &str = "WAITFOR_";
const SQL_ENV_PREFIX: &str = concat!(ENV_PREFIX, "SQL_");

pub(crate) const DEFAULT_NAMESPACE: &str = "default";

const ABOUT: &str = "This tool waits for kubernetes pods or jobs and SQL databases to be ready";

const LONG_ABOUT: &str = concat!(
    ABOUT,
    "

A common use case is to run it as an init container, so the main application only starts
once the services it depends on are ready. For example waiting for a database to be
ready before starting the app to prevent errors.

Example:
  waitfor pod -n vault -l app.kubernetes.io/instance=vault
  waitfor job -n snipeit -l job=generate-app-key
  waitfor sql -u root -p mysecretpassword -s mariadb.mydatabase.cluster.local -d mydb"
);

#[derive(Debug, Parser)]
#[command(name = "waitfor", version, about = ABOUT, long_about = LONG_ABOUT)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) global: GlobalArgs,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Args)]
pub(crate) struct GlobalArgs {
    /// Namespace to use [default: default]
    #[arg(short, long, global = true, env = concat!(ENV_PREFIX, "NAMESPACE"))]
    pub(crate) namespace: Option<String>,

    /// Label to filter (required for pod and job)
    #[arg(short, long, global = true, env = concat!(ENV_PREFIX, "LABEL"))]
    pub(crate) label: Option<String>,

    /// Wait time between checks, in seconds or as a duration such as "500ms" or "1m30s"
    #[arg(
        short,
        long,
        global = true,
        default_value = "3",
        env = concat!(ENV_PREFIX, "TIMER")
    )]
    pub(crate) timer: String,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Wait for pods to be ready
    Pod,
    /// Wait for jobs to complete
    Job,
    /// Wait for SQL connection
    #[command(long_about = SQL_LONG_ABOUT)]
    Sql(SqlArgs),
}

const SQL_LONG_ABOUT: &str = "Wait for SQL connection until available

Simple example:
  waitfor sql -u root -p mysecretpassword -s mariadb.mydatabase.cluster.local -d mydb

Example, if you have a non-standard port, set it with -P, default is 3306:
  waitfor sql -u root -p mysecretpassword -s mariadb.mydatabase.cluster.local -P 3307 -d mydb";

#[derive(Debug, Args)]
pub(crate) struct SqlArgs {
    /// Database user
    #[arg(short, long, env = concat!(SQL_ENV_PREFIX, "USER"))]
    pub(crate) user: Option<String>,

    /// Database password
    #[arg(short, long, env = concat!(SQL_ENV_PREFIX, "PASSWORD"), hide_env_values = true)]
    pub(crate) password: Option<String>,

    /// Database server
    #[arg(short, long, env = concat!(SQL_ENV_PREFIX, "SERVER"))]
    pub(crate) server: Option<String>,

    /// Database port
    #[arg(
        short = 'P',
        long,
        default_value_t = waitfor::DEFAULT_SQL_PORT,
        env = concat!(SQL_ENV_PREFIX, "PORT")
    )]
    pub(crate) port: u16,

    /// Database name
    #[arg(short, long, env = concat!(SQL_ENV_PREFIX, "DATABASE"))]
    pub(crate) database: Option<String>,

    /// Number of retries
    #[arg(short, long, default_value_t = 10, env = concat!(SQL_ENV_PREFIX, "RETRIES"))]
    pub(crate) retries: u32,
}
