use std::path::Path;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Duration;
use chrono::NaiveTime;
use chrono::SubsecRound;
use chrono::Utc;
use clap::ValueEnum;
use datasets_gen::store::scenario;
use serde_derive::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::error::Error;
use crate::error::Result;

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Log {
    pub level: LogLevel,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Generator {
    pub seed: u64,
    pub out_path: PathBuf,
    /// End of the date window. Current time when unset.
    pub to_date: Option<String>,
    pub duration: String,
    pub products: usize,
    pub users: usize,
    pub activities: usize,
    pub activity_batch_size: usize,
    pub orders: usize,
    pub order_batch_size: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            seed: 42,
            out_path: PathBuf::from("."),
            to_date: None,
            duration: "365 days".to_string(),
            products: 50_000,
            users: 100_000,
            activities: 5_000_000,
            activity_batch_size: 500_000,
            orders: 2_000_000,
            order_batch_size: 200_000,
        }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log: Log,
    pub generator: Generator,
}

impl Config {
    /// Embedded defaults, overlaid with the file when one is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            if !path.try_exists()? {
                return Err(Error::FileNotFound(format!(
                    "config {path:?} doesn't exist"
                )));
            }
            builder = builder.add_source(config::File::from(path));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

fn parse_duration(s: &str) -> Result<Duration> {
    Ok(Duration::from_std(parse_duration::parse(s)?)?)
}

/// Values without a time of day or zone are read as midnight UTC.
fn parse_date(s: &str) -> Result<DateTime<Utc>> {
    let midnight = NaiveTime::from_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::BadRequest("invalid default time".to_string()))?;

    Ok(dateparser::parse_with(s, &Utc, midnight)?)
}

fn positive(name: &str, v: usize) -> Result<usize> {
    if v == 0 {
        return Err(Error::BadRequest(format!(
            "{name} should be greater than zero"
        )));
    }

    Ok(v)
}

impl TryFrom<Generator> for scenario::Config {
    type Error = Error;

    fn try_from(cfg: Generator) -> Result<Self> {
        let to = match &cfg.to_date {
            None => Utc::now(),
            Some(dt) => parse_date(dt)?,
        }
        .trunc_subsecs(0);
        let duration = parse_duration(cfg.duration.as_str())?;
        if duration <= Duration::zero() {
            return Err(Error::BadRequest(format!(
                "duration {:?} should be positive",
                cfg.duration
            )));
        }

        if !cfg.out_path.try_exists()? {
            return Err(Error::FileNotFound(format!(
                "out path {:?} doesn't exist",
                cfg.out_path
            )));
        }

        Ok(scenario::Config {
            seed: cfg.seed,
            out_path: cfg.out_path,
            from: to - duration,
            to,
            products: positive("products", cfg.products)?,
            users: positive("users", cfg.users)?,
            activities: cfg.activities,
            activity_batch_size: positive("activity_batch_size", cfg.activity_batch_size)?,
            orders: cfg.orders,
            order_batch_size: positive("order_batch_size", cfg.order_batch_size)?,
        })
    }
}

#[derive(Deserialize, Copy, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    #[serde(rename = "trace")]
    Trace,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "error")]
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}
