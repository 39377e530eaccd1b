use std::path::PathBuf;

use clap::Parser;
use datasets_gen::store::scenario;
use datasets_gen::store::scenario::Scenario;
use tracing::debug;
use tracing::info;

use crate::config::Config;
use crate::config::LogLevel;
use crate::error::Result;

#[derive(Parser, Clone, Debug, Default)]
pub struct Generate {
    /// TOML file overriding the embedded defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
    /// Directory the csv files are written to
    #[arg(long)]
    pub out_path: Option<PathBuf>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// End of the date window, current time by default
    #[arg(long)]
    pub to_date: Option<String>,
    /// Length of the date window, e.g. "365 days"
    #[arg(long)]
    pub duration: Option<String>,
}

impl Generate {
    /// Loads the config and applies the command line overrides on top of it.
    pub fn load_config(&self) -> Result<Config> {
        let mut cfg = Config::load(self.config.as_deref())?;
        if let Some(level) = self.log_level {
            cfg.log.level = level;
        }
        if let Some(path) = &self.out_path {
            cfg.generator.out_path = path.clone();
        }
        if let Some(seed) = self.seed {
            cfg.generator.seed = seed;
        }
        if let Some(to_date) = &self.to_date {
            cfg.generator.to_date = Some(to_date.clone());
        }
        if let Some(duration) = &self.duration {
            cfg.generator.duration = duration.clone();
        }

        Ok(cfg)
    }
}

pub fn start(cfg: Config) -> Result<()> {
    let cfg: scenario::Config = cfg.generator.try_into()?;
    debug!("seed: {}", cfg.seed);
    debug!("from date {}", cfg.from);
    debug!("to date {}", cfg.to);
    debug!(
        "time range: {}",
        humantime::format_duration((cfg.to - cfg.from).to_std()?)
    );
    info!(
        "expecting {} products, {} activity events, {} orders from {} users",
        cfg.products, cfg.activities, cfg.orders, cfg.users
    );
    info!("starting data generation...");

    let mut scenario = Scenario::try_new(cfg)?;
    let summary = scenario.run()?;
    info!("successfully generated!");
    println!("{summary}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;
    use std::fs;

    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_overrides() {
        let args = Generate {
            log_level: Some(LogLevel::Warn),
            out_path: Some(PathBuf::from("/tmp/out")),
            seed: Some(1),
            to_date: Some("2024-01-01".to_string()),
            duration: Some("30 days".to_string()),
            ..Default::default()
        };

        let cfg = args.load_config().unwrap();
        assert_eq!(cfg.log.level, LogLevel::Warn);
        assert_eq!(cfg.generator.out_path, PathBuf::from("/tmp/out"));
        assert_eq!(cfg.generator.seed, 1);
        assert_eq!(cfg.generator.to_date, Some("2024-01-01".to_string()));
        assert_eq!(cfg.generator.duration, "30 days");
        assert_eq!(cfg.generator.orders, 2_000_000);
    }

    #[test]
    fn test_start() {
        let out = temp_dir().join(format!("datasets-{}", Uuid::new_v4()));
        fs::create_dir_all(&out).unwrap();

        let mut cfg = Config::default();
        cfg.generator.out_path = out.clone();
        cfg.generator.to_date = Some("2024-01-01T00:00:00Z".to_string());
        cfg.generator.products = 20;
        cfg.generator.users = 30;
        cfg.generator.activities = 100;
        cfg.generator.activity_batch_size = 40;
        cfg.generator.orders = 50;
        cfg.generator.order_batch_size = 40;

        start(cfg).unwrap();
        let orders = fs::read_to_string(out.join("orders.csv")).unwrap();
        assert_eq!(orders.lines().count(), 51);
    }
}
