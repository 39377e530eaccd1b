use std::path::PathBuf;
use std::time::Instant;

use bytesize::ByteSize;
use chrono::DateTime;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing::info;

use crate::error::DatasetsGenError;
use crate::error::Result;
use crate::output::write_csv;
use crate::store::activities;
use crate::store::activities::ActivityGenerator;
use crate::store::orders;
use crate::store::orders::OrderGenerator;
use crate::store::products::ProductProvider;
use crate::store::report::Summary;
use crate::store::schema::table_memory_size;
use crate::store::schema::Table;
use crate::store::TimeWindow;

#[derive(Debug, Clone)]
pub struct Config {
    pub seed: u64,
    pub out_path: PathBuf,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub products: usize,
    pub users: usize,
    pub activities: usize,
    pub activity_batch_size: usize,
    pub orders: usize,
    pub order_batch_size: usize,
}

pub struct Scenario {
    rng: StdRng,
    out_path: PathBuf,
    window: TimeWindow,
    products: usize,
    users: u64,
    activities: usize,
    activity_batch_size: usize,
    orders: usize,
    order_batch_size: usize,
}

impl Scenario {
    pub fn try_new(cfg: Config) -> Result<Self> {
        if cfg.products == 0 || cfg.users == 0 {
            return Err(DatasetsGenError::General(
                "products and users should be greater than zero".to_string(),
            ));
        }
        if cfg.activity_batch_size == 0 || cfg.order_batch_size == 0 {
            return Err(DatasetsGenError::General(
                "batch sizes should be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            rng: StdRng::seed_from_u64(cfg.seed),
            out_path: cfg.out_path,
            window: TimeWindow::try_new(cfg.from, cfg.to)?,
            products: cfg.products,
            users: cfg.users as u64,
            activities: cfg.activities,
            activity_batch_size: cfg.activity_batch_size,
            orders: cfg.orders,
            order_batch_size: cfg.order_batch_size,
        })
    }

    /// Generates and writes the three tables in order: products, user activity, orders.
    pub fn run(&mut self) -> Result<Summary> {
        let started = Instant::now();
        debug!("out path: {:?}", self.out_path);
        debug!(
            "time window: {} - {}",
            self.window.from(),
            self.window.to()
        );

        info!("generating {} products...", self.products);
        let products = ProductProvider::try_new(&mut self.rng, self.products)?;
        self.write(&products.products)?;

        info!("generating {} activity events...", self.activities);
        let activities = ActivityGenerator::new(activities::Config {
            users: self.users,
            products: products.len() as u64,
            window: self.window,
            total: self.activities,
            batch_size: self.activity_batch_size,
        })
        .generate(&mut self.rng)?;
        self.write(&activities)?;

        info!("generating {} orders...", self.orders);
        let orders = OrderGenerator::try_new(orders::Config {
            users: self.users,
            products: &products,
            window: self.window,
            total: self.orders,
            batch_size: self.order_batch_size,
        })?
        .generate(&mut self.rng)?;
        self.write(&orders)?;

        info!(
            "generation finished in {}",
            humantime::format_duration(started.elapsed())
        );

        Ok(Summary::new(&products.products, &activities, &orders))
    }

    fn write<T: Table>(&self, rows: &[T]) -> Result<()> {
        let path = self.out_path.join(T::FILE_NAME);
        write_csv(&path, rows)?;
        info!(
            "{} created: {} rows, {} in memory",
            path.display(),
            rows.len(),
            ByteSize::b(table_memory_size(rows) as u64)
        );

        Ok(())
    }
}
