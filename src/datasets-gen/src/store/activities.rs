use std::mem;

use chrono::DateTime;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

use crate::error::Result;
use crate::store::batch_builder::BatchBuilder;
use crate::store::dictionary::ActivityType;
use crate::store::dictionary::Device;
use crate::store::dictionary::TrafficSource;
use crate::store::schema::serialize_datetime;
use crate::store::schema::Table;
use crate::store::TimeWindow;

#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub activity_id: u64,
    pub user_id: u64,
    pub product_id: u64,
    pub activity_type: ActivityType,
    #[serde(serialize_with = "serialize_datetime")]
    pub timestamp: DateTime<Utc>,
    pub device: Device,
    pub traffic_source: TrafficSource,
    pub session_id: String,
    pub duration_seconds: u32,
}

impl Table for Activity {
    const FILE_NAME: &'static str = "user_activity.csv";
    const COLUMNS: &'static [&'static str] = &[
        "activity_id",
        "user_id",
        "product_id",
        "activity_type",
        "timestamp",
        "device",
        "traffic_source",
        "session_id",
        "duration_seconds",
    ];

    fn memory_size(&self) -> usize {
        mem::size_of::<Self>() + self.session_id.capacity()
    }
}

pub struct Config {
    pub users: u64,
    pub products: u64,
    pub window: TimeWindow,
    pub total: usize,
    pub batch_size: usize,
}

pub struct ActivityGenerator {
    users: u64,
    products: u64,
    window: TimeWindow,
    total: usize,
    batch_size: usize,
}

impl ActivityGenerator {
    pub fn new(cfg: Config) -> Self {
        Self {
            users: cfg.users,
            products: cfg.products,
            window: cfg.window,
            total: cfg.total,
            batch_size: cfg.batch_size,
        }
    }

    fn sample(&self, rng: &mut StdRng, activity_id: u64) -> Activity {
        let user_id = rng.gen_range(1..=self.users);
        let product_id = rng.gen_range(1..=self.products);
        let activity_type: ActivityType = rng.gen();
        let timestamp = self.window.sample(rng);
        let device = rng.gen();
        let traffic_source = rng.gen();
        let session_id = format!("session_{user_id}_{}", rng.gen_range(1..50));
        let duration_seconds = rng.gen_range(activity_type.duration_range());

        Activity {
            activity_id,
            user_id,
            product_id,
            activity_type,
            timestamp,
            device,
            traffic_source,
            session_id,
            duration_seconds,
        }
    }

    /// Generates the whole event log sorted by timestamp. Ids follow generation
    /// order, so they are not monotonic after the sort.
    pub fn generate(&self, rng: &mut StdRng) -> Result<Vec<Activity>> {
        let builder = BatchBuilder::try_new("user activity", self.total, self.batch_size)?;
        let mut activities = builder.build(|activity_id| Ok(self.sample(rng, activity_id)))?;
        activities.sort_by_key(|a| a.timestamp);

        Ok(activities)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::TimeZone;
    use rand::SeedableRng;

    use super::*;

    fn generator(total: usize) -> (ActivityGenerator, TimeWindow) {
        let to = Utc.with_ymd_and_hms(2024, 3, 10, 8, 30, 0).unwrap();
        let window = TimeWindow::try_new(to - Duration::days(365), to).unwrap();
        let gen = ActivityGenerator::new(Config {
            users: 100,
            products: 50,
            window,
            total,
            batch_size: 333,
        });
        (gen, window)
    }

    #[test]
    fn test_generate() {
        let (gen, window) = generator(2000);
        let mut rng = StdRng::seed_from_u64(42);
        let activities = gen.generate(&mut rng).unwrap();
        assert_eq!(activities.len(), 2000);

        for a in activities.iter() {
            assert!((1..=100).contains(&a.user_id));
            assert!((1..=50).contains(&a.product_id));
            assert!(a.timestamp >= window.from() && a.timestamp < window.to());
            assert!(a.activity_type.duration_range().contains(&a.duration_seconds));

            let session = a
                .session_id
                .strip_prefix(&format!("session_{}_", a.user_id))
                .unwrap();
            let session: u32 = session.parse().unwrap();
            assert!((1..50).contains(&session));
        }

        assert!(activities.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

        let mut ids: Vec<u64> = activities.iter().map(|a| a.activity_id).collect();
        ids.sort();
        assert_eq!(ids, (1..=2000).collect::<Vec<u64>>());
    }

    #[test]
    fn test_view_lasts_longer() {
        let (gen, _) = generator(3000);
        let mut rng = StdRng::seed_from_u64(3);
        let activities = gen.generate(&mut rng).unwrap();

        let longest_other = activities
            .iter()
            .filter(|a| a.activity_type != ActivityType::View)
            .map(|a| a.duration_seconds)
            .max()
            .unwrap();
        assert!(longest_other < 60);
        assert!(activities
            .iter()
            .any(|a| a.activity_type == ActivityType::View && a.duration_seconds >= 60));
    }
}
