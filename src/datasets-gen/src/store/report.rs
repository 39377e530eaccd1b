use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;

use bytesize::ByteSize;
use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::store::activities::Activity;
use crate::store::dictionary::ActivityType;
use crate::store::dictionary::Device;
use crate::store::dictionary::OrderStatus;
use crate::store::orders::Order;
use crate::store::products::Product;
use crate::store::schema::table_memory_size;
use crate::store::schema::Table;
use crate::DATETIME_FORMAT;

pub struct TableSummary {
    pub file_name: &'static str,
    pub rows: usize,
    pub columns: usize,
    pub memory_size: ByteSize,
    pub period: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

impl TableSummary {
    fn new<T: Table, F>(rows: &[T], ts: F) -> Self
    where
        F: Fn(&T) -> Option<DateTime<Utc>>,
    {
        let min = rows.iter().filter_map(&ts).min();
        let max = rows.iter().filter_map(&ts).max();

        Self {
            file_name: T::FILE_NAME,
            rows: rows.len(),
            columns: T::COLUMNS.len(),
            memory_size: ByteSize::b(table_memory_size(rows) as u64),
            period: min.zip(max),
        }
    }
}

impl Display for TableSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.file_name)?;
        writeln!(f, "  - rows: {}", self.rows)?;
        writeln!(f, "  - columns: {}", self.columns)?;
        write!(f, "  - size: {}", self.memory_size)?;
        if let Some((from, to)) = self.period {
            write!(
                f,
                "\n  - period: {} to {}",
                from.format(DATETIME_FORMAT),
                to.format(DATETIME_FORMAT)
            )?;
        }

        Ok(())
    }
}

/// Descriptive statistics over the generated tables.
pub struct Summary {
    pub products: TableSummary,
    pub activities: TableSummary,
    pub orders: TableSummary,
    pub categories: usize,
    pub avg_price: Decimal,
    pub max_price: Option<Decimal>,
    pub min_price: Option<Decimal>,
    pub active_users: usize,
    pub views: usize,
    pub added_to_cart: usize,
    pub top_device: Option<Device>,
    pub buying_users: usize,
    pub conversion_rate: f64,
    pub avg_ticket: Decimal,
    pub total_sales: Decimal,
    pub top_status: Option<OrderStatus>,
}

impl Summary {
    pub fn new(products: &[Product], activities: &[Activity], orders: &[Order]) -> Self {
        let active_users = activities
            .iter()
            .map(|a| a.user_id)
            .collect::<HashSet<_>>()
            .len();
        let buying_users = orders
            .iter()
            .map(|o| o.user_id)
            .collect::<HashSet<_>>()
            .len();
        let conversion_rate = if active_users == 0 {
            0.
        } else {
            buying_users as f64 / active_users as f64 * 100.
        };
        let total_sales: Decimal = orders.iter().map(|o| o.total_amount).sum();

        Self {
            products: TableSummary::new(products, |_| None),
            activities: TableSummary::new(activities, |a| Some(a.timestamp)),
            orders: TableSummary::new(orders, |o| Some(o.order_date)),
            categories: products
                .iter()
                .map(|p| p.category)
                .collect::<HashSet<_>>()
                .len(),
            avg_price: mean(products.iter().map(|p| p.price).sum(), products.len()),
            max_price: products.iter().map(|p| p.price).max(),
            min_price: products.iter().map(|p| p.price).min(),
            active_users,
            views: count_activities(activities, ActivityType::View),
            added_to_cart: count_activities(activities, ActivityType::AddToCart),
            top_device: mode(activities.iter().map(|a| a.device)),
            buying_users,
            conversion_rate,
            avg_ticket: mean(total_sales, orders.len()),
            total_sales,
            top_status: mode(orders.iter().map(|o| o.status)),
        }
    }

    pub fn memory_size(&self) -> ByteSize {
        self.products.memory_size + self.activities.memory_size + self.orders.memory_size
    }
}

fn count_activities(activities: &[Activity], typ: ActivityType) -> usize {
    activities.iter().filter(|a| a.activity_type == typ).count()
}

fn mean(sum: Decimal, n: usize) -> Decimal {
    if n == 0 {
        return Decimal::ZERO;
    }

    sum / Decimal::from(n)
}

/// Most frequent value. Ties go to the smallest label.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Copy + Eq + Hash + Display,
    I: Iterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }

    counts
        .into_iter()
        .max_by(|(a, a_cnt), (b, b_cnt)| {
            a_cnt
                .cmp(b_cnt)
                .then_with(|| b.to_string().cmp(&a.to_string()))
        })
        .map(|(v, _)| v)
}

fn fmt_opt<T: Display>(v: &Option<T>) -> String {
    match v {
        None => "-".to_string(),
        Some(v) => v.to_string(),
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "generated datasets:")?;
        writeln!(f, "{}", self.products)?;
        writeln!(f, "{}", self.activities)?;
        writeln!(f, "{}", self.orders)?;
        writeln!(f, "total size: {}", self.memory_size())?;
        writeln!(f)?;
        writeln!(f, "products:")?;
        writeln!(f, "  - categories: {}", self.categories)?;
        writeln!(f, "  - average price: ${:.2}", self.avg_price)?;
        writeln!(f, "  - most expensive: ${}", fmt_opt(&self.max_price))?;
        writeln!(f, "  - cheapest: ${}", fmt_opt(&self.min_price))?;
        writeln!(f, "user activity:")?;
        writeln!(f, "  - unique users: {}", self.active_users)?;
        writeln!(f, "  - products viewed: {}", self.views)?;
        writeln!(f, "  - items added to cart: {}", self.added_to_cart)?;
        writeln!(f, "  - most used device: {}", fmt_opt(&self.top_device))?;
        writeln!(f, "orders:")?;
        writeln!(f, "  - buying users: {}", self.buying_users)?;
        writeln!(f, "  - conversion rate: {:.2}%", self.conversion_rate)?;
        writeln!(f, "  - average ticket: ${:.2}", self.avg_ticket)?;
        writeln!(f, "  - total sales: ${:.2}", self.total_sales)?;
        write!(f, "  - most common status: {}", fmt_opt(&self.top_status))
    }
}
