use std::mem;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::Result;
use crate::store::batch_builder::BatchBuilder;
use crate::store::dictionary::OrderStatus;
use crate::store::dictionary::PaymentMethod;
use crate::store::dictionary::DISCOUNT_TIERS;
use crate::store::products::ProductProvider;
use crate::store::round_decimal;
use crate::store::round_float;
use crate::store::schema::serialize_datetime;
use crate::store::schema::Table;
use crate::store::TimeWindow;
use crate::DECIMAL_SCALE;

#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub order_id: u64,
    pub user_id: u64,
    pub product_id: u64,
    pub quantity: u32,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub total_amount: Decimal,
    #[serde(serialize_with = "serialize_datetime")]
    pub order_date: DateTime<Utc>,
    #[serde(serialize_with = "serialize_datetime")]
    pub delivery_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
}

impl Table for Order {
    const FILE_NAME: &'static str = "orders.csv";
    const COLUMNS: &'static [&'static str] = &[
        "order_id",
        "user_id",
        "product_id",
        "quantity",
        "subtotal",
        "discount",
        "tax",
        "shipping",
        "total_amount",
        "order_date",
        "delivery_date",
        "status",
        "payment_method",
    ];

    fn memory_size(&self) -> usize {
        mem::size_of::<Self>()
    }
}

pub struct Config<'a> {
    pub users: u64,
    pub products: &'a ProductProvider,
    pub window: TimeWindow,
    pub total: usize,
    pub batch_size: usize,
}

pub struct OrderGenerator<'a> {
    users: u64,
    products: &'a ProductProvider,
    window: TimeWindow,
    total: usize,
    batch_size: usize,
    discount_weight_idx: WeightedIndex<f64>,
    tax_rate: Decimal,
}

impl<'a> OrderGenerator<'a> {
    pub fn try_new(cfg: Config<'a>) -> Result<Self> {
        Ok(Self {
            users: cfg.users,
            products: cfg.products,
            window: cfg.window,
            total: cfg.total,
            batch_size: cfg.batch_size,
            discount_weight_idx: WeightedIndex::new(DISCOUNT_TIERS.iter().map(|(_, w)| *w))?,
            tax_rate: Decimal::new(16, 2),
        })
    }

    fn sample(&self, rng: &mut StdRng, order_id: u64) -> Result<Order> {
        let user_id = rng.gen_range(1..=self.users);
        let product_id = rng.gen_range(1..=self.products.len() as u64);
        let price = self.products.price_by_id(product_id)?;

        let quantity: u32 = rng.gen_range(1..5);
        let subtotal = round_decimal(price * Decimal::from(quantity), DECIMAL_SCALE);

        let (discount_pct, _) = DISCOUNT_TIERS[self.discount_weight_idx.sample(rng)];
        let discount = round_decimal(
            subtotal * Decimal::from(discount_pct) / Decimal::ONE_HUNDRED,
            DECIMAL_SCALE,
        );
        let tax = round_decimal((subtotal - discount) * self.tax_rate, DECIMAL_SCALE);

        // free shipping for 30% of orders
        let shipping = if rng.gen::<f64>() > 0.3 {
            round_float(rng.gen_range(0.0..20.0), DECIMAL_SCALE)?
        } else {
            Decimal::new(0, DECIMAL_SCALE)
        };

        let total_amount = round_decimal(subtotal - discount + tax + shipping, DECIMAL_SCALE);

        let order_date = self.window.sample(rng);
        let delivery_date = order_date + Duration::days(rng.gen_range(3..16));

        Ok(Order {
            order_id,
            user_id,
            product_id,
            quantity,
            subtotal,
            discount,
            tax,
            shipping,
            total_amount,
            order_date,
            delivery_date,
            status: rng.gen(),
            payment_method: rng.gen(),
        })
    }

    /// Generates the whole order table sorted by order date.
    pub fn generate(&self, rng: &mut StdRng) -> Result<Vec<Order>> {
        let builder = BatchBuilder::try_new("orders", self.total, self.batch_size)?;
        let mut orders = builder.build(|order_id| self.sample(rng, order_id))?;
        orders.sort_by_key(|o| o.order_date);

        Ok(orders)
    }
}
