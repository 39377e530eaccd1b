use std::ops::Range;

use enum_iterator::all;
use enum_iterator::cardinality;
use enum_iterator::Sequence;
use rand::distributions::Distribution;
use rand::distributions::Standard;
use rand::Rng;
use serde::Serialize;
use strum_macros::Display;

// uniform choice over every variant of a fixed label set
macro_rules! uniform_sample {
    ($t:ty) => {
        impl Distribution<$t> for Standard {
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $t {
                let idx = rng.gen_range(0..cardinality::<$t>());
                all::<$t>()
                    .nth(idx)
                    .expect("index is within enum cardinality")
            }
        }
    };
}

#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Display, Sequence, Serialize)]
pub enum Category {
    #[strum(serialize = "Electronics")]
    #[serde(rename = "Electronics")]
    Electronics,
    #[strum(serialize = "Clothing")]
    #[serde(rename = "Clothing")]
    Clothing,
    #[strum(serialize = "Home & Garden")]
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    #[strum(serialize = "Sports & Outdoors")]
    #[serde(rename = "Sports & Outdoors")]
    SportsAndOutdoors,
    #[strum(serialize = "Books")]
    #[serde(rename = "Books")]
    Books,
    #[strum(serialize = "Toys & Games")]
    #[serde(rename = "Toys & Games")]
    ToysAndGames,
    #[strum(serialize = "Beauty & Personal Care")]
    #[serde(rename = "Beauty & Personal Care")]
    BeautyAndPersonalCare,
    #[strum(serialize = "Food & Beverages")]
    #[serde(rename = "Food & Beverages")]
    FoodAndBeverages,
    #[strum(serialize = "Automotive")]
    #[serde(rename = "Automotive")]
    Automotive,
    #[strum(serialize = "Health & Wellness")]
    #[serde(rename = "Health & Wellness")]
    HealthAndWellness,
}

impl Category {
    pub fn subcategories(&self) -> &'static [&'static str] {
        match self {
            Category::Electronics => &[
                "Smartphones",
                "Laptops",
                "Headphones",
                "Cameras",
                "Smartwatches",
            ],
            Category::Clothing => &["Shirts", "Pants", "Dresses", "Shoes", "Accessories"],
            Category::HomeAndGarden => &["Furniture", "Kitchen", "Bedding", "Decor", "Tools"],
            Category::SportsAndOutdoors => {
                &["Fitness", "Camping", "Cycling", "Swimming", "Team Sports"]
            }
            Category::Books => &[
                "Fiction",
                "Non-Fiction",
                "Educational",
                "Comics",
                "Magazines",
            ],
            Category::ToysAndGames => &[
                "Action Figures",
                "Board Games",
                "Puzzles",
                "Educational",
                "Video Games",
            ],
            Category::BeautyAndPersonalCare => {
                &["Skincare", "Makeup", "Haircare", "Fragrances", "Bath"]
            }
            Category::FoodAndBeverages => &["Snacks", "Beverages", "Canned", "Frozen", "Fresh"],
            Category::Automotive => &["Parts", "Accessories", "Tools", "Care", "Electronics"],
            Category::HealthAndWellness => &[
                "Vitamins",
                "Supplements",
                "Medical",
                "Fitness",
                "Personal Care",
            ],
        }
    }

    /// Base price range, upper bound exclusive.
    pub fn price_range(&self) -> Range<f64> {
        match self {
            Category::Electronics => 50.0..2000.0,
            Category::Clothing | Category::BeautyAndPersonalCare => 10.0..200.0,
            Category::HomeAndGarden => 20.0..500.0,
            _ => 5.0..150.0,
        }
    }
}

uniform_sample!(Category);

#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Display, Sequence, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    View,
    AddToCart,
    RemoveFromCart,
    Wishlist,
    Search,
    Review,
}

impl ActivityType {
    /// Range of the activity duration in seconds, upper bound exclusive.
    pub fn duration_range(&self) -> Range<u32> {
        match self {
            ActivityType::View => 5..600,
            _ => 1..60,
        }
    }
}

uniform_sample!(ActivityType);

#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Display, Sequence, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Device {
    Mobile,
    Desktop,
    Tablet,
}

uniform_sample!(Device);

#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Display, Sequence, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TrafficSource {
    Organic,
    PaidSearch,
    Social,
    Direct,
    Email,
    Referral,
}

uniform_sample!(TrafficSource);

#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Display, Sequence, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Completed,
    Processing,
    Shipped,
    Cancelled,
    Returned,
}

uniform_sample!(OrderStatus);

#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Display, Sequence, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Paypal,
    BankTransfer,
    CashOnDelivery,
}

uniform_sample!(PaymentMethod);

/// Discount percentages and their probabilities.
pub const DISCOUNT_TIERS: [(u32, f64); 6] = [
    (0, 0.5),
    (5, 0.2),
    (10, 0.15),
    (15, 0.1),
    (20, 0.04),
    (30, 0.01),
];

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Category::HomeAndGarden.to_string(), "Home & Garden");
        assert_eq!(
            Category::BeautyAndPersonalCare.to_string(),
            "Beauty & Personal Care"
        );
        assert_eq!(ActivityType::AddToCart.to_string(), "add_to_cart");
        assert_eq!(TrafficSource::PaidSearch.to_string(), "paid_search");
        assert_eq!(PaymentMethod::CashOnDelivery.to_string(), "cash_on_delivery");
        assert_eq!(cardinality::<Category>(), 10);
        assert_eq!(cardinality::<ActivityType>(), 6);
    }

    #[test]
    fn test_every_category_has_five_subcategories() {
        for category in all::<Category>() {
            assert_eq!(category.subcategories().len(), 5, "{category}");
        }
    }

    #[test]
    fn test_uniform_sample_hits_every_variant() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = vec![];
        for _ in 0..1000 {
            let device: Device = rng.gen();
            if !seen.contains(&device) {
                seen.push(device);
            }
        }
        assert_eq!(seen.len(), cardinality::<Device>());
    }

    #[test]
    fn test_discount_weights_sum_to_one() {
        let sum: f64 = DISCOUNT_TIERS.iter().map(|(_, w)| w).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
