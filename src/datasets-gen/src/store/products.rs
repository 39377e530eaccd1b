use std::mem;

use rand::rngs::StdRng;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::DatasetsGenError;
use crate::error::Result;
use crate::store::dictionary::Category;
use crate::store::round_decimal;
use crate::store::round_float;
use crate::store::schema::Table;
use crate::DECIMAL_SCALE;

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub product_id: u64,
    pub product_name: String,
    pub category: Category,
    pub subcategory: &'static str,
    pub price: Decimal,
    pub cost: Decimal,
    pub stock_quantity: u32,
    pub rating: Decimal,
    pub num_reviews: u32,
    pub brand: String,
}

impl Table for Product {
    const FILE_NAME: &'static str = "products.csv";
    const COLUMNS: &'static [&'static str] = &[
        "product_id",
        "product_name",
        "category",
        "subcategory",
        "price",
        "cost",
        "stock_quantity",
        "rating",
        "num_reviews",
        "brand",
    ];

    fn memory_size(&self) -> usize {
        mem::size_of::<Self>() + self.product_name.capacity() + self.brand.capacity()
    }
}

impl Product {
    fn sample(rng: &mut StdRng, product_id: u64) -> Result<Self> {
        let category: Category = rng.gen();
        let subcategories = category.subcategories();
        let subcategory = subcategories[rng.gen_range(0..subcategories.len())];

        let price = round_float(rng.gen_range(category.price_range()), DECIMAL_SCALE)?;
        let cost = round_decimal(
            price * Decimal::try_from(rng.gen_range(0.4..0.7))?,
            DECIMAL_SCALE,
        );
        let stock_quantity = rng.gen_range(0..1000);
        let rating = round_float(rng.gen_range(1.5..5.0), 1)?;
        let num_reviews = rng.gen_range(0..5000);
        let brand = format!("Brand_{}", rng.gen_range(1..200));

        Ok(Product {
            product_id,
            product_name: format!("{subcategory} Item {product_id}"),
            category,
            subcategory,
            price,
            cost,
            stock_quantity,
            rating,
            num_reviews,
            brand,
        })
    }
}

/// The product catalog. Ids are sequential from 1, so lookups index directly.
pub struct ProductProvider {
    pub products: Vec<Product>,
}

impl ProductProvider {
    pub fn try_new(rng: &mut StdRng, count: usize) -> Result<Self> {
        let mut products = Vec::with_capacity(count);
        for idx in 0..count {
            products.push(Product::sample(rng, idx as u64 + 1)?);
        }

        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get_product_by_id(&self, id: u64) -> Option<&Product> {
        let idx = usize::try_from(id).ok()?.checked_sub(1)?;
        self.products.get(idx)
    }

    pub fn price_by_id(&self, id: u64) -> Result<Decimal> {
        self.get_product_by_id(id)
            .map(|p| p.price)
            .ok_or_else(|| DatasetsGenError::Internal(format!("product {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn provider(count: usize) -> ProductProvider {
        let mut rng = StdRng::seed_from_u64(42);
        ProductProvider::try_new(&mut rng, count).unwrap()
    }

    #[test]
    fn test_products_within_ranges() {
        let products = provider(5000);
        assert_eq!(products.len(), 5000);

        for (idx, p) in products.products.iter().enumerate() {
            assert_eq!(p.product_id, idx as u64 + 1);
            assert!(p.category.subcategories().contains(&p.subcategory));
            assert_eq!(
                p.product_name,
                format!("{} Item {}", p.subcategory, p.product_id)
            );

            let range = p.category.price_range();
            let min = Decimal::try_from(range.start).unwrap();
            let max = Decimal::try_from(range.end).unwrap();
            assert!(p.price >= min && p.price <= max, "price {}", p.price);
            assert_eq!(p.price.scale(), 2);
            assert_eq!(p.cost.scale(), 2);

            assert!(p.cost >= (p.price * Decimal::new(4, 1)).round_dp(2));
            assert!(p.cost <= (p.price * Decimal::new(7, 1)).round_dp(2));

            assert!(p.stock_quantity < 1000);
            assert!(p.rating >= Decimal::new(15, 1) && p.rating <= Decimal::new(50, 1));
            assert_eq!(p.rating.scale(), 1);
            assert!(p.num_reviews < 5000);

            let brand: u32 = p.brand.strip_prefix("Brand_").unwrap().parse().unwrap();
            assert!((1..200).contains(&brand));
        }
    }

    #[test]
    fn test_get_product_by_id() {
        let products = provider(10);
        assert_eq!(products.get_product_by_id(1).unwrap().product_id, 1);
        assert_eq!(products.get_product_by_id(10).unwrap().product_id, 10);
        assert!(products.get_product_by_id(0).is_none());
        assert!(products.get_product_by_id(11).is_none());

        assert_eq!(
            products.price_by_id(3).unwrap(),
            products.products[2].price
        );
        assert!(products.price_by_id(11).is_err());
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let a = provider(100);
        let b = provider(100);
        for (a, b) in a.products.iter().zip(b.products.iter()) {
            assert_eq!(a.product_name, b.product_name);
            assert_eq!(a.price, b.price);
            assert_eq!(a.brand, b.brand);
        }
    }
}
