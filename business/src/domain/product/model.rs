use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned product identifier. Never reused within a process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub stock_quantity: i32,
    pub expiration_date: Option<NaiveDate>,
    pub creation_date: DateTime<Utc>,
    pub last_updated_date: DateTime<Utc>,
}

impl Product {
    /// Derived on every read, never stored.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock_quantity == 0
    }

    /// Overwrites every mutable field. `id` and `creation_date` are left untouched.
    pub fn apply_update(&mut self, input: ProductInput, now: DateTime<Utc>) {
        self.name = input.name;
        self.category = input.category;
        self.unit_price = input.unit_price;
        self.stock_quantity = input.stock_quantity;
        self.expiration_date = input.expiration_date;
        self.last_updated_date = now;
    }
}

/// The caller-supplied part of a product, shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub stock_quantity: i32,
    pub expiration_date: Option<NaiveDate>,
}

/// A product record that has not been given an id by the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub stock_quantity: i32,
    pub expiration_date: Option<NaiveDate>,
    pub creation_date: DateTime<Utc>,
    pub last_updated_date: DateTime<Utc>,
}

impl NewProduct {
    /// Stamps both timestamps with `now`.
    pub fn from_input(input: ProductInput, now: DateTime<Utc>) -> Self {
        Self {
            name: input.name,
            category: input.category,
            unit_price: input.unit_price,
            stock_quantity: input.stock_quantity,
            expiration_date: input.expiration_date,
            creation_date: now,
            last_updated_date: now,
        }
    }

    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            unit_price: self.unit_price,
            stock_quantity: self.stock_quantity,
            expiration_date: self.expiration_date,
            creation_date: self.creation_date,
            last_updated_date: self.last_updated_date,
        }
    }
}
