use serde::Serialize;

use stockroom_core::{DomainError, DomainResult};

/// A single product: name, units in stock, and unit price.
///
/// Inventory and price are taken as given; negative values are not rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    inventory: i64,
    price: f64,
}

impl Product {
    /// Create a product holding its own copy of `name`.
    ///
    /// The name buffer is reserved fallibly; if that fails nothing is kept and
    /// `DomainError::AllocationFailure` is returned.
    pub fn new(name: &str, inventory: i64, price: f64) -> DomainResult<Self> {
        let mut owned = String::new();
        if let Err(err) = owned.try_reserve_exact(name.len()) {
            tracing::error!(len = name.len(), error = %err, "cannot allocate product name");
            return Err(DomainError::from_reserve("product name", err));
        }
        owned.push_str(name);

        Ok(Self {
            name: owned,
            inventory,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inventory(&self) -> i64 {
        self.inventory
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Value of the stock on hand: `inventory * price`.
    pub fn investment(&self) -> f64 {
        self.inventory as f64 * self.price
    }

    /// Release the record and its name buffer.
    pub fn destroy(self) {
        drop(self);
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product: {}, Inventory: {}, Price: {:.2}",
            self.name, self.inventory, self.price
        )
    }
}

/// Destroy a product that may not exist. `None` is a no-op.
pub fn destroy_product(product: Option<Product>) {
    if let Some(product) = product {
        product.destroy();
    }
}
