//! Owning collection of products.
//!
//! The collection is the only owner of its records. Queries hand out
//! borrows into it; the sorter reorders it in place; `destroy` (or drop)
//! releases every record exactly once.

use std::io;

use serde::Serialize;

use stockroom_core::{DomainError, DomainResult};

use crate::product::Product;

/// Ordered, index-addressable sequence of owned products.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProductCollection {
    products: Vec<Product>,
}

impl ProductCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from three index-aligned input slices.
    ///
    /// `names[i]`, `inventories[i]` and `prices[i]` describe one product.
    /// Records that cannot be created are skipped with a warning, so the
    /// result may be shorter than the input. Failing to reserve the
    /// collection itself fails the whole call.
    pub fn build<S: AsRef<str>>(
        names: &[S],
        inventories: &[i64],
        prices: &[f64],
    ) -> DomainResult<Self> {
        Self::build_with(names, inventories, prices, Product::new)
    }

    /// Same as [`build`](Self::build) with a caller-supplied record constructor.
    pub fn build_with<S, F>(
        names: &[S],
        inventories: &[i64],
        prices: &[f64],
        mut create: F,
    ) -> DomainResult<Self>
    where
        S: AsRef<str>,
        F: FnMut(&str, i64, f64) -> DomainResult<Product>,
    {
        let count = names.len();
        if inventories.len() != count || prices.len() != count {
            return Err(DomainError::validation(format!(
                "input lengths differ: {} names, {} inventories, {} prices",
                count,
                inventories.len(),
                prices.len()
            )));
        }

        let mut products = Vec::new();
        if let Err(err) = products.try_reserve_exact(count) {
            tracing::error!(count, error = %err, "cannot allocate product collection");
            return Err(DomainError::from_reserve("product collection", err));
        }
        let mut collection = Self { products };

        for (index, ((name, &inventory), &price)) in
            names.iter().zip(inventories).zip(prices).enumerate()
        {
            let product = match create(name.as_ref(), inventory, price) {
                Ok(product) => product,
                Err(err) => {
                    tracing::warn!(index, error = %err, "product could not be created; skipping");
                    continue;
                }
            };
            if let Err(err) = collection.push(product) {
                tracing::warn!(index, error = %err, "product could not be stored; skipping");
            }
        }

        tracing::debug!(
            requested = count,
            built = collection.len(),
            "built product collection"
        );
        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Replace the record at `index`, returning the one it displaced.
    pub fn set(&mut self, index: usize, product: Product) -> DomainResult<Product> {
        let len = self.products.len();
        match self.products.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, product)),
            None => Err(out_of_range(index, len)),
        }
    }

    /// Insert at `index`, shifting later records back. `index == len()` appends.
    pub fn insert(&mut self, index: usize, product: Product) -> DomainResult<()> {
        if index > self.products.len() {
            return Err(out_of_range(index, self.products.len()));
        }
        self.reserve_one()?;
        self.products.insert(index, product);
        Ok(())
    }

    /// Append to the end of the collection.
    pub fn push(&mut self, product: Product) -> DomainResult<()> {
        self.reserve_one()?;
        self.products.push(product);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Product with the highest price; the first one wins on ties.
    pub fn max_price(&self) -> Option<&Product> {
        self.first_max_by(Product::price)
    }

    /// Product with the highest `inventory * price`; the first one wins on ties.
    pub fn max_investment(&self) -> Option<&Product> {
        self.first_max_by(Product::investment)
    }

    /// Reorder in place by ascending inventory (selection sort).
    ///
    /// Records with equal inventory may change relative order.
    pub fn sort_by_inventory(&mut self) {
        let len = self.products.len();
        let mut swaps = 0usize;

        for i in 0..len.saturating_sub(1) {
            let mut min_index = i;
            for j in (i + 1)..len {
                if self.products[j].inventory() < self.products[min_index].inventory() {
                    min_index = j;
                }
            }
            if min_index != i {
                self.products.swap(i, min_index);
                swaps += 1;
            }
        }

        tracing::debug!(len, swaps, "sorted products by inventory");
    }

    /// Write one display line per product, in collection order.
    pub fn write_all<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for product in &self.products {
            writeln!(out, "{product}")?;
        }
        Ok(())
    }

    /// Print every product to stdout.
    ///
    /// Stdout form of [`write_all`](Self::write_all); flushes before returning.
    pub fn print_all(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_all(&mut out)?;
        io::Write::flush(&mut out)
    }

    /// Release every record, then the backing storage.
    ///
    /// Returns how many records were released.
    pub fn destroy(self) -> usize {
        let mut products = self.products;
        let released = products.len();
        for product in products.drain(..) {
            product.destroy();
        }
        drop(products);

        tracing::debug!(released, "released product collection");
        released
    }

    fn first_max_by(&self, key: impl Fn(&Product) -> f64) -> Option<&Product> {
        let mut iter = self.products.iter();
        let mut best = iter.next()?;
        let mut best_key = key(best);
        for product in iter {
            let current = key(product);
            if current > best_key {
                best = product;
                best_key = current;
            }
        }
        Some(best)
    }

    fn reserve_one(&mut self) -> DomainResult<()> {
        self.products
            .try_reserve(1)
            .map_err(|err| DomainError::from_reserve("product slot", err))
    }
}

impl<'a> IntoIterator for &'a ProductCollection {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// Destroy a collection that may not exist. `None` is a no-op.
pub fn destroy_collection(collection: Option<ProductCollection>) -> usize {
    collection.map_or(0, ProductCollection::destroy)
}

fn out_of_range(index: usize, len: usize) -> DomainError {
    DomainError::validation(format!("position {index} out of range for length {len}"))
}
