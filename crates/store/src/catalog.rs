//! Product catalog trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use domain::{Product, ProductId};

use crate::error::{Result, StoreError};
use crate::lock;

/// Lookup and stock bookkeeping for catalog products.
pub trait ProductRepository: Send + Sync {
    /// Returns a copy of the product.
    fn get_product(&self, id: &ProductId) -> Result<Product>;

    /// Removes `quantity` units from the product's stock.
    ///
    /// Fails without touching stock if fewer units are available.
    fn decrement_stock(&self, id: &ProductId, quantity: u32) -> Result<()>;
}

/// In-memory product catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductCatalog {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the given products.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let catalog = Self::new();
        for product in products {
            catalog.insert(product);
        }
        catalog
    }

    /// Adds a product, replacing any product with the same ID.
    pub fn insert(&self, product: Product) {
        lock::write(&self.products).insert(product.id().clone(), product);
    }

    /// Returns all products sorted by ID.
    pub fn products(&self) -> Vec<Product> {
        let mut products: Vec<Product> = lock::read(&self.products).values().cloned().collect();
        products.sort_by(|a, b| a.id().cmp(b.id()));
        products
    }

    /// Returns the number of products in the catalog.
    pub fn len(&self) -> usize {
        lock::read(&self.products).len()
    }

    /// Returns true if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProductRepository for InMemoryProductCatalog {
    fn get_product(&self, id: &ProductId) -> Result<Product> {
        lock::read(&self.products)
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::ProductNotFound(id.clone()))
    }

    #[tracing::instrument(skip(self, id), fields(product_id = %id))]
    fn decrement_stock(&self, id: &ProductId, quantity: u32) -> Result<()> {
        let mut products = lock::write(&self.products);
        let product = products
            .get_mut(id)
            .ok_or_else(|| StoreError::ProductNotFound(id.clone()))?;

        product.update_stock(quantity)?;
        tracing::debug!(remaining = product.stock_quantity(), "stock decremented");
        Ok(())
    }
}
