//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{ListProductsQuery, Pagination, Product, ProductInput};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Builds entities through their validating constructors and performs the existence
/// check that update and delete require.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        let product = Product::new(input.name, input.price)?;
        self.repository.create(&product).await?;
        Ok(product)
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository.find_by_id(id).await
    }

    /// List products for a `GET /products` query
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ListProductsQuery) -> ProductResult<Vec<Product>> {
        let pagination = Pagination::new(query.page(), query.limit());
        self.repository.find_all(pagination, query.sort()).await
    }

    /// Replace name and price of an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: ProductInput) -> ProductResult<Product> {
        let existing = self.repository.find_by_id(id).await?;
        let revised = existing.revise(input.name, input.price)?;

        self.repository.update(&revised).await?;
        Ok(revised)
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        // Check if product exists
        self.repository.find_by_id(id).await?;
        self.repository.delete(id).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
