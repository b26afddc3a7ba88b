use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Pagination, Product, ProductSort, SortDirection, SortField};

/// Repository trait for Product persistence
///
/// Existence checks before `update` and `delete` are the caller's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product
    async fn create(&self, product: &Product) -> ProductResult<()>;

    /// Get a product by ID, `NotFound` if absent
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product>;

    /// List products in `sort` order, windowed by `pagination`
    async fn find_all(
        &self,
        pagination: Pagination,
        sort: ProductSort,
    ) -> ProductResult<Vec<Product>>;

    /// Replace the stored record with the same id
    async fn update(&self, product: &Product) -> ProductResult<()>;

    /// Delete a product by ID
    async fn delete(&self, id: Uuid) -> ProductResult<()>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ordering shared by every backend: the requested field, then id ascending.
pub(crate) fn compare(a: &Product, b: &Product, sort: ProductSort) -> Ordering {
    let by_field = match sort.field {
        SortField::Name => a.name().cmp(b.name()),
        SortField::Price => a.price().total_cmp(&b.price()),
        SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
    };
    let by_field = match sort.direction {
        SortDirection::Asc => by_field,
        SortDirection::Desc => by_field.reverse(),
    };
    by_field.then_with(|| a.id().cmp(&b.id()))
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> ProductResult<()> {
        let mut products = self.products.write().await;

        if products.contains_key(&product.id()) {
            return Err(ProductError::Database(format!(
                "product {} already stored",
                product.id()
            )));
        }
        products.insert(product.id(), product.clone());

        tracing::info!(product_id = %product.id(), "Created product");
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product> {
        let products = self.products.read().await;
        products.get(&id).cloned().ok_or(ProductError::NotFound(id))
    }

    async fn find_all(
        &self,
        pagination: Pagination,
        sort: ProductSort,
    ) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();
        result.sort_by(|a, b| compare(a, b, sort));

        let skip = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        let take = pagination
            .take()
            .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);

        Ok(result.into_iter().skip(skip).take(take).collect())
    }

    async fn update(&self, product: &Product) -> ProductResult<()> {
        let mut products = self.products.write().await;

        let stored = products.get_mut(&product.id()).ok_or_else(|| {
            ProductError::Database(format!("product {} no longer exists", product.id()))
        })?;
        *stored = product.clone();

        tracing::info!(product_id = %product.id(), "Updated product");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded(items: &[(&str, f64)]) -> (InMemoryProductRepository, Vec<Product>) {
        let repo = InMemoryProductRepository::new();
        let mut created = Vec::new();
        for (name, price) in items {
            let product = Product::new(*name, *price).unwrap();
            repo.create(&product).await.unwrap();
            created.push(product);
        }
        (repo, created)
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name()).collect()
    }

    #[tokio::test]
    async fn test_create_and_find_by_id() {
        let (repo, created) = seeded(&[("Notebook", 1500.0)]).await;

        let fetched = repo.find_by_id(created[0].id()).await.unwrap();
        assert_eq!(fetched, created[0]);

        let again = repo.find_by_id(created[0].id()).await.unwrap();
        assert_eq!(again, fetched);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let repo = InMemoryProductRepository::new();
        let id = Uuid::now_v7();

        assert!(matches!(
            repo.find_by_id(id).await,
            Err(ProductError::NotFound(missing)) if missing == id
        ));
    }

    #[tokio::test]
    async fn test_find_all_without_constraints_returns_everything() {
        let (repo, _) = seeded(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]).await;

        let all = repo
            .find_all(Pagination::default(), ProductSort::default())
            .await
            .unwrap();

        assert_eq!(names(&all), vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_find_all_pages() {
        let (repo, _) = seeded(&[("A", 1.0), ("B", 2.0), ("C", 3.0), ("D", 4.0), ("E", 5.0)]).await;
        let sort = ProductSort::default();

        let first = repo.find_all(Pagination::new(1, 2), sort).await.unwrap();
        let third = repo.find_all(Pagination::new(3, 2), sort).await.unwrap();
        let beyond = repo.find_all(Pagination::new(9, 2), sort).await.unwrap();
        let limit_only = repo.find_all(Pagination::new(0, 3), sort).await.unwrap();

        assert_eq!(names(&first), vec!["A", "B"]);
        assert_eq!(names(&third), vec!["E"]);
        assert!(beyond.is_empty());
        assert_eq!(limit_only.len(), 3);
    }

    #[tokio::test]
    async fn test_find_all_sorting() {
        let (repo, _) = seeded(&[("Pen", 5.0), ("Desk", 300.0), ("Lamp", 40.0)]).await;

        let by_name = repo
            .find_all(Pagination::default(), ProductSort::parse("name"))
            .await
            .unwrap();
        let by_price_desc = repo
            .find_all(Pagination::default(), ProductSort::parse("-price"))
            .await
            .unwrap();
        let newest_first = repo
            .find_all(Pagination::default(), ProductSort::parse("desc"))
            .await
            .unwrap();

        assert_eq!(names(&by_name), vec!["Desk", "Lamp", "Pen"]);
        assert_eq!(names(&by_price_desc), vec!["Desk", "Lamp", "Pen"]);
        assert_eq!(names(&newest_first), vec!["Lamp", "Desk", "Pen"]);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let (repo, created) = seeded(&[("Notebook", 1500.0)]).await;

        let revised = created[0].clone().revise("Notebook Pro", 1800.0).unwrap();
        repo.update(&revised).await.unwrap();

        let fetched = repo.find_by_id(revised.id()).await.unwrap();
        assert_eq!(fetched.name(), "Notebook Pro");
        assert_eq!(fetched.price(), 1800.0);
        assert_eq!(fetched.created_at(), created[0].created_at());
    }

    #[tokio::test]
    async fn test_update_vanished_row_is_database_error() {
        let repo = InMemoryProductRepository::new();
        let product = Product::new("Ghost", 1.0).unwrap();

        assert!(matches!(
            repo.update(&product).await,
            Err(ProductError::Database(_))
        ));
    }

    #[tokio::test]
    async fn test_delete() {
        let (repo, created) = seeded(&[("Notebook", 1500.0)]).await;

        repo.delete(created[0].id()).await.unwrap();

        assert!(matches!(
            repo.find_by_id(created[0].id()).await,
            Err(ProductError::NotFound(_))
        ));
    }

    #[test]
    fn test_compare_breaks_ties_by_id() {
        let a = Product::new("Same", 10.0).unwrap();
        let b = Product::new("Same", 10.0).unwrap();
        let sort = ProductSort::new(SortField::Price, SortDirection::Desc);

        assert_eq!(compare(&a, &b, sort), a.id().cmp(&b.id()));
    }
}
