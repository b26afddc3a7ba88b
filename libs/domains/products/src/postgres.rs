use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect,
    sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Pagination, Product, ProductSort, SortDirection, SortField},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Byte order, matching the in-memory backend regardless of the database collation
const NAME_BYTEWISE: &str = r#""name" COLLATE "C""#;

fn sort_column(field: SortField) -> entity::Column {
    match field {
        SortField::Name => entity::Column::Name,
        SortField::Price => entity::Column::Price,
        SortField::CreatedAt => entity::Column::CreatedAt,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, product: &Product) -> ProductResult<()> {
        entity::Entity::insert(entity::ActiveModel::from(product))
            .exec_without_returning(&self.db)
            .await?;

        tracing::info!(product_id = %product.id(), "Created product");
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Product::from)
            .ok_or(ProductError::NotFound(id))
    }

    async fn find_all(
        &self,
        pagination: Pagination,
        sort: ProductSort,
    ) -> ProductResult<Vec<Product>> {
        let order = sort_order(sort.direction);
        let mut query = match sort.field {
            SortField::Name => entity::Entity::find().order_by(Expr::cust(NAME_BYTEWISE), order),
            field => entity::Entity::find().order_by(sort_column(field), order),
        }
        .order_by_asc(entity::Column::Id);

        if let Some(limit) = pagination.take() {
            query = query.limit(limit);
        }
        if pagination.offset() > 0 {
            query = query.offset(pagination.offset());
        }

        let models = query.all(&self.db).await?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn update(&self, product: &Product) -> ProductResult<()> {
        let result = entity::Entity::update_many()
            .set(entity::ActiveModel::from(product))
            .filter(entity::Column::Id.eq(product.id()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ProductError::Database(format!(
                "product {} no longer exists",
                product.id()
            )));
        }

        tracing::info!(product_id = %product.id(), "Updated product");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(())
    }
}
