use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::FarmerId;

use super::entity::ProductEntity;
use crate::db::bounded;

const PRODUCT_COLUMNS: &str =
    "id, farmer_id, farmer_name, name, price, quantity, description, image_url";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
    timeout: Duration,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at ASC");
        let entities = bounded(
            self.timeout,
            sqlx::query_as::<_, ProductEntity>(&sql).fetch_all(&self.pool),
            RepositoryError::DatabaseError,
        )
        .await?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_farmer(&self, farmer_id: &FarmerId) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE farmer_id = $1 ORDER BY created_at ASC"
        );
        let entities = bounded(
            self.timeout,
            sqlx::query_as::<_, ProductEntity>(&sql)
                .bind(farmer_id.as_str())
                .fetch_all(&self.pool),
            RepositoryError::DatabaseError,
        )
        .await?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let entity = bounded(
            self.timeout,
            sqlx::query_as::<_, ProductEntity>(&sql)
                .bind(id)
                .fetch_optional(&self.pool),
            RepositoryError::DatabaseError,
        )
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        bounded(
            self.timeout,
            sqlx::query(
                r#"INSERT INTO products (id, farmer_id, farmer_name, name, price, quantity, description, image_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
            )
            .bind(product.id)
            .bind(product.farmer_id.as_str())
            .bind(&product.farmer_name)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.quantity)
            .bind(&product.description)
            .bind(&product.image_url)
            .execute(&self.pool),
            RepositoryError::Persistence,
        )
        .await?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        // farmer_id is never updated.
        let result = bounded(
            self.timeout,
            sqlx::query(
                r#"UPDATE products SET
                    farmer_name = $2,
                    name = $3,
                    price = $4,
                    quantity = $5,
                    description = $6,
                    image_url = $7
                WHERE id = $1"#,
            )
            .bind(product.id)
            .bind(&product.farmer_name)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.quantity)
            .bind(&product.description)
            .bind(&product.image_url)
            .execute(&self.pool),
            RepositoryError::Persistence,
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        bounded(
            self.timeout,
            sqlx::query("DELETE FROM products WHERE id = $1")
                .bind(id)
                .execute(&self.pool),
            RepositoryError::Persistence,
        )
        .await?;

        Ok(())
    }
}
