//! Product registry repository.

use sqlx::PgPool;

use crate::{
    models::{NewProduct, Product, ProductUpdate},
    Error, Result,
};

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn exists(&self, product_id: i64) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM products WHERE product_id = $1")
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(row.is_some())
    }

    pub async fn insert(&self, product: &NewProduct) -> Result<()> {
        sqlx::query(
            "INSERT INTO products (product_id, product_name, product_category, product_price,
                                   product_manufacture_date, product_expiration_date)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(product.product_id)
        .bind(&product.product_name)
        .bind(&product.product_category)
        .bind(product.product_price)
        .bind(&product.product_manufacture_date)
        .bind(&product.product_expiration_date)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT product_id, product_name, product_category, product_price,
                    product_manufacture_date, product_expiration_date
             FROM products
             ORDER BY product_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(products)
    }

    pub async fn get(&self, product_id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT product_id, product_name, product_category, product_price,
                    product_manufacture_date, product_expiration_date
             FROM products
             WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(product)
    }

    /// Apply a partial update. Returns the number of rows matched (0 when
    /// the product does not exist).
    pub async fn update(&self, product_id: i64, changes: &ProductUpdate) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE products
             SET product_name = COALESCE($2, product_name),
                 product_category = COALESCE($3, product_category),
                 product_price = COALESCE($4, product_price),
                 product_manufacture_date = COALESCE($5, product_manufacture_date),
                 product_expiration_date = COALESCE($6, product_expiration_date)
             WHERE product_id = $1",
        )
        .bind(product_id)
        .bind(&changes.product_name)
        .bind(&changes.product_category)
        .bind(changes.product_price)
        .bind(&changes.product_manufacture_date)
        .bind(&changes.product_expiration_date)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, product_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(result.rows_affected())
    }
}
