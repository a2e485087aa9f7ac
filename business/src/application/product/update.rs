use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        if !params.identity.is_admin() {
            return Err(ProductError::AccessDenied);
        }

        self.logger
            .info(&format!("Updating product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        Product::validate(&params.name, &params.price, params.stock_quantity)?;

        product.name = params.name.trim().to_string();
        product.description = params.description;
        product.price = params.price;
        product.stock_quantity = params.stock_quantity;
        product.category = params.category;
        product.images = params.images;
        product.active = params.active;
        product.updated_at = Utc::now();

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::identity::Identity;
    use crate::test_support::{admin, customer, dec, mock_logger, product, MockProductRepo};
    use uuid::Uuid;

    fn params(identity: Identity, id: Uuid, name: &str, stock: i32) -> UpdateProductParams {
        UpdateProductParams {
            identity,
            id,
            name: name.to_string(),
            description: None,
            price: dec("24.99"),
            stock_quantity: stock,
            category: Some("Clothing".to_string()),
            images: vec![],
            active: false,
        }
    }

    #[tokio::test]
    async fn should_replace_editable_fields() {
        let existing = product("T-Shirt", "19.99", 200);
        let id = existing.id;
        let created_at = existing.created_at;

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |requested| *requested == id)
            .returning(move |_| Ok(existing.clone()));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(params(admin(), id, "Organic T-Shirt", 150))
            .await
            .unwrap();

        assert_eq!(updated.name, "Organic T-Shirt");
        assert_eq!(updated.price, dec("24.99"));
        assert_eq!(updated.stock_quantity, 150);
        assert!(!updated.active);
        assert!(updated.images.is_empty());
        assert_eq!(updated.created_at, created_at);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(admin(), Uuid::new_v4(), "Anything", 1))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_negative_stock_without_saving() {
        let existing = product("T-Shirt", "19.99", 200);
        let id = existing.id;

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(existing.clone()));
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(admin(), id, "T-Shirt", -1)).await;

        assert!(matches!(result.unwrap_err(), ProductError::NegativeStock));
    }

    #[tokio::test]
    async fn should_deny_update_for_regular_user() {
        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(customer(), Uuid::new_v4(), "T-Shirt", 1))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::AccessDenied));
    }
}
