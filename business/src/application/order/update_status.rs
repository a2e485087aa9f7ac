use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

pub struct UpdateOrderStatusUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderStatusUseCase for UpdateOrderStatusUseCaseImpl {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError> {
        if !params.identity.is_admin() {
            return Err(OrderError::AccessDenied);
        }

        let mut order = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        let previous = order.status;
        if previous.is_terminal() {
            self.logger.warn(&format!(
                "Order {} leaves terminal status {} for {}",
                order.id, previous, params.status
            ));
        }

        order.update_status(params.status);
        self.repository.save(&order).await?;

        self.logger.info(&format!(
            "Order {} status changed from {} to {}",
            order.id, previous, order.status
        ));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::model::ShippingAddress;
    use crate::domain::order::pricing::OrderTotals;
    use crate::domain::order::value_objects::OrderStatus;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{admin, customer, dec, mock_logger, MockOrderRepo};
    use uuid::Uuid;

    fn pending_order() -> Order {
        Order::place(
            UserId::generate(),
            vec![],
            OrderTotals::compute(dec("30.00"), dec("0")),
            ShippingAddress {
                address_id: Uuid::new_v4(),
                street: "123 Main St".to_string(),
                city: "Springfield".to_string(),
                state: None,
                zip_code: "12345".to_string(),
                country: "US".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn should_update_status_when_admin() {
        let order = pending_order();
        let id = order.id;

        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(order.clone()));
        mock_repo
            .expect_save()
            .withf(|order| order.status == OrderStatus::Shipped)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateOrderStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateOrderStatusParams {
                identity: admin(),
                id,
                status: OrderStatus::Shipped,
            })
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Shipped);
    }

    #[tokio::test]
    async fn should_allow_leaving_terminal_status() {
        let mut order = pending_order();
        order.update_status(OrderStatus::Cancelled);
        let id = order.id;

        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(order.clone()));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateOrderStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateOrderStatusParams {
                identity: admin(),
                id,
                status: OrderStatus::Paid,
            })
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Paid);
    }

    #[tokio::test]
    async fn should_deny_non_admin() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_get_by_id().never();

        let use_case = UpdateOrderStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateOrderStatusParams {
                identity: customer(),
                id: Uuid::new_v4(),
                status: OrderStatus::Paid,
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::AccessDenied));
    }

    #[tokio::test]
    async fn should_report_missing_order() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateOrderStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateOrderStatusParams {
                identity: admin(),
                id: Uuid::new_v4(),
                status: OrderStatus::Paid,
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::NotFound));
    }
}
