use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_user_orders::{GetUserOrdersParams, GetUserOrdersUseCase};
use crate::domain::shared::pagination::Page;

pub struct GetUserOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserOrdersUseCase for GetUserOrdersUseCaseImpl {
    async fn execute(&self, params: GetUserOrdersParams) -> Result<Page<Order>, OrderError> {
        self.logger.debug(&format!(
            "Fetching orders of user {} (page {}, size {})",
            params.user_id, params.page.page, params.page.size
        ));

        let page = self
            .repository
            .find_by_user_id(&params.user_id, &params.page)
            .await?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::pagination::PageRequest;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::order::use_cases::get_user_orders::DEFAULT_ORDERS_PAGE_SIZE;
    use crate::test_support::{mock_logger, MockOrderRepo};

    #[tokio::test]
    async fn should_query_caller_orders_with_requested_page() {
        let user_id = UserId::generate();
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_find_by_user_id()
            .withf(move |id, page| *id == user_id && page.page == 0 && page.size == 10)
            .times(1)
            .returning(|_, page| Ok(Page::new(vec![], page, 0)));

        let use_case = GetUserOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(GetUserOrdersParams {
                user_id,
                page: PageRequest::new(0, DEFAULT_ORDERS_PAGE_SIZE),
            })
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }
}
