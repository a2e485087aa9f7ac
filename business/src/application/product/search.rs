use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use crate::domain::shared::pagination::Page;

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<Page<Product>, ProductError> {
        let filter = params.filter.normalized()?;

        self.logger.debug(&format!(
            "Searching products: {:?} (page {}, size {})",
            filter, params.page.page, params.page.size
        ));

        let page = self.repository.search(&filter, &params.page).await?;

        self.logger.info(&format!(
            "Found {} products ({} total)",
            page.items.len(),
            page.total_elements
        ));
        Ok(page)
    }
}
