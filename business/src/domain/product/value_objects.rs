use bigdecimal::BigDecimal;

use super::errors::ProductError;

/// Catalog browsing criteria. Every populated field narrows the result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
    pub min_rating: Option<BigDecimal>,
}

impl ProductFilter {
    /// Drops blank text criteria and rejects an inverted price range.
    pub fn normalized(self) -> Result<Self, ProductError> {
        if let (Some(min), Some(max)) = (&self.min_price, &self.max_price)
            && min > max
        {
            return Err(ProductError::InvalidPriceRange);
        }

        Ok(Self {
            search: non_blank(self.search),
            category: non_blank(self.category),
            ..self
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
