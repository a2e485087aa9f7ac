use bigdecimal::{BigDecimal, RoundingMode};

pub const TAX_RATE_PERCENT: i64 = 10;

/// Flat sales tax on the subtotal, rounded half-up to cents.
pub fn tax_for(subtotal: &BigDecimal) -> BigDecimal {
    (subtotal * BigDecimal::from(TAX_RATE_PERCENT) / BigDecimal::from(100))
        .with_scale_round(2, RoundingMode::HalfUp)
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderTotals {
    pub subtotal: BigDecimal,
    pub tax: BigDecimal,
    pub shipping: BigDecimal,
    pub total: BigDecimal,
}

impl OrderTotals {
    pub fn compute(subtotal: BigDecimal, shipping: BigDecimal) -> Self {
        let tax = tax_for(&subtotal);
        let total = &subtotal + &tax + &shipping;
        Self {
            subtotal,
            tax,
            shipping,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn should_price_single_line_example() {
        let totals = OrderTotals::compute(dec("30.00"), BigDecimal::zero());

        assert_eq!(totals.tax, dec("3.00"));
        assert_eq!(totals.total, dec("33.00"));
    }

    #[test]
    fn should_round_tax_half_up() {
        assert_eq!(tax_for(&dec("0.05")), dec("0.01"));
        assert_eq!(tax_for(&dec("0.04")), dec("0.00"));
        assert_eq!(tax_for(&dec("19.95")), dec("2.00"));
    }

    proptest! {
        #[test]
        fn total_is_sum_of_parts(subtotal_cents in 0i64..10_000_000, shipping_cents in 0i64..100_000) {
            let subtotal = BigDecimal::new(subtotal_cents.into(), 2);
            let shipping = BigDecimal::new(shipping_cents.into(), 2);

            let totals = OrderTotals::compute(subtotal.clone(), shipping.clone());

            prop_assert_eq!(&totals.total, &(&subtotal + &totals.tax + &shipping));
        }

        #[test]
        fn tax_has_two_decimals_and_is_within_half_a_cent(subtotal_cents in 0i64..10_000_000) {
            let subtotal = BigDecimal::new(subtotal_cents.into(), 2);
            let tax = tax_for(&subtotal);
            let exact = &subtotal / BigDecimal::from(10);
            let half_cent = BigDecimal::new(5.into(), 3);

            prop_assert_eq!(tax.fractional_digit_count(), 2);
            prop_assert!((&tax - &exact).abs() <= half_cent);
        }
    }
}
