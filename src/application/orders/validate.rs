//! Order validation
//!
//! Pure checks over the requested lines and the catalog snapshot. Nothing
//! here touches storage, so validation can run against a read-committed
//! snapshot without holding locks; the commit-time guarded decrement is what
//! ultimately defends the stock invariant.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::order::PricedLine;
use crate::domain::product::CatalogProduct;
use crate::shared::{DomainError, DomainResult};

/// One requested (product, quantity) pair
#[derive(Debug, Clone)]
pub struct RequestedLine {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// Outcome of validation: lines carrying price snapshots, plus the total
#[derive(Debug, Clone)]
pub struct ValidatedOrder {
    pub lines: Vec<PricedLine>,
    pub total: Decimal,
}

/// Shape checks that run before any catalog lookup. Returns the deduplicated
/// product id set in request order, ready for the batch lookup.
pub fn check_request_shape(lines: &[RequestedLine]) -> DomainResult<Vec<Uuid>> {
    if lines.is_empty() {
        return Err(DomainError::InvalidRequest(
            "order must contain at least one item".into(),
        ));
    }

    let mut seen = HashSet::with_capacity(lines.len());
    for line in lines {
        if line.quantity <= 0 {
            return Err(DomainError::InvalidRequest(format!(
                "quantity for product {} must be a positive integer",
                line.product_id
            )));
        }
        if !seen.insert(line.product_id) {
            return Err(DomainError::InvalidRequest(format!(
                "product {} appears more than once",
                line.product_id
            )));
        }
    }

    Ok(lines.iter().map(|l| l.product_id).collect())
}

/// Validates requested lines against the catalog result, failing fast with a
/// distinct error kind per rule:
///
/// 1. every requested product exists in the catalog result,
/// 2. every product belongs to the order's merchant,
/// 3. every line is available and covered by current stock,
///
/// then accumulates `price x quantity` per line in decimal arithmetic and
/// rounds to two decimal places once, at the final sum.
pub fn validate_order(
    merchant_id: Uuid,
    lines: &[RequestedLine],
    catalog: &[CatalogProduct],
) -> DomainResult<ValidatedOrder> {
    let by_id: HashMap<Uuid, &CatalogProduct> = catalog.iter().map(|p| (p.id, p)).collect();

    // The batch lookup silently drops unknown ids; compare against the request.
    for line in lines {
        if !by_id.contains_key(&line.product_id) {
            return Err(DomainError::ProductNotFound(line.product_id));
        }
    }

    for line in lines {
        if by_id[&line.product_id].merchant_id != merchant_id {
            return Err(DomainError::CrossMerchantOrder {
                product_id: line.product_id,
            });
        }
    }

    let mut total = Decimal::ZERO;
    let mut priced = Vec::with_capacity(lines.len());
    for line in lines {
        let product = by_id[&line.product_id];
        if !product.is_available || product.stock_quantity < line.quantity {
            return Err(DomainError::InsufficientStock {
                product_id: product.id,
                name: product.name.clone(),
            });
        }

        total += product.price * Decimal::from(line.quantity);
        priced.push(PricedLine {
            product_id: product.id,
            quantity: line.quantity,
            unit_price: product.price,
        });
    }

    Ok(ValidatedOrder {
        lines: priced,
        total: total.round_dp(2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(merchant_id: Uuid, price: &str, stock: i32, available: bool) -> CatalogProduct {
        CatalogProduct {
            id: Uuid::new_v4(),
            merchant_id,
            name: "Pão de Queijo".to_string(),
            description: None,
            price: price.parse().unwrap(),
            stock_quantity: stock,
            is_available: available,
            created_at: Utc::now(),
        }
    }

    fn line(product_id: Uuid, quantity: i32) -> RequestedLine {
        RequestedLine {
            product_id,
            quantity,
        }
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let err = check_request_shape(&[]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRequest(_)));
    }

    #[test]
    fn non_positive_quantity_is_rejected_before_lookup() {
        for quantity in [0, -3] {
            let err = check_request_shape(&[line(Uuid::new_v4(), quantity)]).unwrap_err();
            assert!(matches!(err, DomainError::InvalidRequest(_)));
        }
    }

    #[test]
    fn duplicate_product_ids_are_rejected() {
        let id = Uuid::new_v4();
        let err = check_request_shape(&[line(id, 1), line(id, 2)]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRequest(_)));
    }

    #[test]
    fn missing_product_fails_before_merchant_check() {
        let merchant = Uuid::new_v4();
        let known = product(Uuid::new_v4(), "5.00", 10, true);
        let missing_id = Uuid::new_v4();

        // The known product belongs to a different merchant, but the missing
        // product must be reported first.
        let err = validate_order(
            merchant,
            &[line(known.id, 1), line(missing_id, 1)],
            &[known],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::ProductNotFound(id) if id == missing_id));
    }

    #[test]
    fn cross_merchant_order_is_rejected() {
        let merchant_x = Uuid::new_v4();
        let ours = product(merchant_x, "10.00", 5, true);
        let theirs = product(Uuid::new_v4(), "4.00", 5, true);

        let err = validate_order(
            merchant_x,
            &[line(ours.id, 1), line(theirs.id, 1)],
            &[ours, theirs.clone()],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::CrossMerchantOrder { product_id } if product_id == theirs.id));
    }

    #[test]
    fn unavailable_product_counts_as_insufficient_stock() {
        let merchant = Uuid::new_v4();
        let unavailable = product(merchant, "10.00", 5, false);

        let err =
            validate_order(merchant, &[line(unavailable.id, 1)], &[unavailable]).unwrap_err();
        assert!(matches!(err, DomainError::InsufficientStock { .. }));
    }

    #[test]
    fn understocked_line_names_the_product() {
        let merchant = Uuid::new_v4();
        let scarce = product(merchant, "10.00", 2, true);

        let err = validate_order(merchant, &[line(scarce.id, 3)], &[scarce.clone()]).unwrap_err();
        match err {
            DomainError::InsufficientStock { product_id, name } => {
                assert_eq!(product_id, scarce.id);
                assert_eq!(name, scarce.name);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }
    }

    #[test]
    fn total_is_decimal_sum_of_line_subtotals() {
        let merchant = Uuid::new_v4();
        let a = product(merchant, "10.00", 5, true);
        let b = product(merchant, "5.50", 5, true);

        let validated =
            validate_order(merchant, &[line(a.id, 2), line(b.id, 3)], &[a.clone(), b.clone()])
                .unwrap();

        assert_eq!(validated.total, "36.50".parse::<Decimal>().unwrap());
        assert_eq!(validated.lines.len(), 2);
        assert_eq!(validated.lines[0].unit_price, a.price);
        assert_eq!(validated.lines[1].unit_price, b.price);
    }

    #[test]
    fn rounding_happens_once_at_the_final_sum() {
        let merchant = Uuid::new_v4();
        // 1.013 * 3 = 3.039; rounded only at the end -> 3.04
        let odd = product(merchant, "1.013", 10, true);

        let validated = validate_order(merchant, &[line(odd.id, 3)], &[odd]).unwrap();
        assert_eq!(validated.total, "3.04".parse::<Decimal>().unwrap());
    }

    #[test]
    fn exact_stock_match_passes() {
        let merchant = Uuid::new_v4();
        let last = product(merchant, "7.25", 4, true);

        let validated = validate_order(merchant, &[line(last.id, 4)], &[last]).unwrap();
        assert_eq!(validated.total, "29.00".parse::<Decimal>().unwrap());
    }
}
