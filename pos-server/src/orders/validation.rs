//! Draft and payment input checks
//!
//! Pure structural checks. Lookups (menu item, table) happen in the ledger.

use shared::order::{Discount, DiscountKind, OrderDraft, OrderType, PaymentInput};

use super::error::ValidationError;

pub const MAX_QUANTITY: u32 = 9999;

/// Maximum tip / fee / tendered amount accepted
pub const MAX_AMOUNT: f64 = 1_000_000.0;

/// Upper bound for a split bill
pub const MAX_SPLIT: u32 = 100;

fn check_amount(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 || value > MAX_AMOUNT {
        return Err(ValidationError::InvalidAmount { field, value });
    }
    Ok(())
}

pub fn validate_discount(discount: &Discount) -> Result<(), ValidationError> {
    check_amount("discount", discount.value)?;
    if discount.kind == DiscountKind::Percentage && discount.value > 100.0 {
        return Err(ValidationError::InvalidAmount {
            field: "discount",
            value: discount.value,
        });
    }
    Ok(())
}

pub fn validate_tip(tip: f64) -> Result<(), ValidationError> {
    check_amount("tip", tip)
}

pub fn validate_split(split_count: u32) -> Result<(), ValidationError> {
    if split_count == 0 || split_count > MAX_SPLIT {
        return Err(ValidationError::Invalid(format!(
            "split_count must be between 1 and {}, got {}",
            MAX_SPLIT, split_count
        )));
    }
    Ok(())
}

pub fn validate_draft(draft: &OrderDraft) -> Result<(), ValidationError> {
    if draft.items.is_empty() {
        return Err(ValidationError::EmptyOrder);
    }

    for item in &draft.items {
        if item.quantity == 0 || item.quantity > MAX_QUANTITY {
            return Err(ValidationError::InvalidQuantity {
                got: item.quantity,
                max: MAX_QUANTITY,
            });
        }
    }

    match draft.order_type {
        OrderType::DineIn => {
            if draft.table_id.is_none() {
                return Err(ValidationError::TableRequired);
            }
        }
        OrderType::Delivery => {
            let delivery = draft
                .delivery
                .as_ref()
                .ok_or(ValidationError::AddressRequired)?;
            if delivery.address.trim().is_empty() {
                return Err(ValidationError::AddressRequired);
            }
            check_amount("delivery fee", delivery.fee)?;
        }
        OrderType::Takeaway => {}
    }

    if let Some(discount) = &draft.discount {
        validate_discount(discount)?;
    }
    if let Some(tip) = draft.tip {
        validate_tip(tip)?;
    }
    Ok(())
}

pub fn validate_payment(input: &PaymentInput) -> Result<(), ValidationError> {
    // 0 is allowed: fully discounted orders are settled with nothing tendered
    if !input.amount.is_finite() || input.amount < 0.0 || input.amount > MAX_AMOUNT {
        return Err(ValidationError::InvalidAmount {
            field: "amount",
            value: input.amount,
        });
    }
    if let Some(discount) = &input.discount {
        validate_discount(discount)?;
    }
    if let Some(tip) = input.tip {
        validate_tip(tip)?;
    }
    if let Some(split) = input.split_count {
        validate_split(split)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::{DeliveryInput, LineItemInput, PaymentMethod};

    fn line(quantity: u32) -> LineItemInput {
        LineItemInput {
            menu_item_id: 1,
            quantity,
            notes: None,
            modifications: vec![],
        }
    }

    fn draft(order_type: OrderType) -> OrderDraft {
        OrderDraft {
            order_type,
            table_id: None,
            customer_id: None,
            items: vec![line(1)],
            notes: None,
            discount: None,
            tip: None,
            delivery: None,
        }
    }

    #[test]
    fn test_empty_order_rejected() {
        let mut d = draft(OrderType::Takeaway);
        d.items.clear();
        assert_eq!(validate_draft(&d), Err(ValidationError::EmptyOrder));
    }

    #[test]
    fn test_quantity_bounds() {
        let mut d = draft(OrderType::Takeaway);
        d.items = vec![line(0)];
        assert!(matches!(
            validate_draft(&d),
            Err(ValidationError::InvalidQuantity { got: 0, .. })
        ));
        d.items = vec![line(MAX_QUANTITY)];
        assert!(validate_draft(&d).is_ok());
        d.items = vec![line(MAX_QUANTITY + 1)];
        assert!(validate_draft(&d).is_err());
    }

    #[test]
    fn test_dine_in_requires_table() {
        let mut d = draft(OrderType::DineIn);
        assert_eq!(validate_draft(&d), Err(ValidationError::TableRequired));
        d.table_id = Some(1);
        assert!(validate_draft(&d).is_ok());
    }

    #[test]
    fn test_delivery_requires_address() {
        let mut d = draft(OrderType::Delivery);
        assert_eq!(validate_draft(&d), Err(ValidationError::AddressRequired));

        d.delivery = Some(DeliveryInput {
            address: "   ".to_string(),
            fee: 5.0,
            estimated_minutes: None,
        });
        assert_eq!(validate_draft(&d), Err(ValidationError::AddressRequired));

        d.delivery = Some(DeliveryInput {
            address: "Rua das Flores, 123".to_string(),
            fee: 5.0,
            estimated_minutes: None,
        });
        assert!(validate_draft(&d).is_ok());
    }

    #[test]
    fn test_discount_bounds() {
        assert!(validate_discount(&Discount::percentage(100.0)).is_ok());
        assert!(validate_discount(&Discount::percentage(100.5)).is_err());
        assert!(validate_discount(&Discount::fixed(250.0)).is_ok());
        assert!(validate_discount(&Discount::fixed(-1.0)).is_err());
        assert!(validate_discount(&Discount::percentage(f64::NAN)).is_err());
    }

    #[test]
    fn test_payment_amount_bounds() {
        let input = PaymentInput {
            method: PaymentMethod::Cash,
            amount: -0.01,
            discount: None,
            tip: None,
            split_count: None,
        };
        assert!(validate_payment(&input).is_err());
        assert!(validate_payment(&PaymentInput { amount: f64::NAN, ..input.clone() }).is_err());
        assert!(validate_payment(&PaymentInput { amount: 0.0, ..input.clone() }).is_ok());

        let input = PaymentInput {
            amount: 10.0,
            split_count: Some(0),
            ..input
        };
        assert!(validate_payment(&input).is_err());
    }
}
