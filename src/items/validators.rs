// src/items/validators.rs

use serde_json::json;

use super::models::ItemForm;
use crate::common::ValidatorError;
use crate::validation::{ErrorCollector, ValidationTarget, Validator};

pub const PRICE_MIN: i64 = 1000;
pub const PRICE_MAX: i64 = 1_000_000;
pub const QUANTITY_MAX: i64 = 9999;
pub const TOTAL_PRICE_MIN: i64 = 10_000;

// ============================================================================
// Item Validator
// ============================================================================

/// Rule set for item submissions.
///
/// Field rules all run regardless of earlier failures, so one pass
/// collects every problem; the cross-field total-price rule runs last and
/// only gates on both fields being present.
pub struct ItemValidator;

impl Validator for ItemValidator {
    fn supports(&self, target: &dyn ValidationTarget) -> bool {
        target.as_any().is::<ItemForm>()
    }

    fn validate(
        &self,
        target: &dyn ValidationTarget,
        errors: &mut ErrorCollector<'_>,
    ) -> Result<(), ValidatorError> {
        let item = target.as_any().downcast_ref::<ItemForm>().ok_or_else(|| {
            ValidatorError::UnsupportedTarget {
                object_name: target.object_name().to_string(),
            }
        })?;

        if item
            .item_name
            .as_deref()
            .map_or(true, |name| name.trim().is_empty())
        {
            errors.reject_field(ItemForm::FIELD_ITEM_NAME, "required")?;
        }

        if item
            .price
            .map_or(true, |price| !(PRICE_MIN..=PRICE_MAX).contains(&price))
        {
            errors.reject_field_with(
                ItemForm::FIELD_PRICE,
                "range",
                vec![json!(PRICE_MIN), json!(PRICE_MAX)],
                None,
            )?;
        }

        if item.quantity.map_or(true, |quantity| quantity > QUANTITY_MAX) {
            errors.reject_field_with(
                ItemForm::FIELD_QUANTITY,
                "max",
                vec![json!(QUANTITY_MAX)],
                None,
            )?;
        }

        // Cross-field rule: runs even when individual field rules failed.
        // The product of out-of-range values can overflow i64; the field
        // rules already reject such values, so an unrepresentable total
        // simply does not fire the rule.
        if let (Some(price), Some(quantity)) = (item.price, item.quantity) {
            if let Some(result_price) = price.checked_mul(quantity) {
                if result_price < TOTAL_PRICE_MIN {
                    errors.reject_object_with(
                        "totalPriceMin",
                        vec![json!(TOTAL_PRICE_MIN), json!(result_price)],
                        None,
                    )?;
                }
            }
        }

        Ok(())
    }
}
