// src/items/tests/validators_tests.rs

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::items::{ItemForm, ItemValidator};
    use crate::validation::{ValidationReport, Validator, ValidatorRegistry};

    fn validate(form: &ItemForm) -> ValidationReport {
        let mut registry = ValidatorRegistry::new();
        registry.register(ItemValidator);
        registry.validate(form).unwrap()
    }

    #[test]
    fn test_valid_item_produces_no_errors() {
        let form = ItemForm::new(Some("book"), Some(10_000), Some(10));

        let report = validate(&form);

        assert!(!report.has_errors());
        assert!(report.field_errors.is_empty());
        assert!(report.object_errors.is_empty());
    }

    #[test]
    fn test_every_field_rule_runs_without_short_circuit() {
        let form = ItemForm::new(Some(""), Some(500), Some(10_000));

        let report = validate(&form);

        assert_eq!(report.field_errors.len(), 3);
        assert_eq!(report.field_errors[0].codes[0], "required.item.itemName");
        assert_eq!(report.field_errors[1].codes[0], "range.item.price");
        assert_eq!(report.field_errors[2].codes[0], "max.item.quantity");

        // 500 * 10000 clears the total-price minimum, so no object error.
        assert!(report.object_errors.is_empty());
    }

    #[test]
    fn test_total_price_below_minimum_is_object_error() {
        let form = ItemForm::new(Some("pen"), Some(1000), Some(5));

        let report = validate(&form);

        assert!(report.field_errors.is_empty());
        assert_eq!(report.object_errors.len(), 1);
        let error = &report.object_errors[0];
        assert_eq!(error.codes, ["totalPriceMin.item", "totalPriceMin"]);
        assert_eq!(error.arguments, vec![json!(10_000), json!(5000)]);
    }

    #[test]
    fn test_whitespace_only_name_is_rejected() {
        let form = ItemForm::new(Some("   "), Some(10_000), Some(10));

        let report = validate(&form);

        assert_eq!(report.field_errors.len(), 1);
        assert_eq!(report.field_errors[0].field, "itemName");
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let form = ItemForm::default();

        let report = validate(&form);

        let fields: Vec<&str> = report
            .field_errors
            .iter()
            .map(|e| e.field.as_str())
            .collect();
        assert_eq!(fields, ["itemName", "price", "quantity"]);
        // Cross-field rule needs both values present; it must not fire.
        assert!(report.object_errors.is_empty());
    }

    #[test]
    fn test_price_boundaries_inclusive() {
        assert!(!validate(&ItemForm::new(Some("book"), Some(1000), Some(10))).has_errors());
        assert!(!validate(&ItemForm::new(Some("book"), Some(1_000_000), Some(10))).has_errors());

        let low = validate(&ItemForm::new(Some("book"), Some(999), Some(100)));
        assert_eq!(low.field_errors[0].field, "price");
        assert_eq!(low.field_errors[0].arguments, vec![json!(1000), json!(1_000_000)]);

        let high = validate(&ItemForm::new(Some("book"), Some(1_000_001), Some(10)));
        assert_eq!(high.field_errors[0].field, "price");
    }

    #[test]
    fn test_quantity_boundary() {
        assert!(!validate(&ItemForm::new(Some("book"), Some(10_000), Some(9999))).has_errors());

        let report = validate(&ItemForm::new(Some("book"), Some(10_000), Some(10_000)));
        assert_eq!(report.field_errors.len(), 1);
        let error = &report.field_errors[0];
        assert_eq!(error.field, "quantity");
        assert_eq!(error.arguments, vec![json!(9999)]);
        assert_eq!(error.rejected_value, Some(json!(10_000)));
    }

    #[test]
    fn test_overflowing_total_price_does_not_panic_or_fire() {
        let report = validate(&ItemForm::new(Some("book"), Some(i64::MAX), Some(2)));

        // Price is out of range either way; a total that cannot be
        // represented must not produce a wrapped-around object error.
        let fields: Vec<&str> = report
            .field_errors
            .iter()
            .map(|e| e.field.as_str())
            .collect();
        assert_eq!(fields, ["price"]);
        assert!(report.object_errors.is_empty());

        let report = validate(&ItemForm::new(Some("book"), Some(i64::MIN), Some(3)));
        assert!(report.object_errors.is_empty());
    }

    #[test]
    fn test_rejected_values_come_from_the_form() {
        let form = ItemForm::new(Some("book"), Some(500), Some(10));

        let report = validate(&form);

        assert_eq!(report.field_errors[0].rejected_value, Some(json!(500)));
    }
}
