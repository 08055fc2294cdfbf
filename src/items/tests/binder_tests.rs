// src/items/tests/binder_tests.rs

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use crate::items::{bind_and_validate, bind_item_form, default_catalog, ItemValidator};
    use crate::validation::{field_error_message, ValidatorRegistry};

    fn params(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn registry() -> ValidatorRegistry {
        let mut registry = ValidatorRegistry::new();
        registry.register(ItemValidator);
        registry
    }

    #[test]
    fn test_binds_well_formed_submission() {
        let bound = bind_item_form(&params(&[
            ("itemName", "book"),
            ("price", "10000"),
            ("quantity", "10"),
        ]));

        assert!(!bound.has_failures());
        assert_eq!(bound.form.item_name.as_deref(), Some("book"));
        assert_eq!(bound.form.price, Some(10_000));
        assert_eq!(bound.form.quantity, Some(10));
    }

    #[test]
    fn test_blank_numeric_input_binds_as_absent() {
        let bound = bind_item_form(&params(&[("itemName", "book"), ("price", "  ")]));

        assert!(!bound.has_failures());
        assert_eq!(bound.form.price, None);
        assert_eq!(bound.form.quantity, None);
    }

    #[test]
    fn test_blank_name_binds_raw_for_redisplay() {
        let (form, report) = bind_and_validate(
            &params(&[("itemName", "   "), ("price", "10000"), ("quantity", "10")]),
            &registry(),
        )
        .unwrap();

        assert_eq!(form.item_name.as_deref(), Some("   "));

        let error = report.field_errors_for("itemName").next().unwrap();
        assert_eq!(error.codes[0], "required.item.itemName");
        assert_eq!(error.rejected_value, Some(json!("   ")));
        assert!(!error.binding_failure);
    }

    #[test]
    fn test_non_numeric_input_is_a_coercion_failure() {
        let bound = bind_item_form(&params(&[
            ("itemName", "book"),
            ("price", "abc"),
            ("quantity", "10"),
        ]));

        assert!(bound.has_failures());
        assert_eq!(bound.form.price, None);
        assert_eq!(bound.form.quantity, Some(10));
    }

    #[test]
    fn test_bind_and_validate_reports_all_problems_in_one_pass() {
        let (form, report) = bind_and_validate(
            &params(&[("itemName", "book"), ("price", "abc"), ("quantity", "100")]),
            &registry(),
        )
        .unwrap();

        assert_eq!(form.price, None);

        // typeMismatch from binding plus the range rule on the same field.
        let price_errors: Vec<_> = report.field_errors_for("price").collect();
        assert_eq!(price_errors.len(), 2);

        let mismatch = price_errors[0];
        assert!(mismatch.binding_failure);
        assert_eq!(mismatch.rejected_value, Some(json!("abc")));
        assert_eq!(mismatch.codes[0], "typeMismatch.item.price");

        // The rule error redisplays the raw input, not the empty field.
        let range = price_errors[1];
        assert!(!range.binding_failure);
        assert_eq!(range.rejected_value, Some(json!("abc")));

        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn test_valid_submission_passes_end_to_end() {
        let (form, report) = bind_and_validate(
            &params(&[("itemName", "book"), ("price", "10000"), ("quantity", "10")]),
            &registry(),
        )
        .unwrap();

        assert_eq!(form.item_name.as_deref(), Some("book"));
        assert!(!report.has_errors());
    }

    #[test]
    fn test_messages_resolve_against_default_catalog() {
        let (_, report) = bind_and_validate(
            &params(&[("price", "abc"), ("quantity", "99999")]),
            &registry(),
        )
        .unwrap();
        let catalog = default_catalog();

        let messages: Vec<String> = report
            .field_errors
            .iter()
            .map(|error| field_error_message(&catalog, "en", error))
            .collect();

        assert!(messages.contains(&"Please enter a number.".to_string()));
        assert!(messages.contains(&"Item name is required.".to_string()));
        assert!(messages.contains(&"Quantity must be at most 9999.".to_string()));
        assert!(messages.contains(&"Price must be between 1000 and 1000000.".to_string()));
    }
}
