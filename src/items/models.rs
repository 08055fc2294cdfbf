// src/items/models.rs

use std::any::{type_name, Any};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::ValidationTarget;

// ============================================================================
// Item Form
// ============================================================================

/// Form-bound representation of one item submission.
///
/// Every field is optional: a missing or un-coercible input leaves the
/// field `None`, and the rules decide what that means. Wire field names
/// are camelCase (`itemName`), and those are also the names errors and
/// message keys are recorded under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemForm {
    pub item_name: Option<String>,
    pub price: Option<i64>,
    pub quantity: Option<i64>,
}

impl ItemForm {
    pub const OBJECT_NAME: &'static str = "item";

    pub const FIELD_ITEM_NAME: &'static str = "itemName";
    pub const FIELD_PRICE: &'static str = "price";
    pub const FIELD_QUANTITY: &'static str = "quantity";

    pub fn new(item_name: Option<&str>, price: Option<i64>, quantity: Option<i64>) -> Self {
        Self {
            item_name: item_name.map(str::to_string),
            price,
            quantity,
        }
    }
}

impl ValidationTarget for ItemForm {
    fn object_name(&self) -> &str {
        Self::OBJECT_NAME
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            Self::FIELD_ITEM_NAME => self.item_name.clone().map(Value::from),
            Self::FIELD_PRICE => self.price.map(Value::from),
            Self::FIELD_QUANTITY => self.quantity.map(Value::from),
            _ => None,
        }
    }

    fn field_type(&self, field: &str) -> Option<&'static str> {
        match field {
            Self::FIELD_ITEM_NAME => Some(type_name::<String>()),
            Self::FIELD_PRICE | Self::FIELD_QUANTITY => Some(type_name::<i64>()),
            _ => None,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
