//! Pending order-item rows for the order form.
//!
//! One row pairs a product selection with a quantity. Rows are transient:
//! created by "Add Item", destroyed by "Remove" or a successful submit.
//! The builder is a plain list of view-model rows with an explicit API,
//! independent of how the form is rendered.

use crate::backend::{NewOrderItem, Product};

/// One pending order-item row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    /// Stable row identifier, unique for the builder's lifetime.
    pub id: u64,
    /// Selected product, if the product list offered one.
    pub product_id: Option<i64>,
    /// Requested quantity (at least 1).
    pub quantity: i64,
}

/// The list of pending order-item rows.
#[derive(Debug, Default)]
pub struct OrderBuilder {
    next_row_id: u64,
    rows: Vec<ItemRow>,
}

impl OrderBuilder {
    /// Create a builder with no rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current rows, in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    /// Whether the builder holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append one row, defaulting to the first product of the current list.
    ///
    /// Returns the new row's id.
    pub fn add_row(&mut self, products: &[Product]) -> u64 {
        self.next_row_id += 1;
        let id = self.next_row_id;
        self.rows.push(ItemRow {
            id,
            product_id: products.first().map(|p| p.id),
            quantity: 1,
        });
        id
    }

    /// Sync a row with the values from its select/quantity inputs.
    ///
    /// Quantities below 1 are clamped to 1, mirroring the form's `min="1"`.
    /// Returns false if no row has the given id.
    pub fn update_row(&mut self, id: u64, product_id: Option<i64>, quantity: i64) -> bool {
        let Some(row) = self.rows.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        row.product_id = product_id;
        row.quantity = quantity.max(1);
        true
    }

    /// Delete exactly the identified row.
    ///
    /// Returns false if no row has the given id.
    pub fn remove_row(&mut self, id: u64) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        self.rows.len() != before
    }

    /// Re-bind every row to a freshly refreshed product list.
    ///
    /// A row keeps its selected product id if still present, otherwise it
    /// silently falls back to the list's default (first) selection.
    pub fn rebuild(&mut self, products: &[Product]) {
        let default = products.first().map(|p| p.id);
        for row in &mut self.rows {
            let keep = row
                .product_id
                .is_some_and(|selected| products.iter().any(|p| p.id == selected));
            if !keep {
                row.product_id = default;
            }
        }
    }

    /// Clear all rows and seed one fresh row (initial load, after submit).
    pub fn reset(&mut self, products: &[Product]) {
        self.rows.clear();
        self.add_row(products);
    }

    /// Collect the pending `{productId, quantity}` pairs for submission.
    ///
    /// Rows without a product selection (empty product list) are skipped.
    #[must_use]
    pub fn items(&self) -> Vec<NewOrderItem> {
        self.rows
            .iter()
            .filter_map(|row| {
                row.product_id.map(|product_id| NewOrderItem {
                    product_id,
                    quantity: row.quantity,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: i64, name: &str, stock: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
            price: Decimal::new(1250, 2),
            stock,
        }
    }

    #[test]
    fn test_add_row_defaults_to_first_product() {
        let products = vec![product(1, "Widget", 5), product(2, "Gadget", 3)];
        let mut builder = OrderBuilder::new();

        let id = builder.add_row(&products);

        let row = builder.rows().first().unwrap();
        assert_eq!(row.id, id);
        assert_eq!(row.product_id, Some(1));
        assert_eq!(row.quantity, 1);
    }

    #[test]
    fn test_add_row_with_empty_product_list_has_no_selection() {
        let mut builder = OrderBuilder::new();
        builder.add_row(&[]);
        assert_eq!(builder.rows().first().unwrap().product_id, None);
    }

    #[test]
    fn test_remove_deletes_exactly_the_clicked_row() {
        let products = vec![product(1, "Widget", 5)];
        let mut builder = OrderBuilder::new();
        let first = builder.add_row(&products);
        let second = builder.add_row(&products);
        let third = builder.add_row(&products);

        assert!(builder.remove_row(second));

        let ids: Vec<u64> = builder.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first, third]);
        // Removing again is a no-op
        assert!(!builder.remove_row(second));
    }

    #[test]
    fn test_update_row_clamps_quantity() {
        let products = vec![product(1, "Widget", 5)];
        let mut builder = OrderBuilder::new();
        let id = builder.add_row(&products);

        assert!(builder.update_row(id, Some(1), 0));
        assert_eq!(builder.rows().first().unwrap().quantity, 1);

        assert!(builder.update_row(id, Some(1), 7));
        assert_eq!(builder.rows().first().unwrap().quantity, 7);

        assert!(!builder.update_row(999, Some(1), 2));
    }

    #[test]
    fn test_rebuild_preserves_selection_when_still_present() {
        let products = vec![product(1, "Widget", 5), product(2, "Gadget", 3)];
        let mut builder = OrderBuilder::new();
        let id = builder.add_row(&products);
        builder.update_row(id, Some(2), 1);

        // Refresh keeps Gadget but reorders the list
        builder.rebuild(&[product(2, "Gadget", 2), product(3, "Gizmo", 9)]);

        assert_eq!(builder.rows().first().unwrap().product_id, Some(2));
    }

    #[test]
    fn test_rebuild_falls_back_to_default_when_selection_gone() {
        let products = vec![product(1, "Widget", 5), product(2, "Gadget", 3)];
        let mut builder = OrderBuilder::new();
        let id = builder.add_row(&products);
        builder.update_row(id, Some(2), 1);

        // Gadget was deleted server-side
        builder.rebuild(&[product(1, "Widget", 5), product(3, "Gizmo", 9)]);

        assert_eq!(builder.rows().first().unwrap().product_id, Some(1));
    }

    #[test]
    fn test_rebuild_with_empty_list_clears_selections() {
        let products = vec![product(1, "Widget", 5)];
        let mut builder = OrderBuilder::new();
        builder.add_row(&products);

        builder.rebuild(&[]);

        assert_eq!(builder.rows().first().unwrap().product_id, None);
    }

    #[test]
    fn test_reset_seeds_one_fresh_row() {
        let products = vec![product(1, "Widget", 5)];
        let mut builder = OrderBuilder::new();
        builder.add_row(&products);
        builder.add_row(&products);

        builder.reset(&products);

        assert_eq!(builder.rows().len(), 1);
        assert_eq!(builder.rows().first().unwrap().product_id, Some(1));
    }

    #[test]
    fn test_items_collects_pairs_and_skips_unselected_rows() {
        let products = vec![product(1, "Widget", 5), product(2, "Gadget", 3)];
        let mut builder = OrderBuilder::new();
        let first = builder.add_row(&products);
        builder.update_row(first, Some(2), 3);
        builder.add_row(&[]); // row without a selectable product

        let items = builder.items();
        assert_eq!(
            items,
            vec![NewOrderItem {
                product_id: 2,
                quantity: 3
            }]
        );
    }

    #[test]
    fn test_empty_builder_yields_no_items() {
        let builder = OrderBuilder::new();
        assert!(builder.is_empty());
        assert!(builder.items().is_empty());
    }

    #[test]
    fn test_row_ids_are_never_reused() {
        let products = vec![product(1, "Widget", 5)];
        let mut builder = OrderBuilder::new();
        let first = builder.add_row(&products);
        builder.remove_row(first);
        let second = builder.add_row(&products);
        assert_ne!(first, second);
    }
}
