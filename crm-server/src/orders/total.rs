//! Total Computation Rule

use shared::models::LineItem;

/// Sum of `quantity * price` over the items. Pure; plain f64
/// arithmetic, no rounding (display formatting is a frontend concern).
pub fn compute_total(items: &[LineItem]) -> f64 {
    items
        .iter()
        .map(|item| item.quantity as f64 * item.price)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: i32, price: f64) -> LineItem {
        LineItem {
            name: name.to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn test_empty_items_total_zero() {
        assert_eq!(compute_total(&[]), 0.0);
    }

    #[test]
    fn test_total_is_sum_of_quantity_times_price() {
        let items = vec![item("A", 2, 10.0), item("B", 1, 5.0)];
        assert_eq!(compute_total(&items), 25.0);
    }

    #[test]
    fn test_total_with_fractional_prices() {
        let items = vec![item("Coffee", 3, 4.25), item("Mug", 1, 12.5)];
        assert_eq!(compute_total(&items), 25.25);
    }

    #[test]
    fn test_single_item_quantity_one() {
        let items = vec![item("Widget", 1, 99.99)];
        assert_eq!(compute_total(&items), 99.99);
    }
}
