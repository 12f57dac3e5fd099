use rust_decimal::Decimal;

use crate::domain::entities::{ItemField, LineItem};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Invoice line-item arithmetic.
pub struct LineItemCalculator;

impl LineItemCalculator {
    /// Replaces one field of the item at `index`, recomputing its amount when
    /// quantity or rate changes.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_item_field(items: &mut [LineItem], index: usize, field: ItemField) {
        let updated = items[index].with_field(field);
        items[index] = updated;
    }

    /// Appends a blank item (quantity 1, rate 0).
    pub fn add_item(items: &mut Vec<LineItem>) {
        items.push(LineItem::default());
    }

    /// Removes the item at `index`, preserving the order of the rest.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_item(items: &mut Vec<LineItem>, index: usize) -> LineItem {
        items.remove(index)
    }

    /// Sums item amounts left to right.
    #[must_use]
    pub fn subtotal(items: &[LineItem]) -> Decimal {
        items
            .iter()
            .map(LineItem::amount)
            .try_fold(Decimal::ZERO, Decimal::checked_add)
            .unwrap_or(Decimal::MAX)
    }

    /// `subtotal * rate / 100`, where `rate` is a percentage.
    #[must_use]
    pub fn tax(subtotal: Decimal, rate: Decimal) -> Decimal {
        subtotal
            .checked_mul(rate)
            .map_or(Decimal::MAX, |scaled| scaled / HUNDRED)
    }

    /// `subtotal + tax`.
    #[must_use]
    pub fn total(subtotal: Decimal, tax: Decimal) -> Decimal {
        subtotal.checked_add(tax).unwrap_or(Decimal::MAX)
    }
}

/// Derived money fields of an invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl InvoiceTotals {
    /// Derives every total from the items and a percentage tax rate.
    #[must_use]
    pub fn compute(items: &[LineItem], tax_rate: Decimal) -> Self {
        let subtotal = LineItemCalculator::subtotal(items);
        let tax = LineItemCalculator::tax(subtotal, tax_rate);
        Self {
            subtotal,
            tax,
            total: LineItemCalculator::total(subtotal, tax),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn item(description: &str, quantity: i64, rate: i64) -> LineItem {
        LineItem::new(description, Decimal::from(quantity), Decimal::from(rate))
    }

    fn kitchen_items() -> Vec<LineItem> {
        vec![
            item("Labor - Kitchen Installation", 1, 8000),
            item("Materials - Premium Cabinets", 1, 5000),
            item("Finishing Work", 1, 2000),
        ]
    }

    #[test]
    fn test_kitchen_invoice_totals() {
        let totals = InvoiceTotals::compute(&kitchen_items(), Decimal::new(85, 1));

        assert_eq!(totals.subtotal, Decimal::from(15000));
        assert_eq!(totals.tax, Decimal::from(1275));
        assert_eq!(totals.total, Decimal::from(16275));
    }

    #[test]
    fn test_empty_items_total_zero() {
        let totals = InvoiceTotals::compute(&[], Decimal::from(10));
        assert_eq!(totals, InvoiceTotals::default());
    }

    #[test]
    fn test_subtotal_is_sum_of_quantity_times_rate() {
        let items = vec![item("a", 3, 12), item("b", 0, 400), item("c", 7, 1)];
        let expected: Decimal = items.iter().map(|i| i.quantity() * i.rate()).sum();
        assert_eq!(LineItemCalculator::subtotal(&items), expected);
        assert_eq!(expected, Decimal::from(43));
    }

    #[test_case(Decimal::from(15000), Decimal::new(85, 1); "fractional rate")]
    #[test_case(Decimal::new(12_345, 2), Decimal::from(7); "fractional subtotal")]
    #[test_case(Decimal::ZERO, Decimal::from(20); "zero subtotal")]
    fn test_tax_is_linear_in_rate(subtotal: Decimal, rate: Decimal) {
        let single = LineItemCalculator::tax(subtotal, rate);
        let double = LineItemCalculator::tax(subtotal, rate * Decimal::TWO);
        assert_eq!(double, single * Decimal::TWO);
        assert_eq!(
            LineItemCalculator::total(subtotal, single),
            subtotal + single
        );
    }

    #[test]
    fn test_set_quantity_recomputes_amount() {
        let mut items = kitchen_items();

        LineItemCalculator::set_item_field(&mut items, 1, ItemField::Quantity(Decimal::from(2)));

        assert_eq!(items[1].amount(), Decimal::from(10000));
        assert_eq!(items[1].rate(), Decimal::from(5000));
    }

    #[test]
    fn test_set_rate_recomputes_amount() {
        let mut items = vec![item("x", 4, 0)];

        LineItemCalculator::set_item_field(&mut items, 0, ItemField::Rate(Decimal::new(125, 1)));

        assert_eq!(items[0].amount(), Decimal::from(50));
    }

    #[test]
    fn test_set_description_keeps_amount() {
        let mut items = kitchen_items();

        LineItemCalculator::set_item_field(
            &mut items,
            2,
            ItemField::Description("Trim".to_string()),
        );

        assert_eq!(items[2].description(), "Trim");
        assert_eq!(items[2].amount(), Decimal::from(2000));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_set_out_of_bounds_panics() {
        let mut items = kitchen_items();
        LineItemCalculator::set_item_field(&mut items, 3, ItemField::Rate(Decimal::ONE));
    }

    #[test]
    fn test_add_item_appends_blank_row() {
        let mut items = kitchen_items();

        LineItemCalculator::add_item(&mut items);

        assert_eq!(items.len(), 4);
        assert_eq!(items[3].quantity(), Decimal::ONE);
        assert_eq!(items[3].amount(), Decimal::ZERO);
        assert_eq!(items[0].description(), "Labor - Kitchen Installation");
    }

    #[test]
    fn test_remove_then_add_keeps_length_and_order() {
        let mut items = kitchen_items();

        let removed = LineItemCalculator::remove_item(&mut items, 1);
        LineItemCalculator::add_item(&mut items);

        assert_eq!(items.len(), 3);
        assert!(!items.contains(&removed));
        assert_eq!(items[0].description(), "Labor - Kitchen Installation");
        assert_eq!(items[1].description(), "Finishing Work");
        assert_eq!(items[2], LineItem::default());
    }
}
