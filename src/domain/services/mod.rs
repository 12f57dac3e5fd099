//! Pure domain computations.

mod line_items;

pub use line_items::{InvoiceTotals, LineItemCalculator};
