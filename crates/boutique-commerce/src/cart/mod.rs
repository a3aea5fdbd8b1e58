//! Shopping cart module.
//!
//! The in-progress sale: stock-aware line items, the discount, and the
//! totals computation.

mod cart;
mod line;
mod totals;

pub use cart::Cart;
pub use line::CartLine;
pub use totals::CartTotals;
