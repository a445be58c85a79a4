//! Orders, order placement and the customer cart.
//!
//! No IO happens here; callers pass the clock in explicitly.

pub mod cart;
pub mod order;
pub mod placement;

pub use cart::{Cart, CartLine};
pub use order::{Order, OrderStatus};
pub use placement::{next_order_code, order_code, NewOrder, DELIVERY_LEAD_DAYS};
