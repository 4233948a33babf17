//! Shopping cart checkout flow.
//!
//! This crate provides a cart orchestrator over four collaborators:
//! - line item storage with cents-based pricing
//! - discount resolution against a fixed catalog
//! - a simulated payment gateway behind the `PaymentGateway` trait
//! - order confirmation composition and delivery behind
//!   `ConfirmationSender`
//!
//! The checkout sequence runs: assign order id → price the cart →
//! charge the total → send the confirmation. The confirmation is sent
//! regardless of the payment outcome; the cart state records which way
//! the checkout settled.

pub mod cart;
pub mod discount;
pub mod items;
pub mod money;
pub mod notification;
pub mod payment;
pub mod state;

pub use cart::ShoppingCart;
pub use discount::{Discount, DiscountService};
pub use items::{LineItem, LineItems};
pub use money::Money;
pub use notification::{
    ConfirmationSender, InMemorySender, LoggedEmailSender, OrderConfirmation,
};
pub use payment::{PaymentGateway, PaymentResult, SimulatedGateway};
pub use state::CartState;
