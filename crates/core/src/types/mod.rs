//! Shared domain types.

pub mod cart;
pub mod email;
pub mod id;

pub use cart::Cart;
pub use email::{Email, EmailError};
pub use id::{ProductId, UserId};
