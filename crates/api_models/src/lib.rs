#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR" ), "/", "README.md"))]

pub mod bookings;
pub mod catalog;
pub mod common;
pub mod disputes;
pub mod invoices;
pub mod loyalty;
pub mod payments;
pub mod refunds;
pub mod vendors;
