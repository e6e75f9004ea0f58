//! Path to page mapping.
//!
//! [`RouteTable`] is built once at startup and never mutated. Lookups always produce a
//! [`Page`]: paths without an entry resolve to the table's fallback page.

pub mod page;
pub mod table;

pub use page::Page;
pub use table::{RouteEntry, RouteTable, RouteTableBuilder};

#[cfg(test)]
mod tests;
