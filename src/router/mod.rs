//! Page routing.
//!
//! - [`RouteTable`] - Static path to view mapping, nested under the layout shell
//! - [`Navigator`] - History stack with the scroll-to-top policy and base path

pub mod navigator;
pub mod table;

pub use navigator::*;
pub use table::*;
