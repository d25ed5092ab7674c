//! Rolling compositions: role filter options, selection state, and uniform
//! sampling without replacement over a catalog snapshot.

mod filter;
mod sampler;
mod selection;

pub use filter::{FilterOption, filter_by_name, filter_options};
pub use sampler::{ROLL_SIZE, roll, roll_n};
pub use selection::Selection;
