//! Input records, field validation and batch loading

mod data;
mod field;
pub mod loader;

pub use data::InvestmentInput;
pub use field::{InputField, MAX_DURATION_YEARS};
pub use loader::{load_inputs, load_inputs_from_reader, NamedInput};
