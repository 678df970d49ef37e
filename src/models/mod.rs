pub mod cell;
pub mod incident;
pub mod table;

pub use cell::Cell;
pub use incident::Incident;
pub use table::Table;
