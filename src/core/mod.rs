pub mod dates;
pub(crate) mod excel_date;
pub mod mapping;

pub use mapping::map_row;
