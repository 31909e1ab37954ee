//! Cell types and storage

pub mod address;
pub mod table;
pub mod value;

pub use address::CellAddress;
pub use table::CellTable;
pub use value::Cell;
