pub mod number_format;
pub mod result_table;
pub mod table_view;

pub use number_format::*;
pub use result_table::ResultTable;
pub use table_view::{ColumnDef, TableBody, TableView};
