pub mod coerce;
pub mod error;
pub mod fact_table;

pub use coerce::coerce_numeric;
pub use error::IngestError;
pub use fact_table::{
    COL_AREA, COL_ETHNICITY, COL_NUMB, COL_NUMB_X, COL_PC, COL_PC_X, COL_TIME, FACT_DELIMITER,
    REQUIRED_COLUMNS, read_fact_rows, read_fact_table,
};
