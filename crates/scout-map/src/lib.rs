//! Column-role inference and buyer record normalization.

pub mod normalize;
pub mod roles;

pub use normalize::{ColumnMap, normalize_table, parse_date_any};
pub use roles::{FieldRole, infer_column, normalize_header};
