pub mod column;
pub mod employee;

pub use column::ColumnInfo;
pub use employee::{Employee, NewEmployee};
