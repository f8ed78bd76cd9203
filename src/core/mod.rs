pub mod create;
pub mod report;
