pub mod errors;
pub mod db;
pub mod datetime;
pub mod task;
