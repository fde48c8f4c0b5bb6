pub mod conf;
pub mod trace;
