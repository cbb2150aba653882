pub mod configure;
pub mod desk;
pub mod logger;
pub mod models;
pub mod request_number;
pub mod sheet;
