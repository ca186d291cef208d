pub mod application;
pub mod id;
pub mod message;
pub mod ports;
