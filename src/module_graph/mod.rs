/// Module graph bounded context - hierarchy reconstruction and position lookup
pub mod domain;
pub mod services;
