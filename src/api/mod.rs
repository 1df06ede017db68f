pub mod dto;
pub mod health_controller;
pub mod response;
pub mod routes;
pub mod server_state;
pub mod user_controller;
