pub mod user_error_response;
