pub mod app_configuration;
