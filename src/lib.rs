pub mod config;
pub mod db;
pub mod domain;
pub mod forms;
pub mod ids;
pub mod metrics;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
