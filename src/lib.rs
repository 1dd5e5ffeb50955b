#![doc = "The `listshare` library crate."]
#![doc = ""]
#![doc = "This crate contains the core business logic for the ListShare service:"]
#![doc = "domain models, the access-control guard, repository functions over the"]
#![doc = "Postgres store, authentication (tokens, password hashing, middleware),"]
#![doc = "routing configuration, and error handling. It is used by the main binary"]
#![doc = "(`main.rs`) to construct and run the application."]

pub mod access;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
