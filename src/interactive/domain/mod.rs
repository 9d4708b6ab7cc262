pub mod models;
pub mod workspace;
