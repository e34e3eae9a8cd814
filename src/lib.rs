pub mod calendar;
pub mod cli;
pub mod core;
pub mod expenses;
pub mod google;
pub mod presentations;
pub mod schema;
pub mod store;
