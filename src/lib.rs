//! Listing-page scaffold: two presentational components (Button, Card),
//! a sample-data config, and the page that composes them.

pub mod components;
pub mod config;
pub mod pages;
