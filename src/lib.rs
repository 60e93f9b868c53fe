//! # Pantry Planner
//!
//! Quantity-aware pantry analysis: parses recipe measures, checks them
//! against pantry stock, derives leftovers, ranks recipes by what is on hand
//! and about to expire, and suggests companion recipes that use up
//! perishable surplus.

pub mod config;
pub mod deficit;
pub mod edamam;
pub mod matcher;
pub mod mealdb;
pub mod optimizer;
pub mod pantry;
pub mod quantity;
pub mod ranking;
pub mod recipe;
pub mod reference;
pub mod shopping;
pub mod source;
pub mod surplus;
pub mod units;
