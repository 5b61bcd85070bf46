//! Client for voting on entries of a remote REST collection.
//!
//! The remote collection is read and extended through [`client`], mirrored
//! locally in [`store`], and mutated only through the [`controller`], which
//! publishes [`events`] for whatever presentation layer sits on top.

pub mod board;
pub mod client;
pub mod config;
pub mod controller;
pub mod entity;
pub mod events;
pub mod logging;
pub mod mvi;
pub mod repl;
pub mod store;
