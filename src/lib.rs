//! Client-side state for the stock management app.
//!
//! Resource stores mirror the backend's products, supplies and stock
//! movements. The [`dispatcher`] turns asynchronous requests into
//! lifecycle events, the [`store`] applies them, and views read cloned
//! snapshots.

pub mod config;
pub mod dispatcher;
pub mod logging;
pub mod mvi;
pub mod persistence;
pub mod replay;
pub mod resource;
pub mod session;
pub mod store;
pub mod ui;
