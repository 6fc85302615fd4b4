//! Spot market schema tables (schema id 3, version 2).
//!
//! A concrete schema for exercising the codec end to end: standalone
//! filter messages with constant discriminants, a deeply nested exchange
//! information response, and an order result whose tail was added in a
//! later schema version.

pub mod filters;
pub mod responses;
pub mod types;

use schema::SchemaDef;

pub use filters::{
    EXCHANGE_MAX_NUM_ORDERS_FILTER, LOT_SIZE_FILTER, MAX_NUM_ORDERS_FILTER, MAX_POSITION_FILTER,
    PRICE_FILTER,
};
pub use responses::{EXCHANGE_INFO_RESPONSE, NEW_ORDER_RESULT_RESPONSE};

pub const SCHEMA_ID: u16 = 3;
pub const SCHEMA_VERSION: u16 = 2;

pub const SCHEMA: SchemaDef = SchemaDef::new(
    SCHEMA_ID,
    SCHEMA_VERSION,
    "5.2",
    &[
        &PRICE_FILTER,
        &LOT_SIZE_FILTER,
        &MAX_NUM_ORDERS_FILTER,
        &MAX_POSITION_FILTER,
        &EXCHANGE_MAX_NUM_ORDERS_FILTER,
        &EXCHANGE_INFO_RESPONSE,
        &NEW_ORDER_RESULT_RESPONSE,
    ],
);
