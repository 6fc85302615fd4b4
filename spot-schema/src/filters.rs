//! Symbol and exchange filter messages.
//!
//! Each filter is a standalone message whose `filterType` discriminant is a
//! schema constant. Filters travel framed, header included, inside the
//! `filter` var data of [`crate::EXCHANGE_INFO_RESPONSE`].

use schema::{BlockDef, ConstValue, FieldDef, MessageDef, PrimitiveType};

use crate::types::FILTER_TYPE;

const fn filter_type(ordinal: u64) -> FieldDef {
    FieldDef::enumeration("filterType", 1, &FILTER_TYPE).constant(ConstValue::UInt(ordinal))
}

pub const PRICE_FILTER: MessageDef = MessageDef::new(
    "PriceFilter",
    1,
    BlockDef::fields(&[
        filter_type(1),
        FieldDef::scalar("priceExponent", 2, PrimitiveType::Int8),
        FieldDef::scalar("minPrice", 3, PrimitiveType::Int64),
        FieldDef::scalar("maxPrice", 4, PrimitiveType::Int64),
        FieldDef::scalar("tickSize", 5, PrimitiveType::Int64),
    ]),
);

pub const LOT_SIZE_FILTER: MessageDef = MessageDef::new(
    "LotSizeFilter",
    4,
    BlockDef::fields(&[
        filter_type(3),
        FieldDef::scalar("qtyExponent", 2, PrimitiveType::Int8),
        FieldDef::scalar("minQty", 3, PrimitiveType::Int64),
        FieldDef::scalar("maxQty", 4, PrimitiveType::Int64),
        FieldDef::scalar("stepSize", 5, PrimitiveType::Int64),
    ]),
);

pub const MAX_NUM_ORDERS_FILTER: MessageDef = MessageDef::new(
    "MaxNumOrdersFilter",
    9,
    BlockDef::fields(&[
        filter_type(4),
        FieldDef::scalar("maxNumOrders", 2, PrimitiveType::Int64),
    ]),
);

pub const MAX_POSITION_FILTER: MessageDef = MessageDef::new(
    "MaxPositionFilter",
    12,
    BlockDef::fields(&[
        filter_type(0),
        FieldDef::scalar("qtyExponent", 2, PrimitiveType::Int8),
        FieldDef::scalar("maxPosition", 3, PrimitiveType::Int64),
    ]),
);

pub const EXCHANGE_MAX_NUM_ORDERS_FILTER: MessageDef = MessageDef::new(
    "ExchangeMaxNumOrdersFilter",
    15,
    BlockDef::fields(&[
        filter_type(7),
        FieldDef::scalar("maxNumOrders", 2, PrimitiveType::Int64),
    ]),
);
