//! Response messages: exchange information and order results.

use schema::{BlockDef, FieldDef, GroupDef, MessageDef, PrimitiveType, VarDataDef};
use wire::LengthPrefix;

use crate::types::{
    ALLOWED_SELF_TRADE_PREVENTION_MODES, BOOL_ENUM, FLOOR, ORDER_CAPACITY, ORDER_SIDE,
    ORDER_STATUS, ORDER_TYPE, ORDER_TYPES, PEG_OFFSET_TYPE, PEG_PRICE_TYPE, RATE_LIMIT_INTERVAL,
    RATE_LIMIT_TYPE, SELF_TRADE_PREVENTION_MODE, SYMBOL_STATUS, TIME_IN_FORCE,
};

const fn utf8(name: &'static str, id: u16) -> VarDataDef {
    VarDataDef::new(name, id, LengthPrefix::U8).utf8()
}

const RATE_LIMITS: GroupDef = GroupDef::new(
    "rateLimits",
    100,
    LengthPrefix::U32,
    BlockDef::fields(&[
        FieldDef::enumeration("rateLimitType", 1, &RATE_LIMIT_TYPE),
        FieldDef::enumeration("interval", 2, &RATE_LIMIT_INTERVAL),
        FieldDef::scalar("intervalNum", 3, PrimitiveType::UInt8),
        FieldDef::scalar("rateLimit", 4, PrimitiveType::Int64),
    ]),
);

/// Framed filter messages travel as opaque bytes; see [`crate::filters`].
const EXCHANGE_FILTERS: GroupDef = GroupDef::new(
    "exchangeFilters",
    101,
    LengthPrefix::U32,
    BlockDef::fields(&[]).with_data(&[VarDataDef::new("filter", 1, LengthPrefix::U8)]),
);

const SYMBOL_FILTERS: GroupDef = GroupDef::new(
    "filters",
    100,
    LengthPrefix::U32,
    BlockDef::fields(&[]).with_data(&[VarDataDef::new("filter", 1, LengthPrefix::U8)]),
);

const PERMISSIONS: GroupDef = GroupDef::new(
    "permissions",
    100,
    LengthPrefix::U32,
    BlockDef::fields(&[]).with_data(&[utf8("permission", 1)]),
);

const PERMISSION_SETS: GroupDef = GroupDef::new(
    "permissionSets",
    101,
    LengthPrefix::U32,
    BlockDef::fields(&[]).with_groups(&[PERMISSIONS]),
);

const SYMBOLS: GroupDef = GroupDef::new(
    "symbols",
    102,
    LengthPrefix::U32,
    BlockDef::fields(&[
        FieldDef::enumeration("status", 1, &SYMBOL_STATUS),
        FieldDef::scalar("baseAssetPrecision", 2, PrimitiveType::UInt8),
        FieldDef::scalar("quoteAssetPrecision", 3, PrimitiveType::UInt8),
        FieldDef::scalar("baseCommissionPrecision", 4, PrimitiveType::UInt8),
        FieldDef::scalar("quoteCommissionPrecision", 5, PrimitiveType::UInt8),
        FieldDef::choice("orderTypes", 6, &ORDER_TYPES),
        FieldDef::enumeration("icebergAllowed", 7, &BOOL_ENUM),
        FieldDef::enumeration("ocoAllowed", 8, &BOOL_ENUM),
        FieldDef::enumeration("otoAllowed", 9, &BOOL_ENUM),
        FieldDef::enumeration("quoteOrderQtyMarketAllowed", 10, &BOOL_ENUM),
        FieldDef::enumeration("allowTrailingStop", 11, &BOOL_ENUM),
        FieldDef::enumeration("cancelReplaceAllowed", 12, &BOOL_ENUM),
        FieldDef::enumeration("amendAllowed", 13, &BOOL_ENUM),
        FieldDef::enumeration("isSpotTradingAllowed", 14, &BOOL_ENUM).deprecated_since(2),
        FieldDef::enumeration("isMarginTradingAllowed", 15, &BOOL_ENUM).deprecated_since(2),
        FieldDef::enumeration("defaultSelfTradePreventionMode", 16, &SELF_TRADE_PREVENTION_MODE),
        FieldDef::choice("allowedSelfTradePreventionModes", 17, &ALLOWED_SELF_TRADE_PREVENTION_MODES),
        FieldDef::enumeration("pegInstructionsAllowed", 18, &BOOL_ENUM).since(1),
    ])
    .with_groups(&[SYMBOL_FILTERS, PERMISSION_SETS])
    .with_data(&[utf8("symbol", 200), utf8("baseAsset", 201), utf8("quoteAsset", 202)]),
);

const SOR_SYMBOLS: GroupDef = GroupDef::new(
    "sorSymbols",
    1,
    LengthPrefix::U32,
    BlockDef::fields(&[]).with_data(&[utf8("symbol", 1)]),
);

const SORS: GroupDef = GroupDef::new(
    "sors",
    103,
    LengthPrefix::U32,
    BlockDef::fields(&[])
        .with_groups(&[SOR_SYMBOLS])
        .with_data(&[utf8("baseAsset", 200)]),
);

/// Exchange trading rules and symbol information. Template 103.
pub const EXCHANGE_INFO_RESPONSE: MessageDef = MessageDef::new(
    "ExchangeInfoResponse",
    103,
    BlockDef::fields(&[]).with_groups(&[RATE_LIMITS, EXCHANGE_FILTERS, SYMBOLS, SORS]),
);

const fn price(name: &'static str, id: u16) -> FieldDef {
    FieldDef::scalar(name, id, PrimitiveType::Int64)
}

const fn optional_i64(name: &'static str, id: u16) -> FieldDef {
    FieldDef::scalar(name, id, PrimitiveType::Int64).optional()
}

/// Result of a newly placed order. Template 301.
///
/// Prices and quantities are mantissas scaled by `priceExponent` and
/// `qtyExponent`. The peg fields were added in version 1.
pub const NEW_ORDER_RESULT_RESPONSE: MessageDef = MessageDef::new(
    "NewOrderResultResponse",
    301,
    BlockDef::fields(&[
        FieldDef::scalar("priceExponent", 1, PrimitiveType::Int8),
        FieldDef::scalar("qtyExponent", 2, PrimitiveType::Int8),
        FieldDef::scalar("orderId", 3, PrimitiveType::Int64),
        optional_i64("orderListId", 4),
        FieldDef::scalar("transactTime", 5, PrimitiveType::Int64)
            .with_time_unit("microsecond")
            .with_epoch("unix"),
        price("price", 6),
        price("origQty", 7),
        price("executedQty", 8),
        price("cummulativeQuoteQty", 9),
        FieldDef::enumeration("status", 10, &ORDER_STATUS),
        FieldDef::enumeration("timeInForce", 11, &TIME_IN_FORCE),
        FieldDef::enumeration("orderType", 12, &ORDER_TYPE),
        FieldDef::enumeration("side", 13, &ORDER_SIDE),
        optional_i64("stopPrice", 14),
        optional_i64("trailingDelta", 15),
        optional_i64("trailingTime", 16),
        optional_i64("workingTime", 17),
        optional_i64("icebergQty", 18),
        optional_i64("strategyId", 19),
        FieldDef::scalar("strategyType", 20, PrimitiveType::Int32).optional(),
        FieldDef::enumeration("orderCapacity", 21, &ORDER_CAPACITY),
        FieldDef::enumeration("workingFloor", 22, &FLOOR),
        FieldDef::enumeration("selfTradePreventionMode", 23, &SELF_TRADE_PREVENTION_MODE),
        optional_i64("tradeGroupId", 24),
        price("preventedQuantity", 25),
        FieldDef::enumeration("usedSor", 26, &BOOL_ENUM),
        price("origQuoteOrderQty", 27),
        FieldDef::enumeration("pegPriceType", 28, &PEG_PRICE_TYPE)
            .optional()
            .since(1),
        FieldDef::enumeration("pegOffsetType", 29, &PEG_OFFSET_TYPE)
            .optional()
            .since(1),
        FieldDef::scalar("pegOffsetValue", 30, PrimitiveType::UInt8)
            .optional()
            .since(1),
        optional_i64("peggedPrice", 31).since(1),
    ])
    .with_data(&[utf8("symbol", 200), utf8("clientOrderId", 201)]),
);
