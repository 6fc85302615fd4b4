//! Enumerations and choice sets shared by the spot messages.

use schema::{Choice, ChoiceSetType, EnumType, EnumValue, PrimitiveType};

/// Ordinal every spot enumeration reserves for values this schema cannot name.
pub const NON_REPRESENTABLE: u64 = 254;

const fn spot_enum(name: &'static str, values: &'static [EnumValue]) -> EnumType {
    EnumType::new(name, PrimitiveType::UInt8, values).with_non_representable(NON_REPRESENTABLE)
}

pub const BOOL_ENUM: EnumType = spot_enum(
    "BoolEnum",
    &[EnumValue::new("False", 0), EnumValue::new("True", 1)],
);

pub const FILTER_TYPE: EnumType = spot_enum(
    "FilterType",
    &[
        EnumValue::new("MaxPosition", 0),
        EnumValue::new("PriceFilter", 1),
        EnumValue::new("TPlusSell", 2),
        EnumValue::new("LotSize", 3),
        EnumValue::new("MaxNumOrders", 4),
        EnumValue::new("MinNotional", 5),
        EnumValue::new("MaxNumAlgoOrders", 6),
        EnumValue::new("ExchangeMaxNumOrders", 7),
        EnumValue::new("ExchangeMaxNumAlgoOrders", 8),
        EnumValue::new("IcebergParts", 9),
        EnumValue::new("MarketLotSize", 10),
        EnumValue::new("PercentPrice", 11),
        EnumValue::new("MaxNumIcebergOrders", 12),
        EnumValue::new("ExchangeMaxNumIcebergOrders", 13),
        EnumValue::new("TrailingDelta", 14),
        EnumValue::new("PercentPriceBySide", 15),
        EnumValue::new("Notional", 16),
        EnumValue::new("MaxNumOrderLists", 17),
        EnumValue::new("ExchangeMaxNumOrderLists", 18),
        EnumValue::new("MaxNumOrderAmends", 19),
        EnumValue::new("MaxAsset", 20),
    ],
);

pub const RATE_LIMIT_TYPE: EnumType = spot_enum(
    "RateLimitType",
    &[
        EnumValue::new("RawRequests", 0),
        EnumValue::new("Connections", 1),
        EnumValue::new("RequestWeight", 2),
        EnumValue::new("Orders", 3),
    ],
);

pub const RATE_LIMIT_INTERVAL: EnumType = spot_enum(
    "RateLimitInterval",
    &[
        EnumValue::new("Second", 0),
        EnumValue::new("Minute", 1),
        EnumValue::new("Hour", 2),
        EnumValue::new("Day", 3),
    ],
);

pub const SYMBOL_STATUS: EnumType = spot_enum(
    "SymbolStatus",
    &[
        EnumValue::new("PreTrading", 0),
        EnumValue::new("Trading", 1),
        EnumValue::new("PostTrading", 2),
        EnumValue::new("EndOfDay", 3),
        EnumValue::new("Halt", 4),
        EnumValue::new("AuctionMatch", 5),
        EnumValue::new("Break", 7),
    ],
);

pub const ORDER_STATUS: EnumType = spot_enum(
    "OrderStatus",
    &[
        EnumValue::new("New", 0),
        EnumValue::new("PartiallyFilled", 1),
        EnumValue::new("Filled", 2),
        EnumValue::new("Canceled", 3),
        EnumValue::new("PendingCancel", 4),
        EnumValue::new("Rejected", 5),
        EnumValue::new("Expired", 6),
        EnumValue::new("ExpiredInMatch", 9),
        EnumValue::new("PendingNew", 11),
        EnumValue::new("Unknown", 253),
    ],
);

pub const TIME_IN_FORCE: EnumType = spot_enum(
    "TimeInForce",
    &[
        EnumValue::new("Gtc", 0),
        EnumValue::new("Ioc", 1),
        EnumValue::new("Fok", 2),
    ],
);

pub const ORDER_TYPE: EnumType = spot_enum(
    "OrderType",
    &[
        EnumValue::new("Market", 0),
        EnumValue::new("Limit", 1),
        EnumValue::new("StopLoss", 2),
        EnumValue::new("StopLossLimit", 3),
        EnumValue::new("TakeProfit", 4),
        EnumValue::new("TakeProfitLimit", 5),
        EnumValue::new("LimitMaker", 6),
    ],
);

pub const ORDER_SIDE: EnumType = spot_enum(
    "OrderSide",
    &[EnumValue::new("Buy", 0), EnumValue::new("Sell", 1)],
);

pub const ORDER_CAPACITY: EnumType = spot_enum(
    "OrderCapacity",
    &[EnumValue::new("Principal", 1), EnumValue::new("Agency", 2)],
);

pub const FLOOR: EnumType = spot_enum(
    "Floor",
    &[
        EnumValue::new("Exchange", 1),
        EnumValue::new("Broker", 2),
        EnumValue::new("Sor", 3),
    ],
);

pub const SELF_TRADE_PREVENTION_MODE: EnumType = spot_enum(
    "SelfTradePreventionMode",
    &[
        EnumValue::new("None", 1),
        EnumValue::new("ExpireTaker", 2),
        EnumValue::new("ExpireMaker", 3),
        EnumValue::new("ExpireBoth", 4),
        EnumValue::new("Decrement", 5),
    ],
);

pub const PEG_PRICE_TYPE: EnumType = spot_enum(
    "PegPriceType",
    &[
        EnumValue::new("PrimaryPeg", 1),
        EnumValue::new("MarketPeg", 2),
    ],
);

pub const PEG_OFFSET_TYPE: EnumType =
    spot_enum("PegOffsetType", &[EnumValue::new("PriceLevel", 1)]);

pub const ORDER_TYPES: ChoiceSetType = ChoiceSetType::new(
    "OrderTypes",
    PrimitiveType::UInt16,
    &[
        Choice::new("Market", 0),
        Choice::new("Limit", 1),
        Choice::new("StopLoss", 2),
        Choice::new("StopLossLimit", 3),
        Choice::new("TakeProfit", 4),
        Choice::new("TakeProfitLimit", 5),
        Choice::new("LimitMaker", 6),
        Choice::new("NonRepresentable", 15),
    ],
);

pub const ALLOWED_SELF_TRADE_PREVENTION_MODES: ChoiceSetType = ChoiceSetType::new(
    "AllowedSelfTradePreventionModes",
    PrimitiveType::UInt8,
    &[
        Choice::new("None", 0),
        Choice::new("ExpireTaker", 1),
        Choice::new("ExpireMaker", 2),
        Choice::new("ExpireBoth", 3),
        Choice::new("Decrement", 4),
        Choice::new("NonRepresentable", 7),
    ],
);
