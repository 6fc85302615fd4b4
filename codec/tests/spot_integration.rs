use bytestream::{ByteReader, ByteWriter};
use codec::{
    decode_body, decode_message, encode_message, Block, ChoiceSet, CodecError, FieldValue, Limits,
    RangeCheckError, RangeCheckKind,
};
use schema::MessageDef;
use spot_schema::{
    types, EXCHANGE_INFO_RESPONSE, EXCHANGE_MAX_NUM_ORDERS_FILTER, NEW_ORDER_RESULT_RESPONSE,
    PRICE_FILTER, SCHEMA,
};
use wire::MessageHeader;

fn set(block: &mut Block, def: &MessageDef, name: &str, value: FieldValue) {
    assert!(block.set_field(&def.block, name, value), "no field {name}");
}

fn new_order_result() -> Block {
    let def = &NEW_ORDER_RESULT_RESPONSE;
    let mut block = Block::null_for(&def.block);
    for (name, value) in [
        ("priceExponent", FieldValue::Int(-8)),
        ("qtyExponent", FieldValue::Int(-8)),
        ("orderId", FieldValue::Int(28)),
        ("transactTime", FieldValue::Int(1_507_725_176_595_000)),
        ("price", FieldValue::Int(100_000_000)),
        ("origQty", FieldValue::Int(1_000_000_000)),
        ("executedQty", FieldValue::Int(0)),
        ("cummulativeQuoteQty", FieldValue::Int(0)),
        ("status", FieldValue::Enum(0)),
        ("timeInForce", FieldValue::Enum(0)),
        ("orderType", FieldValue::Enum(1)),
        ("side", FieldValue::Enum(1)),
        ("orderCapacity", FieldValue::Enum(1)),
        ("workingFloor", FieldValue::Enum(1)),
        ("selfTradePreventionMode", FieldValue::Enum(1)),
        ("preventedQuantity", FieldValue::Int(0)),
        ("usedSor", FieldValue::Enum(0)),
        ("origQuoteOrderQty", FieldValue::Int(0)),
        ("pegPriceType", FieldValue::Enum(1)),
        ("pegOffsetValue", FieldValue::UInt(3)),
    ] {
        set(&mut block, def, name, value);
    }
    *block.data_mut(&def.block, "symbol").unwrap() = b"BTCUSDT".to_vec();
    *block.data_mut(&def.block, "clientOrderId").unwrap() = b"6gCrw2kRUAF9CvJDGP16IP".to_vec();
    block
}

fn exchange_info() -> Block {
    let def = &EXCHANGE_INFO_RESPONSE.block;
    let mut info = Block::null_for(def);

    let rate_limits = &def.groups[0].block;
    let mut limit = Block::null_for(rate_limits);
    limit.fields = vec![
        FieldValue::Enum(2),
        FieldValue::Enum(1),
        FieldValue::UInt(1),
        FieldValue::Int(6000),
    ];
    info.group_mut(def, "rateLimits").unwrap().push(limit);

    let mut filter = Block::null_for(&def.groups[1].block);
    filter.data[0] = encode(&EXCHANGE_MAX_NUM_ORDERS_FILTER, &max_num_orders(1000));
    info.group_mut(def, "exchangeFilters").unwrap().push(filter);

    let symbols = &def.groups[2].block;
    let mut symbol = Block::null_for(symbols);
    symbol.fields = vec![
        FieldValue::Enum(1),
        FieldValue::UInt(8),
        FieldValue::UInt(8),
        FieldValue::UInt(8),
        FieldValue::UInt(8),
        FieldValue::Choice(
            ChoiceSet::from_names(&types::ORDER_TYPES, &["Market", "Limit", "LimitMaker"]).unwrap(),
        ),
    ];
    symbol
        .fields
        .extend(std::iter::repeat(FieldValue::Enum(1)).take(9));
    symbol.fields.push(FieldValue::Enum(2));
    symbol.fields.push(FieldValue::Choice(
        ChoiceSet::from_names(&types::ALLOWED_SELF_TRADE_PREVENTION_MODES, &["ExpireTaker"])
            .unwrap(),
    ));
    symbol.fields.push(FieldValue::Enum(0));

    let permission_sets = &symbols.groups[1].block;
    let mut permission = Block::null_for(&permission_sets.groups[0].block);
    permission.data[0] = b"SPOT".to_vec();
    let mut permission_set = Block::null_for(permission_sets);
    permission_set.groups[0].push(permission);
    symbol.groups[1].push(permission_set);
    symbol.data = vec![b"BNBBTC".to_vec(), b"BNB".to_vec(), b"BTC".to_vec()];
    info.group_mut(def, "symbols").unwrap().push(symbol);

    let sors = &def.groups[3].block;
    let mut sor = Block::null_for(sors);
    let mut sor_symbol = Block::null_for(&sors.groups[0].block);
    sor_symbol.data[0] = b"BTCUSDT".to_vec();
    sor.groups[0].push(sor_symbol);
    sor.data[0] = b"BTC".to_vec();
    info.group_mut(def, "sors").unwrap().push(sor);
    info
}

fn max_num_orders(n: i64) -> Block {
    let def = &EXCHANGE_MAX_NUM_ORDERS_FILTER.block;
    let mut block = Block::null_for(def);
    block.set_field(def, "maxNumOrders", FieldValue::Int(n));
    block
}

fn encode(def: &MessageDef, block: &Block) -> Vec<u8> {
    let mut writer = ByteWriter::new(Vec::new());
    encode_message(&SCHEMA, def, block, &mut writer, true).unwrap();
    writer.into_inner()
}

fn decode(bytes: &[u8], range_check: bool) -> Result<(Block, u64), CodecError> {
    let mut reader = ByteReader::new(bytes);
    let decoded = decode_message(&SCHEMA, &mut reader, range_check, &Limits::default())?;
    Ok((decoded.block, reader.position()))
}

fn set_version(bytes: &mut [u8], version: u16) {
    bytes[6..8].copy_from_slice(&version.to_le_bytes());
}

fn set_block_length(bytes: &mut [u8], block_length: u16) {
    bytes[0..2].copy_from_slice(&block_length.to_le_bytes());
}

#[test]
fn header_dispatches_to_filter() {
    let mut bytes = vec![0x08, 0x00, 0x0F, 0x00, 0x03, 0x00, 0x02, 0x00];
    bytes.extend_from_slice(&1000_i64.to_le_bytes());

    let mut reader = ByteReader::new(&bytes[..]);
    let decoded = decode_message(&SCHEMA, &mut reader, true, &Limits::default()).unwrap();
    assert_eq!(decoded.message.name, "ExchangeMaxNumOrdersFilter");
    assert_eq!(decoded.header, MessageHeader::new(8, 15, 3, 2));
    assert_eq!(decoded.acting_version(), 2);
    assert_eq!(decoded.block, max_num_orders(1000));
    // constant discriminant is materialized without consuming bytes
    assert_eq!(decoded.block.fields[0], FieldValue::Enum(7));
    assert_eq!(reader.position(), 16);

    assert_eq!(encode(&EXCHANGE_MAX_NUM_ORDERS_FILTER, &decoded.block), bytes);
}

#[test]
fn new_order_result_roundtrip() {
    let block = new_order_result();
    let bytes = encode(&NEW_ORDER_RESULT_RESPONSE, &block);
    assert_eq!(bytes.len(), 8 + 153 + 1 + 7 + 1 + 22);
    assert_eq!(decode(&bytes, true).unwrap(), (block, bytes.len() as u64));
}

#[test]
fn exchange_info_roundtrip() {
    let block = exchange_info();
    let bytes = encode(&EXCHANGE_INFO_RESPONSE, &block);
    let (decoded, consumed) = decode(&bytes, true).unwrap();
    assert_eq!(decoded, block);
    assert_eq!(consumed, bytes.len() as u64);

    let def = &EXCHANGE_INFO_RESPONSE.block;
    let filter = &decoded.group(def, "exchangeFilters").unwrap()[0].data[0];
    let (inner, _) = decode(filter, true).unwrap();
    assert_eq!(inner, max_num_orders(1000));
}

#[test]
fn older_producer_leaves_new_fields_null() {
    let full = encode(&NEW_ORDER_RESULT_RESPONSE, &new_order_result());
    // peg fields occupy the last 11 bytes of the fixed block
    let mut old = full[..8 + 142].to_vec();
    old.extend_from_slice(&full[8 + 153..]);
    set_block_length(&mut old, 142);
    set_version(&mut old, 0);

    let (decoded, consumed) = decode(&old, true).unwrap();
    assert_eq!(consumed, old.len() as u64);

    let def = &NEW_ORDER_RESULT_RESPONSE.block;
    assert_eq!(
        decoded.field(def, "pegPriceType"),
        Some(&FieldValue::Enum(255))
    );
    assert_eq!(decoded.field(def, "pegOffsetValue"), Some(&FieldValue::UInt(255)));
    assert_eq!(
        decoded.field(def, "peggedPrice"),
        Some(&FieldValue::Int(i64::MIN))
    );
    assert_eq!(decoded.field(def, "orderId"), Some(&FieldValue::Int(28)));
    assert_eq!(decoded.data(def, "symbol"), Some(&b"BTCUSDT"[..]));
}

#[test]
fn newer_producer_padding_is_skipped() {
    let block = new_order_result();
    let full = encode(&NEW_ORDER_RESULT_RESPONSE, &block);
    let mut newer = full[..8 + 153].to_vec();
    newer.extend_from_slice(&[0xAB; 7]);
    newer.extend_from_slice(&full[8 + 153..]);
    set_block_length(&mut newer, 160);
    set_version(&mut newer, 3);

    let (decoded, consumed) = decode(&newer, true).unwrap();
    assert_eq!(decoded, block);
    assert_eq!(consumed, newer.len() as u64);
}

#[test]
fn newer_group_entries_are_padded_individually() {
    let def = &EXCHANGE_INFO_RESPONSE.block;
    let mut info = Block::null_for(def);
    let rate_limits = info.group_mut(def, "rateLimits").unwrap();
    for limit in [1200, 6000] {
        rate_limits.push(Block {
            fields: vec![
                FieldValue::Enum(2),
                FieldValue::Enum(1),
                FieldValue::UInt(1),
                FieldValue::Int(limit),
            ],
            ..Block::default()
        });
    }
    let bytes = encode(&EXCHANGE_INFO_RESPONSE, &info);

    // header, then u16 block length + u32 count, then two 11-byte entries
    let mut writer = ByteWriter::new(Vec::new());
    writer.write_bytes(&bytes[..8]).unwrap();
    writer.write_u16(13).unwrap();
    writer.write_u32(2).unwrap();
    for entry in bytes[14..36].chunks(11) {
        writer.write_bytes(entry).unwrap();
        writer.write_zeros(2).unwrap();
    }
    writer.write_bytes(&bytes[36..]).unwrap();
    let mut newer = writer.into_inner();
    set_version(&mut newer, 4);

    let (decoded, consumed) = decode(&newer, true).unwrap();
    assert_eq!(decoded, info);
    assert_eq!(consumed, newer.len() as u64);
}

#[test]
fn truncated_padding_is_io_error() {
    let full = encode(&PRICE_FILTER, &{
        let mut block = Block::null_for(&PRICE_FILTER.block);
        block.fields[1..].clone_from_slice(&[
            FieldValue::Int(-2),
            FieldValue::Int(1),
            FieldValue::Int(100_000),
            FieldValue::Int(1),
        ]);
        block
    });
    let mut newer = full.clone();
    set_block_length(&mut newer, 40);
    set_version(&mut newer, 3);
    newer.extend_from_slice(&[0; 4]);

    let err = decode(&newer, false).unwrap_err();
    assert!(err.is_io(), "{err:?}");
}

#[test]
fn unknown_enum_ordinal_rejected_at_own_version() {
    let mut bytes = encode(&NEW_ORDER_RESULT_RESPONSE, &new_order_result());
    // status follows two exponents and seven int64 fields
    bytes[8 + 58] = 7;

    let err = decode(&bytes, true).unwrap_err();
    assert_eq!(
        err,
        CodecError::RangeCheck(RangeCheckError {
            field: "status",
            kind: RangeCheckKind::UnknownEnumValue {
                type_name: "OrderStatus",
                ordinal: 7,
            },
        })
    );

    let (unchecked, _) = decode(&bytes, false).unwrap();
    let def = &NEW_ORDER_RESULT_RESPONSE.block;
    assert_eq!(unchecked.field(def, "status"), Some(&FieldValue::Enum(7)));
}

#[test]
fn unknown_enum_ordinal_accepted_from_newer_producer() {
    let mut bytes = encode(&NEW_ORDER_RESULT_RESPONSE, &new_order_result());
    bytes[8 + 58] = 7;
    set_version(&mut bytes, 3);

    let (decoded, _) = decode(&bytes, true).unwrap();
    let def = &NEW_ORDER_RESULT_RESPONSE.block;
    assert_eq!(decoded.field(def, "status"), Some(&FieldValue::Enum(7)));
}

#[test]
fn non_representable_and_null_ordinals_pass() {
    let def = &NEW_ORDER_RESULT_RESPONSE.block;
    for ordinal in [types::NON_REPRESENTABLE, 255] {
        let mut block = new_order_result();
        block.set_field(def, "status", FieldValue::Enum(ordinal));
        let bytes = encode(&NEW_ORDER_RESULT_RESPONSE, &block);
        assert_eq!(decode(&bytes, true).unwrap().0, block);
    }
}

#[test]
fn required_null_rejected_on_encode() {
    let def = &NEW_ORDER_RESULT_RESPONSE.block;
    let mut block = new_order_result();
    block.set_field(def, "orderId", FieldValue::Int(i64::MIN));
    let mut writer = ByteWriter::new(Vec::new());
    let err = encode_message(&SCHEMA, &NEW_ORDER_RESULT_RESPONSE, &block, &mut writer, true)
        .unwrap_err();
    assert!(matches!(
        err,
        CodecError::RangeCheck(RangeCheckError {
            field: "orderId",
            kind: RangeCheckKind::OutOfRange { .. },
        })
    ));
    assert!(writer.into_inner().is_empty());
}

#[test]
fn oversized_symbol_rejected_before_any_write() {
    let def = &NEW_ORDER_RESULT_RESPONSE.block;
    let mut block = new_order_result();
    *block.data_mut(def, "symbol").unwrap() = vec![b'B'; 300];
    let mut writer = ByteWriter::new(Vec::new());
    let err = encode_message(&SCHEMA, &NEW_ORDER_RESULT_RESPONSE, &block, &mut writer, true)
        .unwrap_err();
    assert_eq!(
        err,
        CodecError::RangeCheck(RangeCheckError {
            field: "symbol",
            kind: RangeCheckKind::LengthOverflow {
                length: 300,
                max: 255
            },
        })
    );
    assert!(writer.into_inner().is_empty());
}

#[test]
fn incrementally_built_choice_set_roundtrips() {
    let def = &EXCHANGE_INFO_RESPONSE.block;
    let mut order_types = ChoiceSet::default();
    for name in ["Market", "Limit"] {
        order_types.insert(usize::from(types::ORDER_TYPES.bit_of(name).unwrap()));
    }
    let mut info = exchange_info();
    info.group_mut(def, "symbols").unwrap()[0].fields[5] = FieldValue::Choice(order_types.clone());

    let bytes = encode(&EXCHANGE_INFO_RESPONSE, &info);
    let (decoded, _) = decode(&bytes, true).unwrap();
    assert_eq!(decoded, info);
    let FieldValue::Choice(read_back) = &decoded.group(def, "symbols").unwrap()[0].fields[5] else {
        panic!("orderTypes is not a choice set");
    };
    assert_eq!(read_back, &order_types);
    assert_eq!(read_back.width(), types::ORDER_TYPES.width() as usize);
    assert_eq!(read_back.names(&types::ORDER_TYPES), vec!["Market", "Limit"]);
}

#[test]
fn invalid_utf8_symbol_rejected() {
    let def = &NEW_ORDER_RESULT_RESPONSE.block;
    let mut bytes = encode(&NEW_ORDER_RESULT_RESPONSE, &new_order_result());
    let symbol_start = 8 + 153 + 1;
    bytes[symbol_start + 3] = 0xFF;

    let err = decode(&bytes, true).unwrap_err();
    assert_eq!(
        err,
        CodecError::RangeCheck(RangeCheckError {
            field: "symbol",
            kind: RangeCheckKind::InvalidUtf8 { valid_up_to: 3 },
        })
    );
    let (decoded, _) = decode(&bytes, false).unwrap();
    assert_eq!(decoded.data(def, "symbol").unwrap()[3], 0xFF);
}

#[test]
fn body_decodes_without_header() {
    let block = new_order_result();
    let bytes = encode(&NEW_ORDER_RESULT_RESPONSE, &block);
    let mut reader = ByteReader::new(&bytes[8..]);
    let decoded = decode_body(
        &SCHEMA,
        &NEW_ORDER_RESULT_RESPONSE.block,
        &mut reader,
        SCHEMA.version,
        NEW_ORDER_RESULT_RESPONSE.block_length(),
        true,
        &Limits::default(),
    )
    .unwrap();
    assert_eq!(decoded, block);
}

#[test]
fn group_count_limit_enforced() {
    let bytes = encode(&EXCHANGE_INFO_RESPONSE, &exchange_info());
    let mut reader = ByteReader::new(&bytes[..]);
    let limits = Limits {
        max_group_entries: 0,
        ..Limits::default()
    };
    let err = decode_message(&SCHEMA, &mut reader, true, &limits).unwrap_err();
    assert!(matches!(err, CodecError::LimitsExceeded { .. }));
}
