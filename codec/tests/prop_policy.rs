use bytestream::{ByteReader, ByteWriter};
use codec::{
    decode_body, decode_choice, encode_body, encode_choice, enum_range_check, range_check, Block,
    ChoiceSet, CodecError, FieldValue, Limits, RangeCheckKind,
};
use proptest::prelude::*;
use schema::{BlockDef, Choice, ChoiceSetType, FieldDef, PrimitiveType, SchemaDef};
use spot_schema::{types, MAX_POSITION_FILTER, SCHEMA};

const EMPTY: SchemaDef = SchemaDef::new(1, 0, "0.1", &[]);

macro_rules! single_field {
    ($required:ident, $optional:ident, $ty:ident) => {
        const $required: BlockDef =
            BlockDef::fields(&[FieldDef::scalar("value", 1, PrimitiveType::$ty)]);
        const $optional: BlockDef =
            BlockDef::fields(&[FieldDef::scalar("value", 1, PrimitiveType::$ty).optional()]);
    };
}

single_field!(I8, I8_OPT, Int8);
single_field!(I16, I16_OPT, Int16);
single_field!(I32, I32_OPT, Int32);
single_field!(I64, I64_OPT, Int64);
single_field!(U8, U8_OPT, UInt8);
single_field!(U16, U16_OPT, UInt16);
single_field!(U32, U32_OPT, UInt32);
single_field!(U64, U64_OPT, UInt64);

const CASES: [(PrimitiveType, &BlockDef, &BlockDef); 8] = [
    (PrimitiveType::Int8, &I8, &I8_OPT),
    (PrimitiveType::Int16, &I16, &I16_OPT),
    (PrimitiveType::Int32, &I32, &I32_OPT),
    (PrimitiveType::Int64, &I64, &I64_OPT),
    (PrimitiveType::UInt8, &U8, &U8_OPT),
    (PrimitiveType::UInt16, &U16, &U16_OPT),
    (PrimitiveType::UInt32, &U32, &U32_OPT),
    (PrimitiveType::UInt64, &U64, &U64_OPT),
];

const PERCENT: BlockDef = BlockDef::fields(&[FieldDef::scalar(
    "percent",
    1,
    PrimitiveType::UInt8,
)
.with_range(10, 20)]);

const SIDES: ChoiceSetType = ChoiceSetType::new(
    "Sides",
    PrimitiveType::UInt8,
    &[
        Choice::new("Bid", 0),
        Choice::new("Ask", 1),
        Choice::new("Cross", 5),
    ],
);

const SIDES_REORDERED: ChoiceSetType = ChoiceSetType::new(
    "Sides",
    PrimitiveType::UInt8,
    &[
        Choice::new("Cross", 5),
        Choice::new("Ask", 1),
        Choice::new("Bid", 0),
    ],
);

fn check(def: &BlockDef, value: i128) -> Result<(), CodecError> {
    let ty = def.fields[0].kind.encoding();
    let value = FieldValue::scalar(ty, value).expect("value fits encoding");
    let block = Block {
        fields: vec![value],
        ..Block::default()
    };
    range_check(&EMPTY, def, &block, 0)
}

fn decode_raw(def: &BlockDef, raw: u64) -> Block {
    let ty = def.fields[0].kind.encoding();
    let bytes = &raw.to_le_bytes()[..ty.size()];
    let mut reader = ByteReader::new(bytes);
    let block = decode_body(
        &EMPTY,
        def,
        &mut reader,
        0,
        def.block_length(),
        false,
        &Limits::default(),
    )
    .unwrap();
    assert_eq!(reader.position(), ty.size() as u64);
    block
}

#[test]
fn null_range_boundaries() {
    for (ty, required, optional) in CASES {
        let (min, max, null) = (ty.min_value(), ty.max_value(), ty.null_value());
        assert!(check(required, min).is_ok(), "{ty} min");
        assert!(check(required, max).is_ok(), "{ty} max");
        assert!(
            matches!(
                check(required, null),
                Err(CodecError::RangeCheck(ref err))
                    if matches!(err.kind, RangeCheckKind::OutOfRange { .. })
            ),
            "{ty} required null"
        );
        assert!(check(optional, null).is_ok(), "{ty} optional null");

        // min-1 and max+1 are either the null sentinel or unrepresentable
        for outside in [min - 1, max + 1] {
            match FieldValue::scalar(ty, outside) {
                Some(_) => assert_eq!(outside, null, "{ty} {outside}"),
                None => assert!(outside < ty.type_min() || outside > ty.type_max()),
            }
        }
    }
}

#[test]
fn signed_sentinels() {
    assert_eq!(PrimitiveType::Int8.min_value(), -127);
    assert_eq!(PrimitiveType::Int8.null_value(), -128);
    assert_eq!(PrimitiveType::Int64.null_value(), i128::from(i64::MIN));
    assert_eq!(PrimitiveType::UInt8.max_value(), 254);
    assert_eq!(PrimitiveType::UInt8.null_value(), 255);
    assert_eq!(PrimitiveType::UInt64.null_value(), i128::from(u64::MAX));
}

#[test]
fn range_override_boundaries() {
    assert!(check(&PERCENT, 9).is_err());
    assert!(check(&PERCENT, 10).is_ok());
    assert!(check(&PERCENT, 20).is_ok());
    assert_eq!(
        check(&PERCENT, 21).unwrap_err(),
        CodecError::RangeCheck(codec::RangeCheckError {
            field: "percent",
            kind: RangeCheckKind::OutOfRange {
                value: 21,
                min: 10,
                max: 20,
            },
        })
    );
}

#[test]
fn choice_sets_are_bit_exact() {
    for raw in 0..=u64::from(u8::MAX) {
        let set = decode_choice(&SIDES, &mut ByteReader::new(&[raw as u8][..])).unwrap();
        let reordered =
            decode_choice(&SIDES_REORDERED, &mut ByteReader::new(&[raw as u8][..])).unwrap();
        assert_eq!(set, reordered);
        for bit in 0..8 {
            assert_eq!(set.contains(bit), (raw >> bit) & 1 == 1, "raw {raw:#x} bit {bit}");
        }

        let mut writer = ByteWriter::new(Vec::new());
        encode_choice(&SIDES_REORDERED, &set, "sides", &mut writer).unwrap();
        assert_eq!(writer.into_inner(), vec![raw as u8]);
    }
}

#[test]
fn wide_choice_set_roundtrips_every_pattern() {
    for raw in 0..=u16::MAX {
        let bytes = raw.to_le_bytes();
        let set = decode_choice(&types::ORDER_TYPES, &mut ByteReader::new(&bytes[..])).unwrap();
        assert_eq!(set.iter_set().count(), raw.count_ones() as usize);
        let mut writer = ByteWriter::new(Vec::new());
        encode_choice(&types::ORDER_TYPES, &set, "orderTypes", &mut writer).unwrap();
        assert_eq!(writer.into_inner(), bytes.to_vec());
    }
}

#[test]
fn choice_names_follow_bits_not_declaration_order() {
    let set = ChoiceSet::from_names(&SIDES_REORDERED, &["Cross", "Bid"]).unwrap();
    assert_eq!(set.iter_set().collect::<Vec<_>>(), vec![0, 5]);
    assert_eq!(set.names(&SIDES), vec!["Bid", "Cross"]);
}

fn max_position(qty_exponent: i64, max_position: i64) -> Block {
    let mut block = Block::null_for(&MAX_POSITION_FILTER.block);
    block.fields[1] = FieldValue::Int(qty_exponent);
    block.fields[2] = FieldValue::Int(max_position);
    block
}

proptest! {
    #[test]
    fn prop_decoded_scalar_matches_policy(case in 0usize..8, raw in any::<u64>()) {
        let (ty, required, optional) = CASES[case];
        let raw = if ty.size() == 8 { raw } else { raw & ((1u64 << ty.bits()) - 1) };
        let block = decode_raw(required, raw);
        let value = block.fields[0].as_i128().unwrap();
        prop_assert!(value >= ty.type_min() && value <= ty.type_max());

        let in_range = value >= ty.min_value() && value <= ty.max_value();
        prop_assert_eq!(range_check(&EMPTY, required, &block, 0).is_ok(), in_range);
        let optional_ok = in_range || value == ty.null_value();
        prop_assert_eq!(range_check(&EMPTY, optional, &block, 0).is_ok(), optional_ok);
    }

    #[test]
    fn prop_enum_forward_compat(ordinal in any::<u8>(), acting in 0u16..6) {
        let ordinal = u64::from(ordinal);
        let result = enum_range_check(&types::ORDER_STATUS, ordinal, acting, SCHEMA.version);
        let legal = types::ORDER_STATUS.values.iter().any(|v| v.ordinal == ordinal)
            || ordinal == types::NON_REPRESENTABLE
            || ordinal == 255;
        prop_assert_eq!(result.is_ok(), legal || acting > SCHEMA.version);
    }

    #[test]
    fn prop_filter_roundtrip(qty_exponent in -127i64..=127, position in (i64::MIN + 1)..=i64::MAX) {
        let block = max_position(qty_exponent, position);
        let mut writer = ByteWriter::new(Vec::new());
        encode_body(&SCHEMA, &MAX_POSITION_FILTER.block, &block, &mut writer, true).unwrap();
        let bytes = writer.into_inner();
        prop_assert_eq!(bytes.len(), 9);

        let mut reader = ByteReader::new(&bytes[..]);
        let decoded = decode_body(
            &SCHEMA,
            &MAX_POSITION_FILTER.block,
            &mut reader,
            SCHEMA.version,
            MAX_POSITION_FILTER.block_length(),
            true,
            &Limits::default(),
        ).unwrap();
        prop_assert_eq!(decoded, block);
    }

    #[test]
    fn prop_padding_skip_keeps_alignment(extra in 1u16..64, trailer in any::<u32>()) {
        let block = max_position(-8, 1_000);
        let mut writer = ByteWriter::new(Vec::new());
        encode_body(&SCHEMA, &MAX_POSITION_FILTER.block, &block, &mut writer, true).unwrap();
        let mut bytes = writer.into_inner();
        bytes.extend(std::iter::repeat(0xEE).take(usize::from(extra)));
        bytes.extend_from_slice(&trailer.to_le_bytes());

        let mut reader = ByteReader::new(&bytes[..]);
        let decoded = decode_body(
            &SCHEMA,
            &MAX_POSITION_FILTER.block,
            &mut reader,
            SCHEMA.version + 1,
            MAX_POSITION_FILTER.block_length() + extra,
            true,
            &Limits::default(),
        ).unwrap();
        prop_assert_eq!(decoded, block);
        prop_assert_eq!(reader.read_u32().unwrap(), trailer);
    }
}
