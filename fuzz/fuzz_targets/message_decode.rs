#![no_main]

use bytestream::{ByteReader, ByteWriter};
use codec::{decode_message, encode_message, Limits};
use libfuzzer_sys::fuzz_target;
use spot_schema::SCHEMA;

fuzz_target!(|data: &[u8]| {
    let limits = Limits::for_testing();
    let mut reader = ByteReader::new(data);
    while reader.position() < data.len() as u64 {
        let Ok(decoded) = decode_message(&SCHEMA, &mut reader, true, &limits) else {
            break;
        };
        // anything that passed the range check at the schema's own version
        // must encode back to a decodable message
        if decoded.acting_version() != SCHEMA.version {
            continue;
        }
        let mut writer = ByteWriter::new(Vec::new());
        encode_message(&SCHEMA, decoded.message, &decoded.block, &mut writer, true)
            .expect("re-encode of checked message");
        let bytes = writer.into_inner();
        let again = decode_message(&SCHEMA, &mut ByteReader::new(&bytes[..]), true, &limits)
            .expect("decode of re-encoded message");
        assert_eq!(again.block, decoded.block);
    }
});
