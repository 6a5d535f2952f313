#![no_main]

use bllvm_script::serialization::{deserialize_transaction, serialize_transaction_with_witness};
use libfuzzer_sys::fuzz_target;

// Round-trip: decode(encode(tx)) == tx for any transaction the deserializer
// accepts.
fuzz_target!(|data: &[u8]| {
    if let Ok(tx) = deserialize_transaction(data) {
        let re_encoded = serialize_transaction_with_witness(&tx);
        let re_decoded = deserialize_transaction(&re_encoded).expect("re-encoding must decode");
        assert_eq!(tx, re_decoded);
    }
});
