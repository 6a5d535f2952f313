#![no_main]

use bllvm_script::script::opcode::decode_operations;
use libfuzzer_sys::fuzz_target;

// Decode totality: any byte string either decodes and re-encodes back to
// itself, or fails with a typed error. Never panics.
fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }
    for max_push in [None, Some(520usize)] {
        if let Ok(ops) = decode_operations(data, max_push) {
            let re_encoded = bllvm_script::script::opcode::encode_operations(&ops);
            assert_eq!(re_encoded, data);
        }
    }
});
