#![no_main]

use bllvm_script::config::ConsensusFlags;
use bllvm_script::{verify_script, OutPoint, Transaction, TransactionInput, TransactionOutput};
use libfuzzer_sys::fuzz_target;

// Resource bound: the interpreter must never panic or hang on adversarial
// script bytes, regardless of whether the scripts are well-formed.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 || data.len() > 20_000 {
        return;
    }
    let split = data[0] as usize % data.len();
    let (script_sig, script_pubkey) = data[1..].split_at(split.min(data.len() - 1));

    let tx = Transaction {
        version: 2,
        inputs: vec![TransactionInput::new(OutPoint::NULL, Vec::new(), 0xffffffff)],
        outputs: vec![TransactionOutput {
            value: 0,
            script_pubkey: vec![0x6a],
        }],
        lock_time: 0,
    };
    let prevouts = vec![TransactionOutput {
        value: 100_000,
        script_pubkey: script_pubkey.to_vec(),
    }];

    let _ = verify_script(
        script_sig,
        script_pubkey,
        &[],
        &tx,
        0,
        &prevouts,
        ConsensusFlags::taproot(),
    );
});
