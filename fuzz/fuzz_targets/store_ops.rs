#![no_main]

use libfuzzer_sys::fuzz_target;
use store::SequenceStore;

fuzz_target!(|data: &[u8]| {
    let Some((&capacity, ops)) = data.split_first() else {
        return;
    };
    let mut slots = [0i16; 64];
    let Ok(mut store) = SequenceStore::new(&mut slots, u16::from(capacity % 65)) else {
        return;
    };
    let mut text = [0u8; 256];

    // Each op consumes four bytes: opcode, position, value (two bytes).
    for chunk in ops.chunks_exact(4).take(1024) {
        let position = u16::from(chunk[1]);
        let value = i16::from_le_bytes([chunk[2], chunk[3]]);
        match chunk[0] % 3 {
            0 => {
                let _ = store.insert(position, value);
            }
            1 => {
                let _ = store.delete(position);
            }
            _ => {
                let size = usize::from(chunk[2]);
                if let Ok(len) = store.render(&mut text[..size]) {
                    assert_eq!(text[len], 0);
                }
            }
        }
        assert!(store.len() <= store.capacity());
    }
});
