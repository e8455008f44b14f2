#![no_main]

use delta::DeltaList;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut slots = [0i16; 32];
    let Ok(mut list) = DeltaList::from_buffer(&mut slots, 32) else {
        return;
    };

    for chunk in data.chunks_exact(3).take(1024) {
        let value = i16::from_le_bytes([chunk[1], chunk[2]]);
        match chunk[0] % 3 {
            0 => {
                if let Ok(position) = list.insert(value) {
                    assert_eq!(list.magnitude_at(position), Some(value));
                }
            }
            1 => {
                let _ = list.remove(u16::from(chunk[1]) % 40);
            }
            _ => {
                let _ = list.advance(value);
            }
        }
        let magnitudes: Vec<i16> = list.magnitudes().collect();
        assert_eq!(magnitudes.len(), usize::from(list.len()));
        assert!(magnitudes.windows(2).all(|pair| pair[0] <= pair[1]));
    }
});
