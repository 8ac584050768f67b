#![no_main]

use bytecursor::{Cursor, Endian, Reader};
use libfuzzer_sys::fuzz_target;

// The first byte selects a sequence of operations, the rest is the region being read.
fuzz_target!(|data: &[u8]| {
    let Some((&ops, region)) = data.split_first() else {
        return;
    };

    let mut reader = Reader::new(region);
    for step in 0..8 {
        let before = reader.position();
        let ok = match (ops >> step) & 0x7 {
            0 => reader.read_le::<u32>().is_ok(),
            1 => reader.read_with::<f64>(Endian::Big).is_ok(),
            2 => reader.read_sized_string_le().is_ok(),
            3 => reader.read_cstring().is_ok(),
            4 => reader.align(4).is_ok(),
            5 => reader.read_sized_string_utf8_be().is_ok(),
            6 => {
                let len = reader.peek::<u8>().unwrap_or(0) as usize;
                reader.view_string(len).is_ok()
            }
            _ => reader.subview(before / 2, None).map(|sub| sub.size()).is_ok(),
        };

        assert!(reader.position() <= reader.size());
        if !ok {
            assert_eq!(reader.position(), before);
        }
    }
});
