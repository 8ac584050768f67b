#![no_main]

use bytecursor::{read_field, write_field, Cursor, Reader, Writer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = Reader::new(data);
    let Ok(decoded) = read_field::<Vec<String>>(&mut reader) else {
        assert_eq!(reader.position(), 0);
        return;
    };

    // Whatever decoded must encode back into exactly the bytes it came from.
    let consumed = reader.position();
    let mut buffer = vec![0u8; consumed];
    let mut writer = Writer::new(&mut buffer);
    write_field(&mut writer, &decoded).unwrap();
    assert!(writer.is_exhausted());
    assert_eq!(buffer.as_slice(), &data[..consumed]);
});
