#![no_main]

use fru::{parse, ParseOptions};
use libfuzzer_sys::fuzz_target;

// First byte picks the options; the rest is the record.
fuzz_target!(|data: &[u8]| {
    let Some((&mode, record)) = data.split_first() else {
        return;
    };
    let options = ParseOptions {
        ignore_checksum_errors: mode & 1 != 0,
        base_offset: (mode & 2 != 0).then_some(u32::from(mode >> 2)),
    };
    if let Ok(area) = parse(record, &options) {
        for (_, value) in area.fields() {
            let _ = value;
        }
    }
});
