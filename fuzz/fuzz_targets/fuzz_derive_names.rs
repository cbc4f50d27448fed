#![no_main]

use libfuzzer_sys::fuzz_target;
use mapdlc::domain::value_objects::derive_names;

fuzz_target!(|data: &[u8]| {
    if let Ok(folder) = std::str::from_utf8(data) {
        let names = derive_names(folder);
        assert!(names.slug_lower().chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(names.is_empty(), names.slug_upper().is_empty());
    }
});
