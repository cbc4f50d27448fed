#![no_main]

use libfuzzer_sys::fuzz_target;
use mapdlc::domain::services::ManifestTemplateEngine;
use mapdlc::domain::value_objects::derive_names;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        if let Ok(engine) = ManifestTemplateEngine::from_sources(source, source, "rpf") {
            let names = derive_names("Fuzz Area");
            let _ = engine.render_content_manifest(&names, names.level_hash());
        }
    }
});
