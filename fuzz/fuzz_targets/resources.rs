#![no_main]

use libfuzzer_sys::fuzz_target;
use rsrcscope::{
    debug::decode_codeview,
    oid::parse_arcs,
    overlay::decode_securom_addd,
    resources::{decode_resource, ResourceType},
    DecoderConfig,
};
use strum::IntoEnumIterator;

fuzz_target!(|data: &[u8]| {
    let config = DecoderConfig::default();
    for resource_type in ResourceType::iter().filter(|ty| ty.is_decodable()) {
        let _ = decode_resource(resource_type, data, &config);
    }

    let _ = decode_codeview(data);
    let _ = decode_securom_addd(data);
    let _ = parse_arcs(data, data.len());
});
