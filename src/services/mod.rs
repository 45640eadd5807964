//! The operation catalog.
//!
//! Each service module declares static [`OpSpec`]s; this module collects
//! them into a registry keyed by qualified name so the CLI can look up
//! operations and list what is available.

pub mod cloudmap;
pub mod kvwebrtc;
pub mod transcoder;

use crate::op::OpSpec;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// All operations known to awscmd.
pub fn all() -> &'static [&'static OpSpec] {
    static ALL: Lazy<Vec<&'static OpSpec>> = Lazy::new(|| {
        let mut ops = Vec::new();
        ops.extend_from_slice(transcoder::OPERATIONS);
        ops.extend_from_slice(cloudmap::OPERATIONS);
        ops.extend_from_slice(kvwebrtc::OPERATIONS);
        ops
    });
    &ALL
}

/// Looks up an operation by service id and name.
///
/// The operation name is matched case-insensitively with `-` and `_`
/// ignored, so `list-services` and `ListServices` are the same operation.
pub fn lookup(service: &str, operation: &str) -> Option<&'static OpSpec> {
    static INDEX: Lazy<HashMap<(&'static str, String), &'static OpSpec>> = Lazy::new(|| {
        all()
            .iter()
            .map(|spec| ((spec.service, normalize(spec.name)), *spec))
            .collect()
    });
    INDEX.get(&(lookup_service(service)?, normalize(operation))).copied()
}

/// Service ids accepted on the command line, mapped to catalog ids.
fn lookup_service(service: &str) -> Option<&'static str> {
    match service.to_lowercase().as_str() {
        "transcoder" | "elastictranscoder" | "ets" => Some("elastictranscoder"),
        "cloudmap" | "servicediscovery" | "sd" => Some("servicediscovery"),
        "kvwebrtc" | "kinesisvideowebrtcstorage" => Some("kinesisvideowebrtcstorage"),
        _ => None,
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect::<String>()
        .to_lowercase()
}
