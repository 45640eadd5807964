//! Request building.
//!
//! Converts bound parameters into the wire-level request object for one
//! operation. Only bound, non-null parameters are copied; everything else is
//! left unset so service-side defaults are never overridden. Nested objects
//! are all-or-nothing per nesting level: a sub-object appears in the request
//! only when at least one of its members is bound, never as an empty `{}`.

use crate::error::ValidationError;
use crate::op::OpSpec;
use crate::params::Params;
use serde_json::{Map, Value};

/// Builds the request object for `spec` from the bound parameters.
///
/// The returned value is the single request instance for the invocation;
/// pagination mutates only its continuation-token field between calls.
pub fn build_request(params: &Params, spec: &OpSpec) -> Result<Value, ValidationError> {
    for required in spec.required {
        if params.get(*required).map_or(true, Value::is_null) {
            return Err(ValidationError::MissingParameter((*required).to_string()));
        }
    }

    let mut root = Map::new();
    // Walk the mapping table, not the params, so field order is stable.
    for (name, path) in spec.fields {
        match params.get(*name) {
            None | Some(Value::Null) => continue,
            Some(value) => insert_at(&mut root, path, value.clone()),
        }
    }

    for name in params.keys() {
        if spec.request_path(name).is_none() {
            return Err(ValidationError::UnknownParameter {
                name: name.clone(),
                operation: spec.qualified_name(),
            });
        }
    }

    Ok(Value::Object(root))
}

/// Sets the continuation token on an already-built request.
pub fn set_token(request: &mut Value, token_param: &str, token: &str) {
    if let Value::Object(map) = request {
        insert_at(map, token_param, Value::String(token.to_string()));
    }
}

fn insert_at(map: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            map.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let entry = map
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(nested) = entry {
                insert_at(nested, rest, value);
            }
        }
    }
}
