//! Parameter handling for awscmd invocations.
//!
//! Caller-supplied inputs are captured once into an immutable [`Invocation`]
//! before any remote work begins. Parameters are loosely typed JSON values;
//! the [`ParamExt`] trait provides typed extraction with validation errors
//! instead of panics.

use crate::error::ValidationError;
use crate::op::OpSpec;
use crate::page::PaginationMode;
use crate::select::Projection;
use indexmap::IndexMap;
use serde_json::Value;

/// Parameters bound for one invocation, in binding order.
pub type Params = IndexMap<String, Value>;

/// Helper trait for extracting typed values from [`Params`].
pub trait ParamExt {
    fn get_string(&self, key: &str) -> Result<Option<String>, ValidationError>;
    fn get_string_required(&self, key: &str) -> Result<String, ValidationError>;
    fn get_bool(&self, key: &str) -> Result<Option<bool>, ValidationError>;
    fn get_i64(&self, key: &str) -> Result<Option<i64>, ValidationError>;
    fn get_vec_string(&self, key: &str) -> Result<Option<Vec<String>>, ValidationError>;
}

fn invalid(key: &str, expected: &str) -> ValidationError {
    ValidationError::InvalidParameter {
        name: key.to_string(),
        message: format!("must be {}", expected),
    }
}

impl ParamExt for Params {
    fn get_string(&self, key: &str) -> Result<Option<String>, ValidationError> {
        match self.get(key) {
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Null) | None => Ok(None),
            Some(v) => Ok(Some(v.to_string())),
        }
    }

    fn get_string_required(&self, key: &str) -> Result<String, ValidationError> {
        self.get_string(key)?
            .ok_or_else(|| ValidationError::MissingParameter(key.to_string()))
    }

    fn get_bool(&self, key: &str) -> Result<Option<bool>, ValidationError> {
        match self.get(key) {
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(Value::String(s)) => match s.to_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(Some(true)),
                "false" | "no" | "0" => Ok(Some(false)),
                _ => Err(invalid(key, "a boolean")),
            },
            Some(Value::Null) | None => Ok(None),
            Some(_) => Err(invalid(key, "a boolean")),
        }
    }

    fn get_i64(&self, key: &str) -> Result<Option<i64>, ValidationError> {
        match self.get(key) {
            Some(Value::Number(n)) => n.as_i64().map(Some).ok_or_else(|| invalid(key, "an integer")),
            Some(Value::String(s)) => s.parse().map(Some).map_err(|_| invalid(key, "an integer")),
            Some(Value::Null) | None => Ok(None),
            Some(_) => Err(invalid(key, "an integer")),
        }
    }

    fn get_vec_string(&self, key: &str) -> Result<Option<Vec<String>>, ValidationError> {
        match self.get(key) {
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => out.push(s.clone()),
                        v => out.push(v.to_string()),
                    }
                }
                Ok(Some(out))
            }
            Some(Value::String(s)) => {
                Ok(Some(s.split(',').map(|p| p.trim().to_string()).collect()))
            }
            Some(Value::Null) | None => Ok(None),
            Some(_) => Err(invalid(key, "a list")),
        }
    }
}

/// Parses `Name=value` pairs from the command line into [`Params`].
///
/// Values are parsed as JSON when they parse (numbers, booleans, lists,
/// nested objects) and taken as plain strings otherwise, so
/// `MaxResults=10` binds a number while `Name=web` binds a string.
pub fn parse_pairs(pairs: &[String]) -> Result<Params, ValidationError> {
    let mut params = Params::new();
    for pair in pairs {
        let (name, raw) = pair
            .split_once('=')
            .ok_or_else(|| ValidationError::InvalidParameter {
                name: pair.clone(),
                message: "expected Name=value".to_string(),
            })?;
        if name.is_empty() {
            return Err(ValidationError::InvalidParameter {
                name: pair.clone(),
                message: "parameter name is empty".to_string(),
            });
        }
        let value = match serde_json::from_str::<Value>(raw) {
            Ok(v) => v,
            Err(_) => Value::String(raw.to_string()),
        };
        params.insert(name.to_string(), value);
    }
    Ok(params)
}

/// The immutable snapshot of one invocation: bound parameters, the resolved
/// output projection, and the pagination mode. Built once, then only read.
#[derive(Debug)]
pub struct Invocation {
    /// The operation being invoked.
    pub spec: &'static OpSpec,
    /// Bound parameters, including any explicit starting token.
    pub params: Params,
    /// Resolved output projection.
    pub projection: Projection,
    /// Auto-iterate or stop after one page.
    pub mode: PaginationMode,
    /// Bypass the confirmation gate for mutating operations.
    pub force: bool,
}

impl Invocation {
    /// Validates inputs and captures the invocation snapshot.
    ///
    /// Fails fast, before any remote call: required parameters must be
    /// bound and non-null, every bound parameter must be known to the
    /// operation, and the selector must resolve. Binding a starting token
    /// (like passing `no_paginate`) forces single-page mode; the two
    /// signals are interchangeable.
    pub fn build(
        spec: &'static OpSpec,
        mut params: Params,
        selector: Option<&str>,
        no_paginate: bool,
        starting_token: Option<String>,
        force: bool,
    ) -> Result<Self, ValidationError> {
        let manual = no_paginate || starting_token.is_some();

        if let Some(token) = starting_token {
            match spec.token_param {
                Some(param) => {
                    params.insert(param.to_string(), Value::String(token));
                }
                None => {
                    return Err(ValidationError::InvalidParameter {
                        name: "starting-token".to_string(),
                        message: format!("{} is not paginated", spec.qualified_name()),
                    });
                }
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

        for required in spec.required {
            if params.get(*required).map_or(true, Value::is_null) {
                return Err(ValidationError::MissingParameter((*required).to_string()));
            }
        }

        let projection = Projection::resolve(selector, spec, &params)?;

        let mode = if manual || !spec.paginated() {
            PaginationMode::SinglePage
        } else {
            PaginationMode::Auto
        };

        Ok(Self {
            spec,
            params,
            projection,
            mode,
            force,
        })
    }

    /// Short description of the target resource for the confirmation prompt,
    /// derived from the first bound required parameter.
    pub fn describe_target(&self) -> String {
        for required in self.spec.required {
            if let Ok(Some(value)) = self.params.get_string(*required) {
                return format!("{}={}", required, value);
            }
        }
        self.spec.qualified_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services;
    use serde_json::json;

    fn list_jobs_spec() -> &'static OpSpec {
        services::lookup("elastictranscoder", "ListJobsByPipeline").expect("catalog entry")
    }

    #[test]
    fn parse_pairs_types_values() {
        let params = parse_pairs(&[
            "PipelineId=1234".to_string(),
            "Ascending=true".to_string(),
            "MaxResults=25".to_string(),
            "Name=web".to_string(),
        ])
        .unwrap();
        assert_eq!(params["PipelineId"], json!(1234));
        assert_eq!(params["Ascending"], json!(true));
        assert_eq!(params["MaxResults"], json!(25));
        assert_eq!(params["Name"], json!("web"));
    }

    #[test]
    fn parse_pairs_rejects_bare_words() {
        assert!(parse_pairs(&["PipelineId".to_string()]).is_err());
    }

    #[test]
    fn build_rejects_missing_required() {
        let err = Invocation::build(list_jobs_spec(), Params::new(), None, false, None, false)
            .unwrap_err();
        assert!(matches!(err, ValidationError::MissingParameter(ref p) if p == "PipelineId"));
    }

    #[test]
    fn build_rejects_unknown_parameter() {
        let mut params = Params::new();
        params.insert("PipelineId".to_string(), json!("1234"));
        params.insert("Bogus".to_string(), json!("x"));
        let err =
            Invocation::build(list_jobs_spec(), params, None, false, None, false).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownParameter { ref name, .. } if name == "Bogus"));
    }

    #[test]
    fn starting_token_forces_single_page() {
        let mut params = Params::new();
        params.insert("PipelineId".to_string(), json!("1234"));
        let inv = Invocation::build(
            list_jobs_spec(),
            params,
            None,
            false,
            Some("tok".to_string()),
            false,
        )
        .unwrap();
        assert_eq!(inv.mode, PaginationMode::SinglePage);
        assert_eq!(inv.params["PageToken"], json!("tok"));
    }

    #[test]
    fn null_required_counts_as_missing() {
        let mut params = Params::new();
        params.insert("PipelineId".to_string(), Value::Null);
        let err =
            Invocation::build(list_jobs_spec(), params, None, false, None, false).unwrap_err();
        assert!(matches!(err, ValidationError::MissingParameter(_)));
    }
}
