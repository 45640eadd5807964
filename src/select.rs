//! Output projection.
//!
//! The caller picks what each response is reduced to before emission. The
//! selector string is resolved once, at invocation build time, into a finite
//! [`Projection`] variant; an unknown field name is a validation error rather
//! than a late lookup failure.

use crate::error::ValidationError;
use crate::op::OpSpec;
use crate::params::Params;
use serde_json::Value;

/// The rule for turning a raw response into emitted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Default: emit each element of the operation's primary result
    /// collection, per page, in response order.
    Primary,
    /// `*`: emit the whole response object, once per page.
    WholeResponse,
    /// A named top-level response field, emitted once per page.
    Field(String),
    /// `^Name`: echo the original input parameter back, exactly once for
    /// the whole invocation, after pagination completes.
    EchoParam(String),
}

impl Projection {
    /// Resolves and validates a selector string against an operation spec.
    pub fn resolve(
        selector: Option<&str>,
        spec: &OpSpec,
        params: &Params,
    ) -> Result<Self, ValidationError> {
        let selector = match selector {
            None => return Ok(Projection::Primary),
            Some(s) => s.trim(),
        };
        if selector.is_empty() {
            return Err(ValidationError::MalformedSelector(
                "selector is empty".to_string(),
            ));
        }
        if selector == "*" {
            return Ok(Projection::WholeResponse);
        }
        if let Some(param) = selector.strip_prefix('^') {
            if param.is_empty() {
                return Err(ValidationError::MalformedSelector(
                    "'^' must be followed by a parameter name".to_string(),
                ));
            }
            if !params.contains_key(param) {
                return Err(ValidationError::UnboundEchoParameter(param.to_string()));
            }
            return Ok(Projection::EchoParam(param.to_string()));
        }
        if !spec.known_response_field(selector) {
            return Err(ValidationError::UnknownField {
                field: selector.to_string(),
                operation: spec.qualified_name(),
                known: spec.response_fields.join(", "),
            });
        }
        Ok(Projection::Field(selector.to_string()))
    }

    /// Projects one page's response into the values to emit for that page.
    ///
    /// [`Projection::EchoParam`] contributes nothing per page; its single
    /// value comes from [`Projection::final_value`] after the last page.
    pub fn project_page(&self, spec: &OpSpec, response: &Value) -> Vec<Value> {
        match self {
            Projection::Primary => match spec.primary.and_then(|f| response.get(f)) {
                Some(Value::Array(items)) => items.clone(),
                Some(Value::Null) | None => Vec::new(),
                Some(single) => vec![single.clone()],
            },
            Projection::WholeResponse => vec![response.clone()],
            Projection::Field(name) => match response.get(name) {
                Some(Value::Null) | None => Vec::new(),
                Some(v) => vec![v.clone()],
            },
            Projection::EchoParam(_) => Vec::new(),
        }
    }

    /// The once-per-invocation value, evaluated against no response so it can
    /// never depend on page content. `None` for all per-page projections.
    pub fn final_value(&self, params: &Params) -> Option<Value> {
        match self {
            Projection::EchoParam(name) => params.get(name).cloned(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::OpSpec;
    use serde_json::json;

    static SPEC: OpSpec = OpSpec {
        service: "example",
        name: "ListWidgets",
        target_prefix: "Example_20200101",
        action: "List widgets",
        required: &[],
        fields: &[("FactoryId", "FactoryId"), ("PageToken", "PageToken")],
        token_param: Some("PageToken"),
        token_field: Some("NextPageToken"),
        primary: Some("Widgets"),
        response_fields: &["Widgets", "NextPageToken"],
        mutating: false,
    };

    fn params() -> Params {
        let mut p = Params::new();
        p.insert("FactoryId".to_string(), json!("f-1"));
        p
    }

    #[test]
    fn default_projects_primary_collection_in_order() {
        let page = json!({"Widgets": [{"Id": 1}, {"Id": 2}], "NextPageToken": "x"});
        let out = Projection::Primary.project_page(&SPEC, &page);
        assert_eq!(out, vec![json!({"Id": 1}), json!({"Id": 2})]);
    }

    #[test]
    fn star_projects_whole_response_once_per_page() {
        let page = json!({"Widgets": [], "NextPageToken": "x"});
        let out = Projection::WholeResponse.project_page(&SPEC, &page);
        assert_eq!(out, vec![page]);
    }

    #[test]
    fn named_field_projects_exactly_that_field() {
        let proj = Projection::resolve(Some("NextPageToken"), &SPEC, &params()).unwrap();
        let page = json!({"Widgets": [1], "NextPageToken": "tok"});
        assert_eq!(proj.project_page(&SPEC, &page), vec![json!("tok")]);
    }

    #[test]
    fn unknown_field_is_a_validation_error() {
        let err = Projection::resolve(Some("Bogus"), &SPEC, &params()).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownField { .. }));
    }

    #[test]
    fn echo_requires_bound_parameter() {
        let err = Projection::resolve(Some("^Missing"), &SPEC, &params()).unwrap_err();
        assert!(matches!(err, ValidationError::UnboundEchoParameter(_)));

        let proj = Projection::resolve(Some("^FactoryId"), &SPEC, &params()).unwrap();
        assert_eq!(proj, Projection::EchoParam("FactoryId".to_string()));
    }

    #[test]
    fn echo_contributes_nothing_per_page_and_one_final_value() {
        let proj = Projection::EchoParam("FactoryId".to_string());
        let page = json!({"Widgets": [1, 2, 3]});
        assert!(proj.project_page(&SPEC, &page).is_empty());
        assert_eq!(proj.final_value(&params()), Some(json!("f-1")));
        assert_eq!(Projection::Primary.final_value(&params()), None);
    }

    #[test]
    fn missing_primary_field_emits_nothing() {
        let page = json!({"NextPageToken": null});
        assert!(Projection::Primary.project_page(&SPEC, &page).is_empty());
    }
}
