//! Declarative operation descriptions.
//!
//! Every remote operation awscmd can invoke is described by a static
//! [`OpSpec`]: which parameters it accepts and where they land in the request,
//! which response field carries the continuation token, and which field holds
//! the primary result collection. The request builder, page iterator, and
//! output projector are all driven by this data; no per-operation code exists
//! beyond the spec itself.

/// Declarative description of one remote operation.
#[derive(Debug)]
pub struct OpSpec {
    /// Service identifier, also used to derive the default endpoint host
    /// (e.g. `elastictranscoder`).
    pub service: &'static str,

    /// Operation name as the service knows it (e.g. `ListJobsByPipeline`).
    pub name: &'static str,

    /// Wire-protocol target prefix for the `x-amz-target` header.
    pub target_prefix: &'static str,

    /// Human-readable action phrase used by the confirmation gate,
    /// e.g. "Create an Elastic Transcoder job".
    pub action: &'static str,

    /// Parameters that must be bound before the call is attempted.
    pub required: &'static [&'static str],

    /// Mapping table from flat parameter name to its request path.
    /// Dotted paths ("DnsConfig.RoutingPolicy") place the value inside a
    /// nested object; the nested object is created only when at least one
    /// of its members is bound.
    pub fields: &'static [(&'static str, &'static str)],

    /// Request-side continuation token parameter, for paginated operations.
    pub token_param: Option<&'static str>,

    /// Response-side continuation token field, for paginated operations.
    pub token_field: Option<&'static str>,

    /// Response field holding the primary result collection. `None` for
    /// operations with no result payload.
    pub primary: Option<&'static str>,

    /// All top-level response fields this operation can return; used to
    /// validate `--select <Field>` before any call is made.
    pub response_fields: &'static [&'static str],

    /// True for operations with remote side effects (create/update/register).
    /// These pass through the confirmation gate.
    pub mutating: bool,
}

impl OpSpec {
    /// Qualified `service/Operation` name used in errors and logs.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.service, self.name)
    }

    /// True when the operation supports continuation-token pagination.
    pub fn paginated(&self) -> bool {
        self.token_param.is_some() && self.token_field.is_some()
    }

    /// Looks up the request path for a flat parameter name.
    pub fn request_path(&self, param: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == param)
            .map(|(_, path)| *path)
    }

    /// True when `field` is a top-level field of this operation's response.
    pub fn known_response_field(&self, field: &str) -> bool {
        self.response_fields.iter().any(|f| *f == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SPEC: OpSpec = OpSpec {
        service: "example",
        name: "ListWidgets",
        target_prefix: "Example_20200101",
        action: "List widgets",
        required: &["FactoryId"],
        fields: &[
            ("FactoryId", "FactoryId"),
            ("PageToken", "PageToken"),
            ("FilterColor", "Filter.Color"),
        ],
        token_param: Some("PageToken"),
        token_field: Some("NextPageToken"),
        primary: Some("Widgets"),
        response_fields: &["Widgets", "NextPageToken"],
        mutating: false,
    };

    #[test]
    fn qualified_name_and_pagination() {
        assert_eq!(SPEC.qualified_name(), "example/ListWidgets");
        assert!(SPEC.paginated());
    }

    #[test]
    fn request_path_lookup() {
        assert_eq!(SPEC.request_path("FilterColor"), Some("Filter.Color"));
        assert_eq!(SPEC.request_path("Nope"), None);
    }

    #[test]
    fn response_field_check() {
        assert!(SPEC.known_response_field("Widgets"));
        assert!(!SPEC.known_response_field("widgets"));
    }
}
