//! Tool documentation extraction.
//!
//! Reads the host's registered tools through the [`ToolSource`] capability
//! and turns each one into a read-only [`ToolRecord`]. Extraction runs once
//! at setup time; the records are the snapshot every documentation endpoint
//! serves from.
//!
//! Parameter information comes from the tool's declared JSON Schema. Each
//! metadata field degrades independently: a tool with tags but no usable
//! schema still gets a record, just with an empty parameter list.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::source::{ToolMeta, ToolSource};
use crate::core::Result;

/// A single parameter of a documented tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterDescriptor {
    /// Parameter name.
    pub name: String,

    /// JSON Schema type label ("string", "integer", "boolean", ...).
    #[serde(rename = "type")]
    pub type_label: String,

    /// Whether the parameter must be supplied by the caller.
    pub required: bool,

    /// Declared default value, when the schema carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Parameter description from the schema, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Descriptive record for one registered tool.
///
/// Records are recomputed per extraction run and never mutated afterwards;
/// they are read-only views used to build response payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolRecord {
    /// Tool name, unique within one extraction run.
    pub name: String,

    /// Optional display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Tool description; empty when the host recorded none.
    pub description: String,

    /// Tags recorded for the tool, sorted.
    pub tags: BTreeSet<String>,

    /// Parameters derived from the tool's input schema.
    pub parameters: Vec<ParameterDescriptor>,
}

/// Extracts documentation records from a tool source.
pub struct ToolExtractor {
    verbose: bool,
}

impl ToolExtractor {
    /// Create a new extractor.
    ///
    /// With `verbose` set, each documented tool is logged at info level.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Extract one record per registered tool.
    ///
    /// Idempotent and side-effect-free: repeated calls return equivalent
    /// lists as long as the host registry is unchanged. A source failure
    /// (integration mismatch) aborts the whole extraction; there is no
    /// partial result.
    pub async fn extract(&self, source: &dyn ToolSource) -> Result<Vec<ToolRecord>> {
        let metas = source.list_tools().await?;

        if metas.is_empty() {
            warn!("No tools found in server '{}'", source.server_name());
            return Ok(Vec::new());
        }

        if self.verbose {
            info!("Found {} tools to document", metas.len());
        }

        let records = metas
            .into_iter()
            .map(|meta| {
                let record = extract_record(meta);
                if self.verbose {
                    info!(
                        "Documented tool: {} ({} parameters)",
                        record.name,
                        record.parameters.len()
                    );
                } else {
                    debug!("Documented tool: {}", record.name);
                }
                record
            })
            .collect();

        Ok(records)
    }
}

/// Build a record from one tool's metadata.
fn extract_record(meta: ToolMeta) -> ToolRecord {
    let parameters = match &meta.input_schema {
        Some(schema) => extract_parameters(&meta.name, schema),
        None => Vec::new(),
    };

    ToolRecord {
        name: meta.name,
        title: meta.title,
        description: meta.description.unwrap_or_default(),
        tags: meta.tags,
        parameters,
    }
}

/// Derive parameter descriptors from a tool's input schema.
///
/// Expects a JSON Schema object with `properties` and `required` members.
/// A schema without usable `properties` yields an empty list for that tool
/// only; extraction of other tools is unaffected.
fn extract_parameters(tool_name: &str, schema: &Value) -> Vec<ParameterDescriptor> {
    let Some(root) = schema.as_object() else {
        warn!("Tool '{}' has a non-object input schema", tool_name);
        return Vec::new();
    };

    let required: BTreeSet<&str> = root
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let Some(properties) = root.get("properties").and_then(Value::as_object) else {
        debug!("Tool '{}' declares no parameter properties", tool_name);
        return Vec::new();
    };

    properties
        .iter()
        .map(|(name, property)| {
            let property = resolve_ref(root, property);
            ParameterDescriptor {
                name: name.clone(),
                type_label: type_label(property),
                required: required.contains(name.as_str()),
                default: property.get("default").cloned(),
                description: property
                    .get("description")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }
        })
        .collect()
}

/// Resolve a local `$ref` one level against the schema's definitions.
///
/// Unresolvable references fall through to the property schema itself, so
/// the parameter still gets the "string" fallback label.
fn resolve_ref<'a>(root: &'a Map<String, Value>, property: &'a Value) -> &'a Value {
    let Some(reference) = property.get("$ref").and_then(Value::as_str) else {
        return property;
    };

    let target = reference
        .strip_prefix("#/$defs/")
        .or_else(|| reference.strip_prefix("#/definitions/"));

    if let Some(name) = target {
        let definitions = root.get("$defs").or_else(|| root.get("definitions"));
        if let Some(resolved) = definitions.and_then(|defs| defs.get(name)) {
            return resolved;
        }
    }

    warn!("Unresolvable schema reference: {}", reference);
    property
}

/// Pick a type label for a property schema.
///
/// Nullable types (schemars renders `Option<T>` as a type array or an
/// `anyOf` with a null variant) resolve to the first non-null member;
/// anything else falls back to "string".
fn type_label(property: &Value) -> String {
    match property.get("type") {
        Some(Value::String(label)) => label.clone(),
        Some(Value::Array(labels)) => labels
            .iter()
            .filter_map(Value::as_str)
            .find(|label| *label != "null")
            .unwrap_or("string")
            .to_string(),
        _ => property
            .get("anyOf")
            .and_then(Value::as_array)
            .and_then(|variants| {
                variants
                    .iter()
                    .filter_map(|variant| variant.get("type").and_then(Value::as_str))
                    .find(|label| *label != "null")
            })
            .unwrap_or("string")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::docs::source::RouterSource;
    use serde_json::json;

    struct StaticSource {
        metas: Vec<ToolMeta>,
    }

    #[async_trait::async_trait]
    impl ToolSource for StaticSource {
        fn server_name(&self) -> &str {
            "static"
        }

        async fn list_tools(&self) -> Result<Vec<ToolMeta>> {
            Ok(self.metas.clone())
        }
    }

    struct BrokenSource;

    #[async_trait::async_trait]
    impl ToolSource for BrokenSource {
        fn server_name(&self) -> &str {
            "broken"
        }

        async fn list_tools(&self) -> Result<Vec<ToolMeta>> {
            Err(Error::integration("host exposes no tool registry"))
        }
    }

    fn meta(name: &str, schema: Value) -> ToolMeta {
        ToolMeta {
            name: name.to_string(),
            title: None,
            description: Some(format!("{name} description")),
            tags: BTreeSet::new(),
            input_schema: Some(schema),
        }
    }

    #[tokio::test]
    async fn test_one_record_per_tool() {
        let router = crate::demo::build_tool_router::<()>();
        let source = RouterSource::new("demo", router);

        let records = ToolExtractor::new(false).extract(&source).await.unwrap();
        assert_eq!(records.len(), 3);

        let names: BTreeSet<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), records.len(), "tool names must be unique");
        assert!(names.contains("deploy"));
        assert!(names.contains("greet"));
        assert!(names.contains("server_status"));
    }

    #[tokio::test]
    async fn test_extraction_is_idempotent() {
        let router = crate::demo::build_tool_router::<()>();
        let source = RouterSource::new("demo", router);
        let extractor = ToolExtractor::new(false);

        let first = extractor.extract(&source).await.unwrap();
        let second = extractor.extract(&source).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_integration_failure_is_fatal() {
        let result = ToolExtractor::new(false).extract(&BrokenSource).await;
        assert!(matches!(result, Err(Error::Integration(_))));
    }

    #[tokio::test]
    async fn test_required_and_default_flags() {
        let source = StaticSource {
            metas: vec![meta(
                "deploy",
                json!({
                    "type": "object",
                    "properties": {
                        "environment": {"type": "string", "description": "Target environment"},
                        "dry_run": {"type": "boolean", "default": false}
                    },
                    "required": ["environment"]
                }),
            )],
        };

        let records = ToolExtractor::new(false).extract(&source).await.unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.name, "deploy");
        assert_eq!(record.parameters.len(), 2);

        let environment = record
            .parameters
            .iter()
            .find(|p| p.name == "environment")
            .unwrap();
        assert!(environment.required);
        assert!(environment.default.is_none());
        assert_eq!(environment.type_label, "string");
        assert_eq!(environment.description.as_deref(), Some("Target environment"));

        let dry_run = record.parameters.iter().find(|p| p.name == "dry_run").unwrap();
        assert!(!dry_run.required);
        assert_eq!(dry_run.default, Some(json!(false)));
        assert_eq!(dry_run.type_label, "boolean");
    }

    #[tokio::test]
    async fn test_missing_description_defaults_to_empty() {
        let source = StaticSource {
            metas: vec![ToolMeta {
                name: "bare".to_string(),
                title: None,
                description: None,
                tags: BTreeSet::new(),
                input_schema: None,
            }],
        };

        let records = ToolExtractor::new(false).extract(&source).await.unwrap();
        assert_eq!(records[0].description, "");
        assert!(records[0].tags.is_empty());
        assert!(records[0].parameters.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_schema_degrades_per_tool() {
        let source = StaticSource {
            metas: vec![
                meta("broken", json!("not a schema")),
                meta(
                    "fine",
                    json!({
                        "type": "object",
                        "properties": {"path": {"type": "string"}},
                        "required": ["path"]
                    }),
                ),
            ],
        };

        let records = ToolExtractor::new(false).extract(&source).await.unwrap();
        assert_eq!(records.len(), 2, "one bad schema must not fail extraction");
        assert!(records.iter().any(|r| r.name == "broken" && r.parameters.is_empty()));
        assert!(records.iter().any(|r| r.name == "fine" && r.parameters.len() == 1));
    }

    #[test]
    fn test_ref_resolution_against_defs() {
        let schema = json!({
            "type": "object",
            "properties": {
                "mode": {"$ref": "#/$defs/Mode"}
            },
            "required": ["mode"],
            "$defs": {
                "Mode": {"type": "string", "description": "Run mode"}
            }
        });

        let params = extract_parameters("refs", &schema);
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].type_label, "string");
        assert_eq!(params[0].description.as_deref(), Some("Run mode"));
    }

    #[test]
    fn test_nullable_and_unknown_type_labels() {
        let schema = json!({
            "type": "object",
            "properties": {
                "nullable_array": {"type": ["string", "null"]},
                "nullable_any_of": {"anyOf": [{"type": "integer"}, {"type": "null"}]},
                "untyped": {"description": "no type at all"}
            }
        });

        let params = extract_parameters("nullable", &schema);
        let label = |name: &str| {
            params
                .iter()
                .find(|p| p.name == name)
                .unwrap()
                .type_label
                .clone()
        };
        assert_eq!(label("nullable_array"), "string");
        assert_eq!(label("nullable_any_of"), "integer");
        assert_eq!(label("untyped"), "string");
    }

    #[test]
    fn test_parameter_serializes_type_field() {
        let descriptor = ParameterDescriptor {
            name: "environment".to_string(),
            type_label: "string".to_string(),
            required: true,
            default: None,
            description: None,
        };

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value, json!({"name": "environment", "type": "string", "required": true}));
    }
}
