//! OpenAPI document generation.
//!
//! Builds an OpenAPI 3.1.0 document from the documentation configuration
//! and the extracted tool records. The document is rebuilt per request from
//! the read-only snapshot, so it always matches what the other endpoints
//! serve.

use std::collections::BTreeSet;

use serde_json::{Value, json};

use super::extractor::{ParameterDescriptor, ToolRecord};
use crate::core::{DocsConfig, OpenApiServer};

/// Fallback server entry when neither an explicit list nor a base URL is
/// configured.
const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Build the complete OpenAPI document.
pub fn build_document(config: &DocsConfig, records: &[ToolRecord]) -> Value {
    json!({
        "openapi": config.openapi_version,
        "info": {
            "title": config.title,
            "description": config.description,
            "version": config.version,
        },
        "servers": servers(config),
        "tags": tag_definitions(records),
        "paths": paths(config, records),
        "components": {
            "schemas": {}
        }
    })
}

/// Resolve the `servers` list: explicit list first, then the configured
/// base URL, then the localhost default.
fn servers(config: &DocsConfig) -> Value {
    if !config.openapi_servers.is_empty() {
        return json!(config.openapi_servers);
    }

    let server = OpenApiServer {
        url: config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
        description: "MCP Server".to_string(),
    };
    json!([server])
}

/// Tag definitions: the sorted union of all record tags.
fn tag_definitions(records: &[ToolRecord]) -> Value {
    let all_tags: BTreeSet<&str> = records
        .iter()
        .flat_map(|record| record.tags.iter().map(String::as_str))
        .collect();

    let definitions: Vec<Value> = all_tags
        .into_iter()
        .map(|tag| {
            json!({
                "name": tag,
                "description": format!("{} related tools", capitalize(tag)),
            })
        })
        .collect();
    json!(definitions)
}

/// Build the `paths` object: the listing route plus one entry per tool.
fn paths(config: &DocsConfig, records: &[ToolRecord]) -> Value {
    let mut paths = serde_json::Map::new();

    paths.insert(
        config.api_tools_route.clone(),
        json!({
            "get": {
                "summary": "List all MCP tools",
                "description": "Get a comprehensive list of all MCP tools with their schemas",
                "operationId": "list_all_mcp_tools",
                "tags": ["MCP Tools"],
                "responses": {
                    "200": {
                        "description": "Successful response",
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "server": {"type": "string"},
                                        "total_tools": {"type": "integer"},
                                        "tools": {"type": "array", "items": {"type": "object"}}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }),
    );

    for record in records {
        let path = format!("{}/{}", config.api_tools_route, record.name);
        paths.insert(path, tool_path_entry(record));
    }

    Value::Object(paths)
}

/// Build the path entry for a single tool.
fn tool_path_entry(record: &ToolRecord) -> Value {
    let tags: Vec<&str> = if record.tags.is_empty() {
        vec!["Tools"]
    } else {
        record.tags.iter().map(String::as_str).collect()
    };

    let summary = record
        .title
        .clone()
        .unwrap_or_else(|| format!("Get {} tool info", record.name));

    let parameters: Vec<Value> = record.parameters.iter().map(parameter_entry).collect();

    json!({
        "get": {
            "summary": summary,
            "description": record.description,
            "operationId": format!("get_tool_{}", record.name),
            "tags": tags,
            "parameters": parameters,
            "responses": {
                "200": {
                    "description": "Tool information",
                    "content": {
                        "application/json": {
                            "schema": {
                                "type": "object",
                                "properties": {
                                    "name": {"type": "string"},
                                    "title": {"type": "string"},
                                    "description": {"type": "string"},
                                    "parameters": {"type": "array", "items": {"type": "object"}},
                                    "tags": {"type": "array", "items": {"type": "string"}}
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Render one parameter descriptor as an OpenAPI query parameter.
fn parameter_entry(parameter: &ParameterDescriptor) -> Value {
    let mut schema = serde_json::Map::new();
    schema.insert("type".to_string(), json!(parameter.type_label));
    if let Some(default) = &parameter.default {
        schema.insert("default".to_string(), default.clone());
    }

    let mut entry = serde_json::Map::new();
    entry.insert("name".to_string(), json!(parameter.name));
    entry.insert("in".to_string(), json!("query"));
    entry.insert("required".to_string(), json!(parameter.required));
    if let Some(description) = &parameter.description {
        entry.insert("description".to_string(), json!(description));
    }
    entry.insert("schema".to_string(), Value::Object(schema));
    Value::Object(entry)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
