//! MCP server implementation

use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use tokio::runtime::Runtime;
use tracing::{debug, error, info};

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::protocol::*;
use crate::tools;

/// MCP Server
///
/// Handles Model Context Protocol requests via stdio transport, routing
/// tool calls to the dataset tool handlers.
pub struct McpServer {
    context: ToolContext,
    runtime: Runtime,
}

impl McpServer {
    /// Create a new MCP server over the given tool context
    pub fn new(context: ToolContext) -> Result<Self, ToolError> {
        let runtime = Runtime::new()?;
        Ok(Self { context, runtime })
    }

    /// Run the MCP server (stdio transport)
    ///
    /// Reads JSON-RPC requests from stdin and writes responses to stdout.
    pub fn run(&mut self) -> Result<(), ToolError> {
        info!("MCP server started");

        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin);
        let mut stdout = std::io::stdout();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            debug!("Received request: {}", line);

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    error!("Failed to parse request: {}", e);
                    let error_response =
                        JsonRpcError::new(None, -32700, format!("Parse error: {}", e));
                    let error_value = serde_json::to_value(&error_response)?;
                    self.write_response(&mut stdout, &error_value)?;
                    continue;
                }
            };

            let response = self.handle_request(request);
            self.write_response(&mut stdout, &response)?;
        }

        info!("MCP server stopped");
        Ok(())
    }

    /// Handle a JSON-RPC request
    fn handle_request(&mut self, request: JsonRpcRequest) -> Value {
        let id = request.id.clone();

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            _ => {
                let error = JsonRpcError::new(
                    id,
                    -32601,
                    format!("Method not found: {}", request.method),
                );
                serde_json::to_value(error).unwrap_or_default()
            }
        }
    }

    /// Handle initialize request
    fn handle_initialize(&self, id: Option<Value>) -> Value {
        let response = InitializeResponse {
            protocol_version: "0.1.0".to_string(),
            server_info: ServerInfo {
                name: "quarry-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: Capabilities {
                tools: ToolsCapability { supported: true },
            },
        };

        match serde_json::to_value(response) {
            Ok(result) => serde_json::to_value(JsonRpcResponse::new(id, result)).unwrap_or_default(),
            Err(e) => serde_json::to_value(JsonRpcError::new(id, -32000, e.to_string()))
                .unwrap_or_default(),
        }
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, id: Option<Value>) -> Value {
        let tools = vec![
            self.tool_definition_search(),
            self.tool_definition_fetch(),
            self.tool_definition_metadata(),
            self.tool_definition_evaluate(),
            self.tool_definition_cite(),
            self.tool_definition_decision(),
        ];

        let response = ToolListResponse { tools };
        match serde_json::to_value(response) {
            Ok(result) => serde_json::to_value(JsonRpcResponse::new(id, result)).unwrap_or_default(),
            Err(e) => serde_json::to_value(JsonRpcError::new(id, -32000, e.to_string()))
                .unwrap_or_default(),
        }
    }

    /// Handle tools/call request
    fn handle_tool_call(&mut self, id: Option<Value>, params: Value) -> Value {
        let tool_name = match params.get("name").and_then(|v| v.as_str()) {
            Some(name) => name,
            None => {
                let error = JsonRpcError::new(id, -32602, "Missing tool name".to_string());
                return serde_json::to_value(error).unwrap_or_default();
            }
        };

        let tool_params = match params.get("arguments") {
            Some(args) => args.clone(),
            None => json!({}),
        };

        let result = match tool_name {
            "quarry_search_datasets" => self.call_search_tool(tool_params),
            "quarry_fetch_doi" => self.call_fetch_tool(tool_params),
            "quarry_fetch_metadata" => self.call_metadata_tool(tool_params),
            "quarry_evaluate_dataset" => self.call_evaluate_tool(tool_params),
            "quarry_generate_citation" => self.call_cite_tool(tool_params),
            "quarry_log_decision" => self.call_decision_tool(tool_params),
            _ => Err(ToolError::ToolNotFound(tool_name.to_string())),
        };

        match result {
            Ok(value) => {
                let response = JsonRpcResponse::new(id, value);
                serde_json::to_value(response).unwrap_or_default()
            }
            Err(e) => {
                let error = JsonRpcError::new(id, e.error_code(), e.to_string());
                serde_json::to_value(error).unwrap_or_default()
            }
        }
    }

    /// Call search tool
    fn call_search_tool(&mut self, params: Value) -> Result<Value, ToolError> {
        let params: tools::SearchParams = serde_json::from_value(params)?;
        let result = self
            .runtime
            .block_on(tools::handle_search(&self.context, params))?;
        Ok(serde_json::to_value(result)?)
    }

    /// Call fetch tool
    fn call_fetch_tool(&mut self, params: Value) -> Result<Value, ToolError> {
        let params: tools::FetchParams = serde_json::from_value(params)?;
        let result = self
            .runtime
            .block_on(tools::handle_fetch(&self.context, params))?;
        Ok(serde_json::to_value(result)?)
    }

    /// Call metadata tool
    fn call_metadata_tool(&mut self, params: Value) -> Result<Value, ToolError> {
        let params: tools::MetadataParams = serde_json::from_value(params)?;
        let result = self
            .runtime
            .block_on(tools::handle_metadata(&self.context, params))?;
        Ok(serde_json::to_value(result)?)
    }

    /// Call evaluate tool
    fn call_evaluate_tool(&mut self, params: Value) -> Result<Value, ToolError> {
        let params: tools::EvaluateParams = serde_json::from_value(params)?;
        let result = self
            .runtime
            .block_on(tools::handle_evaluate(&self.context, params))?;
        Ok(serde_json::to_value(result)?)
    }

    /// Call cite tool
    fn call_cite_tool(&mut self, params: Value) -> Result<Value, ToolError> {
        let params: tools::CiteParams = serde_json::from_value(params)?;
        let result = self
            .runtime
            .block_on(tools::handle_cite(&self.context, params))?;
        Ok(serde_json::to_value(result)?)
    }

    /// Call decision tool
    fn call_decision_tool(&mut self, params: Value) -> Result<Value, ToolError> {
        let params: tools::DecisionParams = serde_json::from_value(params)?;
        let result = self
            .runtime
            .block_on(tools::handle_decision(&self.context, params))?;
        Ok(serde_json::to_value(result)?)
    }

    /// Write response to stdout
    fn write_response<W: Write>(&self, writer: &mut W, response: &Value) -> Result<(), ToolError> {
        let response_str = serde_json::to_string(response)?;
        writeln!(writer, "{}", response_str)?;
        writer.flush()?;
        debug!("Sent response: {}", response_str);
        Ok(())
    }

    // Tool definitions for tools/list response
    fn tool_definition_search(&self) -> ToolDefinition {
        ToolDefinition {
            name: "quarry_search_datasets".to_string(),
            description: "Search for open datasets based on keywords, license constraints, \
                          and date filters to find relevant research data"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "keywords": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Research keywords to search for in dataset titles, descriptions, and metadata"
                    },
                    "licenseFilter": {
                        "type": "string",
                        "description": "License constraint (e.g., CC-BY, MIT, Public Domain, Open Data Commons)"
                    },
                    "dateRange": {
                        "type": "object",
                        "properties": {
                            "startDate": {"type": "string", "description": "Earliest publication date to include (YYYY-MM-DD format)"},
                            "endDate": {"type": "string", "description": "Latest publication date to include (YYYY-MM-DD format)"}
                        },
                        "description": "Date range filter for dataset publication dates"
                    },
                    "page": {"type": "integer", "description": "Result page (1-based)", "default": 1},
                    "size": {"type": "integer", "description": "Page size"}
                },
                "required": ["keywords"]
            }),
        }
    }

    fn tool_definition_fetch(&self) -> ToolDefinition {
        ToolDefinition {
            name: "quarry_fetch_doi".to_string(),
            description: "Fetch DataCite DOI details and map them to the canonical dataset shape"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "doi": {"type": "string", "description": "DOI string or DataCite id to fetch, e.g. 10.1234/zenodo.12345"}
                },
                "required": ["doi"]
            }),
        }
    }

    fn tool_definition_metadata(&self) -> ToolDefinition {
        ToolDefinition {
            name: "quarry_fetch_metadata".to_string(),
            description: "Fetch detailed metadata for a specific dataset including authors, \
                          license, format, and technical details"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "datasetId": {"type": "string", "description": "Dataset ID (DOI) to fetch metadata for"}
                },
                "required": ["datasetId"]
            }),
        }
    }

    fn tool_definition_evaluate(&self) -> ToolDefinition {
        ToolDefinition {
            name: "quarry_evaluate_dataset".to_string(),
            description: "Evaluate dataset compatibility against user requirements including \
                          format, license, and date constraints"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "datasetId": {"type": "string", "description": "Dataset ID to evaluate"},
                    "userRequirements": {
                        "type": "object",
                        "properties": {
                            "formatConstraints": {
                                "type": "array",
                                "items": {"type": "string"},
                                "description": "Required data formats (e.g., CSV, JSON, Parquet)"
                            },
                            "licenseConstraints": {
                                "type": "array",
                                "items": {"type": "string"},
                                "description": "Acceptable licenses (e.g., CC-BY, Public Domain)"
                            },
                            "dateRange": {
                                "type": "object",
                                "properties": {
                                    "startDate": {"type": "string"},
                                    "endDate": {"type": "string"}
                                },
                                "description": "Required date range for dataset publication"
                            }
                        },
                        "description": "User requirements to evaluate against"
                    }
                },
                "required": ["datasetId"]
            }),
        }
    }

    fn tool_definition_cite(&self) -> ToolDefinition {
        ToolDefinition {
            name: "quarry_generate_citation".to_string(),
            description: "Generate academic citation for a dataset in specified format (APA or CSL)"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "datasetId": {"type": "string", "description": "Dataset ID to generate citation for"},
                    "format": {"type": "string", "enum": ["APA", "CSL"], "default": "APA", "description": "Citation format to generate"}
                },
                "required": ["datasetId"]
            }),
        }
    }

    fn tool_definition_decision(&self) -> ToolDefinition {
        ToolDefinition {
            name: "quarry_log_decision".to_string(),
            description: "Log user decision about dataset acceptance or rejection with \
                          reasoning for audit trail"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "datasetId": {"type": "string", "description": "Dataset ID being decided on"},
                    "action": {"type": "string", "enum": ["accepted", "rejected"], "description": "User decision on the dataset"},
                    "reason": {"type": "string", "description": "Reasoning for the decision"}
                },
                "required": ["datasetId", "action", "reason"]
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_engine::Catalog;

    fn server() -> McpServer {
        McpServer::new(ToolContext::offline(Catalog::reference())).unwrap()
    }

    #[test]
    fn test_initialize_response() {
        let server = server();
        let response = server.handle_initialize(Some(json!(1)));
        assert_eq!(response["result"]["serverInfo"]["name"], "quarry-mcp");
        assert_eq!(response["result"]["capabilities"]["tools"]["supported"], true);
    }

    #[test]
    fn test_tools_list_has_six_tools() {
        let server = server();
        let response = server.handle_tools_list(None);
        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 6);
        let names: Vec<&str> = tools
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert!(names.contains(&"quarry_search_datasets"));
        assert!(names.contains(&"quarry_log_decision"));
    }

    #[test]
    fn test_unknown_method_is_error() {
        let mut server = server();
        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(7)),
            method: "does/not/exist".to_string(),
            params: json!({}),
        };
        let response = server.handle_request(request);
        assert_eq!(response["error"]["code"], -32601);
    }

    #[test]
    fn test_tool_call_search_offline() {
        let mut server = server();
        let params = json!({
            "name": "quarry_search_datasets",
            "arguments": { "keywords": ["climate"] }
        });
        let response = server.handle_tool_call(Some(json!(1)), params);
        assert_eq!(response["result"]["count"], 2);
    }

    #[test]
    fn test_tool_call_unknown_tool() {
        let mut server = server();
        let params = json!({ "name": "quarry_teleport", "arguments": {} });
        let response = server.handle_tool_call(Some(json!(2)), params);
        assert_eq!(response["error"]["code"], -32601);
    }

    #[test]
    fn test_tool_call_missing_name() {
        let mut server = server();
        let response = server.handle_tool_call(Some(json!(3)), json!({}));
        assert_eq!(response["error"]["code"], -32602);
    }

    #[test]
    fn test_tool_call_evaluate_not_found_payload() {
        let mut server = server();
        let params = json!({
            "name": "quarry_evaluate_dataset",
            "arguments": { "datasetId": "ds-404" }
        });
        let response = server.handle_tool_call(Some(json!(4)), params);
        assert_eq!(response["result"]["error"], "Dataset ds-404 not found");
    }
}
