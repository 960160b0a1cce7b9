// ABOUTME: Implements McpServer - dispatches JSON-RPC methods to the tool
// ABOUTME: dispatcher and serves newline-delimited JSON over stdio.

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::{
    ContentBlock, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, InitializeResult,
    METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION, RpcRequest, RpcResponse, ServerInfo,
    ToolCallParams, ToolCallResult, ToolInfo, ToolsListResult,
};
use crate::dispatch::Dispatcher;
use crate::error::ServeError;

/// An MCP server front end over a [`Dispatcher`].
///
/// Every tool failure is carried inside a normal `tools/call` result;
/// JSON-RPC errors are reserved for protocol-level problems (bad JSON,
/// unknown methods, malformed params). A single bad request never stops
/// the serve loop.
pub struct McpServer {
    dispatcher: Dispatcher,
    info: ServerInfo,
}

impl McpServer {
    /// Create a server with the given identity.
    pub fn new(dispatcher: Dispatcher, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            dispatcher,
            info: ServerInfo {
                name: name.into(),
                version: version.into(),
            },
        }
    }

    /// Handle one raw input line. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<RpcResponse> {
        match serde_json::from_str::<RpcRequest>(line) {
            Ok(request) => self.handle(request).await,
            Err(e) => Some(RpcResponse::error(
                Value::Null,
                PARSE_ERROR,
                format!("parse error: {}", e),
            )),
        }
    }

    /// Handle one request. Returns `None` for notifications.
    pub async fn handle(&self, request: RpcRequest) -> Option<RpcResponse> {
        let id = match request.id {
            Some(id) => id,
            // Notifications get no response, whatever the method.
            None => return None,
        };

        if request.jsonrpc != "2.0" {
            return Some(RpcResponse::error(
                id,
                INVALID_REQUEST,
                format!("unsupported jsonrpc version '{}'", request.jsonrpc),
            ));
        }

        let response = match request.method.as_str() {
            "initialize" => self.initialize(id),
            "tools/list" => self.list_tools(id).await,
            "tools/call" => self.call_tool(id, request.params).await,
            other => RpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("method '{}' not found", other),
            ),
        };
        Some(response)
    }

    fn initialize(&self, id: Value) -> RpcResponse {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: serde_json::json!({"tools": {}}),
            server_info: self.info.clone(),
        };
        match serde_json::to_value(result) {
            Ok(value) => RpcResponse::success(id, value),
            Err(e) => RpcResponse::error(id, INTERNAL_ERROR, e.to_string()),
        }
    }

    async fn list_tools(&self, id: Value) -> RpcResponse {
        let tools = self
            .dispatcher
            .list_tools()
            .await
            .into_iter()
            .map(|listing| ToolInfo {
                name: listing.name,
                description: listing.description,
                input_schema: listing.schema.to_json_schema(),
            })
            .collect();
        match serde_json::to_value(ToolsListResult { tools }) {
            Ok(value) => RpcResponse::success(id, value),
            Err(e) => RpcResponse::error(id, INTERNAL_ERROR, e.to_string()),
        }
    }

    async fn call_tool(&self, id: Value, params: Option<Value>) -> RpcResponse {
        let params: ToolCallParams =
            match serde_json::from_value(params.unwrap_or(Value::Null)) {
                Ok(params) => params,
                Err(e) => {
                    return RpcResponse::error(
                        id,
                        INVALID_PARAMS,
                        format!("invalid tools/call params: {}", e),
                    );
                }
            };

        let arguments = params.arguments.unwrap_or(Value::Null);
        let envelope = self.dispatcher.invoke(&params.name, arguments).await;

        // The envelope JSON is the compatibility surface; it travels
        // verbatim inside a text content block.
        let text = match serde_json::to_string(&envelope) {
            Ok(text) => text,
            Err(e) => return RpcResponse::error(id, INTERNAL_ERROR, e.to_string()),
        };
        let result = ToolCallResult {
            content: vec![ContentBlock::Text { text }],
            is_error: !envelope.success,
        };
        match serde_json::to_value(result) {
            Ok(value) => RpcResponse::success(id, value),
            Err(e) => RpcResponse::error(id, INTERNAL_ERROR, e.to_string()),
        }
    }

    /// Serve newline-delimited JSON-RPC until the reader is exhausted.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<(), ServeError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                let json = serde_json::to_string(&response)?;
                writer.write_all(json.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }
        Ok(())
    }

    /// Serve on the process's stdin and stdout.
    pub async fn serve_stdio(&self) -> Result<(), ServeError> {
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }
}
