//! Tool executor - registers the finance and flight tools and dispatches calls

use std::collections::HashMap;

use log::{debug, warn};

use super::{
    CompareStocksTool, DebugApiResponseTool, FinancialsTool, GoogleFlightsTool, GraphDataTool, MarketDataTool,
    StockNewsTool, StockQuoteTool, Tool, ToolCall, ToolContext, ToolDefinition, ToolResult,
};
use crate::error::SerpkitError;

/// Name-indexed registry of tools
pub struct ToolExecutor {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolExecutor {
    /// Create executor with all eight tools
    pub fn standard() -> Self {
        let mut executor = Self::new();

        // Flights
        executor.add_tool(Box::new(GoogleFlightsTool));

        // Finance
        executor.add_tool(Box::new(StockQuoteTool));
        executor.add_tool(Box::new(MarketDataTool));
        executor.add_tool(Box::new(GraphDataTool));
        executor.add_tool(Box::new(CompareStocksTool));
        executor.add_tool(Box::new(FinancialsTool));
        executor.add_tool(Box::new(StockNewsTool));

        // Raw passthrough
        executor.add_tool(Box::new(DebugApiResponseTool));

        executor
    }

    /// Create an empty executor (for custom tool sets)
    pub fn new() -> Self {
        Self { tools: HashMap::new() }
    }

    pub fn add_tool(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// All tool definitions, sorted by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self.tools.values().map(|t| definition_of(t.as_ref())).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Execute a tool call. Never fails: problems come back as error results.
    pub async fn execute(&self, tool_call: &ToolCall, ctx: &ToolContext) -> ToolResult {
        let Some(tool) = self.tools.get(&tool_call.name) else {
            warn!("Unknown tool requested: {}", tool_call.name);
            return ToolResult::error_message(SerpkitError::UnknownTool(tool_call.name.clone()).to_string());
        };

        debug!("Executing tool {} (call {})", tool_call.name, tool_call.id);
        match tool.execute(tool_call.input.clone(), ctx).await {
            Ok(result) => result,
            Err(e) => ToolResult::error_message(format!("Tool error: {}", e)),
        }
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Registered tool names, sorted
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

fn definition_of(tool: &dyn Tool) -> ToolDefinition {
    ToolDefinition {
        name: tool.name().to_string(),
        description: tool.description().to_string(),
        input_schema: tool.input_schema(),
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::standard()
    }
}
