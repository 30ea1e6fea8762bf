//! MCP server implementation for Ordercraft
//!
//! Exposes one wizard session to an AI assistant over the Model Context
//! Protocol. Every tool locks the same session, so all order mutations go
//! through the session's single update path one at a time.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use ordercraft_core::Session;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use tokio::{
    signal::unix::{SignalKind, signal},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;
pub mod prompts;

pub use handlers::{
    AddOnId, AddOnQuantityEdit, AddOns, ContractTerms, CustomerInfo, GoToStage, McpHandlers,
    McpResult, PlanPriceEdit, ProductSelection, SelectPlan, SelectProduct,
};

/// MCP server for Ordercraft
#[derive(Clone)]
pub struct OrderCraftMcpServer {
    session: Arc<Mutex<Session>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl OrderCraftMcpServer {
    /// Create a new server owning `session`
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.session.clone())
    }

    #[tool(
        name = "show_catalog",
        description = "List every product line with its plans and default prices, and every add-on with its price label. Use the ids shown here for product, plan and add-on parameters."
    )]
    async fn show_catalog(&self) -> McpResult {
        self.handlers().show_catalog().await
    }

    #[tool(
        name = "show_order",
        description = "Show the order as built so far and the four-stage progress tracker with the active stage marked."
    )]
    async fn show_order(&self) -> McpResult {
        self.handlers().show_order().await
    }

    #[tool(
        name = "submit_customer_info",
        description = "Submit stage 1. customer_name is required. Set pre_populate=true to record the customer's address; address_line1, city, state and zip_code are then required. Every invalid field is reported at once; on success the wizard moves to stage 2."
    )]
    async fn submit_customer_info(&self, params: Parameters<CustomerInfo>) -> McpResult {
        self.handlers().submit_customer_info(params).await
    }

    #[tool(
        name = "submit_product_selection",
        description = "Submit stage 2 with product_line_id and selected_plan_id (the plan must belong to the product line). custom_price optionally overrides the plan's default price. On success the effective price is committed to the order and the wizard moves to stage 3."
    )]
    async fn submit_product_selection(&self, params: Parameters<ProductSelection>) -> McpResult {
        self.handlers().submit_product_selection(params).await
    }

    #[tool(
        name = "submit_contract_terms",
        description = "Submit stage 3 with start_date (YYYY-MM-DD) and contract_period: \"6\", \"12\", \"24\", \"36\" or \"custom\" together with custom_duration in months (at least 1). The end date is derived as start + months - 1 day. On success the wizard moves to stage 4."
    )]
    async fn submit_contract_terms(&self, params: Parameters<ContractTerms>) -> McpResult {
        self.handlers().submit_contract_terms(params).await
    }

    #[tool(
        name = "submit_add_ons",
        description = "Replace the whole add-on selection in one call: selected_add_ons is a list of {add_on_id, quantity}. Ids must exist and appear once; quantities must not be negative. Prefer check_add_on / set_add_on_quantity for incremental edits. Rejected while the order is finalized."
    )]
    async fn submit_add_ons(&self, params: Parameters<AddOns>) -> McpResult {
        self.handlers().submit_add_ons(params).await
    }

    #[tool(
        name = "go_to_stage",
        description = "Jump directly to stage 1-4 without validation. Entering stage 4 from another stage reopens the review with the add-ons currently on the order."
    )]
    async fn go_to_stage(&self, params: Parameters<GoToStage>) -> McpResult {
        self.handlers().go_to_stage(params).await
    }

    #[tool(
        name = "next_stage",
        description = "Move one stage forward without submitting. Stays on stage 4."
    )]
    async fn next_stage(&self) -> McpResult {
        self.handlers().next_stage().await
    }

    #[tool(
        name = "previous_stage",
        description = "Move one stage back. Stays on stage 1. Nothing already committed to the order is lost."
    )]
    async fn previous_stage(&self) -> McpResult {
        self.handlers().previous_stage().await
    }

    #[tool(
        name = "select_product",
        description = "Choose the product line in stage 2 and list its plans with effective prices. Choosing a different product line clears the chosen plan and all price overrides."
    )]
    async fn select_product(&self, params: Parameters<SelectProduct>) -> McpResult {
        self.handlers().select_product(params).await
    }

    #[tool(
        name = "select_plan",
        description = "Choose a plan of the selected product line and list the plans with the choice marked."
    )]
    async fn select_plan(&self, params: Parameters<SelectPlan>) -> McpResult {
        self.handlers().select_plan(params).await
    }

    #[tool(
        name = "set_plan_price",
        description = "Override the price of a plan in the selected product line, given as text. Text that is not a non-negative number is ignored and the previous price stays. The override is committed by submit_product_selection."
    )]
    async fn set_plan_price(&self, params: Parameters<PlanPriceEdit>) -> McpResult {
        self.handlers().set_plan_price(params).await
    }

    #[tool(
        name = "preview_end_date",
        description = "Compute the contract end date for stage-3 values without submitting them. Returns no date while the start date or period is incomplete."
    )]
    async fn preview_end_date(&self, params: Parameters<ContractTerms>) -> McpResult {
        self.handlers().preview_end_date(params).await
    }

    #[tool(
        name = "check_add_on",
        description = "Tick an add-on in the review. A first tick starts at quantity 1; re-ticking restores the previous quantity. Returns the priced add-on lines and Total Monthly. Rejected while the order is finalized; call back_to_review first."
    )]
    async fn check_add_on(&self, params: Parameters<AddOnId>) -> McpResult {
        self.handlers().check_add_on(params).await
    }

    #[tool(
        name = "uncheck_add_on",
        description = "Untick an add-on in the review. Its quantity is remembered for a later re-tick. Returns the updated totals. Rejected while the order is finalized."
    )]
    async fn uncheck_add_on(&self, params: Parameters<AddOnId>) -> McpResult {
        self.handlers().uncheck_add_on(params).await
    }

    #[tool(
        name = "set_add_on_quantity",
        description = "Set an add-on quantity from text. The leading whole number is used (\"3 seats\" is 3); text without one, or a negative number, counts as 0. Returns the updated totals. Rejected while the order is finalized."
    )]
    async fn set_add_on_quantity(&self, params: Parameters<AddOnQuantityEdit>) -> McpResult {
        self.handlers().set_add_on_quantity(params).await
    }

    #[tool(
        name = "show_summary",
        description = "Show the review: customer, product and plan, contract window, priced add-ons and Total Monthly."
    )]
    async fn show_summary(&self) -> McpResult {
        self.handlers().show_summary().await
    }

    #[tool(
        name = "finalize_order",
        description = "Switch the review to the read-only finalized confirmation. Only valid on stage 4. The order itself is not changed."
    )]
    async fn finalize_order(&self) -> McpResult {
        self.handlers().finalize_order().await
    }

    #[tool(
        name = "back_to_review",
        description = "Leave the finalized confirmation and return to the editable review. Only valid on stage 4."
    )]
    async fn back_to_review(&self) -> McpResult {
        self.handlers().back_to_review().await
    }

    #[tool(
        name = "reset_order",
        description = "Discard the order and all stage state and start again at stage 1."
    )]
    async fn reset_order(&self) -> McpResult {
        self.handlers().reset_order().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for OrderCraftMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "ordercraft".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Ordercraft is a four-stage order configuration wizard holding a single order.

## Stages
1. **Customer Information**: customer name, optional address
2. **Product Selection**: product line, plan and effective price
3. **Contract Terms**: start date, period and derived end date
4. **Review & Finalize**: add-ons, totals and finalization

## Workflow
1. `show_catalog` to learn the ids
2. `submit_customer_info`, `submit_product_selection`, `submit_contract_terms` in order; each moves to the next stage on success
3. On stage 4 use `check_add_on`, `uncheck_add_on` and `set_add_on_quantity`, then `show_summary`
4. `finalize_order` once the customer confirms

## Validation
Submissions that fail validation return every invalid field with its message and change nothing. Fix the fields and submit the same stage again.

## Navigation
`next_stage`, `previous_stage` and `go_to_stage` move freely between stages; `reset_order` starts over."#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.handlers().list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: OrderCraftMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Ordercraft MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
