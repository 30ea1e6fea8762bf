//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use ordercraft_core::{
    Session,
    display::{OperationStatus, PlanChoices, StageProgress},
    params::{self as core, StageInput},
};
use rmcp::{
    ErrorData as McpError, RoleServer,
    handler::server::tool::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    service::RequestContext,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::{
    errors::{to_mcp_error, to_tool_result},
    prompts::prompt_templates,
};

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types only derive JsonSchema behind the `schema` feature.
// This transparent wrapper lets rmcp deserialize them and describe them to
// clients without the core depending on rmcp.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type CustomerInfo = McpParams<core::CustomerInfoInput>;
pub type ProductSelection = McpParams<core::ProductSelectionInput>;
pub type ContractTerms = McpParams<core::ContractTermsInput>;
pub type AddOns = McpParams<core::AddOnsInput>;
pub type GoToStage = McpParams<core::GoToStage>;
pub type SelectProduct = McpParams<core::SelectProduct>;
pub type SelectPlan = McpParams<core::SelectPlan>;
pub type PlanPriceEdit = McpParams<core::PlanPriceEdit>;
pub type AddOnId = McpParams<core::AddOnId>;
pub type AddOnQuantityEdit = McpParams<core::AddOnQuantityEdit>;

pub type McpResult = Result<CallToolResult, McpError>;

fn text(body: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    session: Arc<Mutex<Session>>,
}

impl McpHandlers {
    pub fn new(session: Arc<Mutex<Session>>) -> Self {
        Self { session }
    }

    pub async fn show_catalog(&self) -> McpResult {
        debug!("show_catalog");
        let session = self.session.lock().await;
        text(session.catalog().to_string())
    }

    pub async fn show_order(&self) -> McpResult {
        debug!("show_order");
        let session = self.session.lock().await;
        text(format!(
            "{}\n## Progress\n\n{}",
            session.order(),
            StageProgress::new(session.current_stage())
        ))
    }

    pub async fn submit_customer_info(
        &self,
        Parameters(params): Parameters<CustomerInfo>,
    ) -> McpResult {
        debug!("submit_customer_info: {:?}", params);
        self.submit(1, StageInput::CustomerInfo(params.into_inner()))
            .await
    }

    pub async fn submit_product_selection(
        &self,
        Parameters(params): Parameters<ProductSelection>,
    ) -> McpResult {
        debug!("submit_product_selection: {:?}", params);
        self.submit(2, StageInput::ProductSelection(params.into_inner()))
            .await
    }

    pub async fn submit_contract_terms(
        &self,
        Parameters(params): Parameters<ContractTerms>,
    ) -> McpResult {
        debug!("submit_contract_terms: {:?}", params);
        self.submit(3, StageInput::ContractTerms(params.into_inner()))
            .await
    }

    pub async fn submit_add_ons(&self, Parameters(params): Parameters<AddOns>) -> McpResult {
        debug!("submit_add_ons: {:?}", params);
        self.submit(4, StageInput::AddOns(params.into_inner())).await
    }

    async fn submit(&self, n: i64, input: StageInput) -> McpResult {
        let mut session = self.session.lock().await;
        match session.submit_stage(n, input) {
            Ok(update) => text(format!(
                "{update}\n{}",
                StageProgress::new(session.current_stage())
            )),
            Err(e) => to_tool_result("Failed to submit stage", e),
        }
    }

    pub async fn go_to_stage(&self, Parameters(params): Parameters<GoToStage>) -> McpResult {
        debug!("go_to_stage: {:?}", params);
        let mut session = self.session.lock().await;
        let stage = session
            .go_to(params.as_ref().stage)
            .map_err(|e| to_mcp_error("Failed to change stage", &e))?;
        text(StageProgress::new(stage).to_string())
    }

    pub async fn next_stage(&self) -> McpResult {
        let stage = self.session.lock().await.advance();
        debug!("next_stage: {}", stage.as_str());
        text(StageProgress::new(stage).to_string())
    }

    pub async fn previous_stage(&self) -> McpResult {
        let stage = self.session.lock().await.retreat();
        debug!("previous_stage: {}", stage.as_str());
        text(StageProgress::new(stage).to_string())
    }

    pub async fn select_product(
        &self,
        Parameters(params): Parameters<SelectProduct>,
    ) -> McpResult {
        debug!("select_product: {:?}", params);
        let mut session = self.session.lock().await;
        if let Err(e) = session.select_product(&params.as_ref().product_line_id) {
            return to_tool_result("Failed to select product", e);
        }
        Self::plan_choices(&session)
    }

    pub async fn select_plan(&self, Parameters(params): Parameters<SelectPlan>) -> McpResult {
        debug!("select_plan: {:?}", params);
        let mut session = self.session.lock().await;
        if let Err(e) = session.select_plan(&params.as_ref().plan_id) {
            return to_tool_result("Failed to select plan", e);
        }
        Self::plan_choices(&session)
    }

    pub async fn set_plan_price(
        &self,
        Parameters(params): Parameters<PlanPriceEdit>,
    ) -> McpResult {
        debug!("set_plan_price: {:?}", params);
        let edit = params.as_ref();
        let mut session = self.session.lock().await;
        if session.set_plan_price(&edit.plan_id, &edit.price).is_none() {
            return Err(McpError::invalid_params(
                format!(
                    "Plan '{}' is not part of the selected product line",
                    edit.plan_id
                ),
                None,
            ));
        }
        Self::plan_choices(&session)
    }

    fn plan_choices(session: &Session) -> McpResult {
        match session.selected_product() {
            Some(product) => text(PlanChoices::new(product, session.plan_selector()).to_string()),
            None => text(OperationStatus::failure("No product line selected").to_string()),
        }
    }

    pub async fn preview_end_date(
        &self,
        Parameters(params): Parameters<ContractTerms>,
    ) -> McpResult {
        debug!("preview_end_date: {:?}", params);
        let session = self.session.lock().await;
        match session.preview_end_date(params.as_ref()) {
            Some(end) => text(format!("Contract would end on {end}\n")),
            None => text("No end date yet: start date or contract period is incomplete\n"),
        }
    }

    pub async fn check_add_on(&self, Parameters(params): Parameters<AddOnId>) -> McpResult {
        debug!("check_add_on: {:?}", params);
        let mut session = self.session.lock().await;
        if let Err(e) = session.check_add_on(&params.as_ref().add_on_id) {
            return to_tool_result("Failed to check add-on", e);
        }
        text(session.totals().to_string())
    }

    pub async fn uncheck_add_on(&self, Parameters(params): Parameters<AddOnId>) -> McpResult {
        debug!("uncheck_add_on: {:?}", params);
        let mut session = self.session.lock().await;
        if let Err(e) = session.uncheck_add_on(&params.as_ref().add_on_id) {
            return to_tool_result("Failed to uncheck add-on", e);
        }
        text(session.totals().to_string())
    }

    pub async fn set_add_on_quantity(
        &self,
        Parameters(params): Parameters<AddOnQuantityEdit>,
    ) -> McpResult {
        debug!("set_add_on_quantity: {:?}", params);
        let edit = params.as_ref();
        let mut session = self.session.lock().await;
        if let Err(e) = session.set_add_on_quantity(&edit.add_on_id, &edit.quantity) {
            return to_tool_result("Failed to set add-on quantity", e);
        }
        text(session.totals().to_string())
    }

    pub async fn show_summary(&self) -> McpResult {
        debug!("show_summary");
        text(self.session.lock().await.summary().to_string())
    }

    pub async fn finalize_order(&self) -> McpResult {
        debug!("finalize_order");
        let summary = self
            .session
            .lock()
            .await
            .finalize()
            .map_err(|e| to_mcp_error("Failed to finalize order", &e))?;
        text(summary.to_string())
    }

    pub async fn back_to_review(&self) -> McpResult {
        debug!("back_to_review");
        let summary = self
            .session
            .lock()
            .await
            .back_to_review()
            .map_err(|e| to_mcp_error("Failed to reopen review", &e))?;
        text(summary.to_string())
    }

    pub async fn reset_order(&self) -> McpResult {
        debug!("reset_order");
        self.session.lock().await.reset();
        text(OperationStatus::success("Order discarded; back at stage 1").to_string())
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("list_prompts");
        Ok(ListPromptsResult {
            next_cursor: None,
            prompts: Self::prompts(),
        })
    }

    fn prompts() -> Vec<Prompt> {
        prompt_templates()
            .iter()
            .map(|template| {
                Prompt::new(
                    template.name,
                    Some(template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.to_string(),
                                description: Some(arg.description.to_string()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect()
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let templates = prompt_templates();
        let template = templates
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let arguments = request.arguments.as_ref();
        let prompt_text = template
            .render(|name| {
                arguments
                    .and_then(|args| args.get(name))
                    .and_then(|value| value.as_str())
                    .map(str::to_string)
            })
            .map_err(|message| McpError::invalid_params(message, None))?;

        Ok(GetPromptResult {
            description: Some(template.description.to_string()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
