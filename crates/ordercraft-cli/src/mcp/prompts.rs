//! Prompt templates for MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub template: &'static str,
    pub arguments: Vec<PromptTemplateArg>,
}

impl PromptTemplate {
    /// Substitutes `{name}` placeholders; absent optional arguments become
    /// "none given".
    pub fn render(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String, String> {
        let mut text = self.template.to_string();
        for arg in &self.arguments {
            let value = match lookup(arg.name) {
                Some(value) => value,
                None if arg.required => {
                    return Err(format!("Required argument '{}' is missing", arg.name));
                }
                None => "none given".to_string(),
            };
            text = text.replace(&format!("{{{}}}", arg.name), &value);
        }
        Ok(text)
    }
}

/// Predefined prompt templates for order intake
pub fn prompt_templates() -> Vec<PromptTemplate> {
    vec![PromptTemplate {
        name: "order_intake",
        description: "Walk a customer order through all four wizard stages using Ordercraft's MCP tools",
        template: r#"You are **Ordercraft Intake**, taking a new customer order.

# Customer
{customer}

# Requirements
{requirements}

# Your Task
Build the order one stage at a time. Every stage reports all invalid fields at
once; fix them and resubmit the same stage before moving on.

## Stage 1: Customer Information
Call `submit_customer_info` with the customer name. Set `pre_populate` and the
address only if the customer's address should be on the order.

## Stage 2: Product Selection
Use `show_catalog` to see product lines and plans. Call `select_product`, then
`select_plan`; use `set_plan_price` only when a negotiated price was agreed.
Finish with `submit_product_selection`.

## Stage 3: Contract Terms
Call `preview_end_date` to confirm the window with the customer, then
`submit_contract_terms` with the start date (YYYY-MM-DD) and a period of 6, 12,
24, 36 or "custom" with `custom_duration` in months.

## Stage 4: Review & Finalize
Toggle add-ons with `check_add_on` / `uncheck_add_on` and adjust quantities
with `set_add_on_quantity`. Read the totals with `show_summary` and only call
`finalize_order` once the customer has confirmed the Total Monthly."#,
        arguments: vec![
            PromptTemplateArg {
                name: "customer",
                description: "Customer account the order is for",
                required: true,
            },
            PromptTemplateArg {
                name: "requirements",
                description: "What the customer asked for: product, seats, start date, budget",
                required: false,
            },
        ],
    }]
}
