use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use std::collections::HashMap;

use greybot_toolcore::{
    ArgumentPolicy, DispatchError, ParameterDefinition, Tool, ToolContext, ToolParameters,
};

use crate::greynoise::{endpoint, fetch_json};

/// One space-separated term of a GNQL expression
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Emitted as-is, e.g. `metadata.tor:true`
    Fixed(&'static str),
    /// `field:<argument value>`
    Field {
        field: &'static str,
        argument: &'static str,
    },
    /// The argument value is the whole term
    Argument(&'static str),
}

impl Clause {
    pub fn field(field: &'static str, argument: &'static str) -> Self {
        Self::Field { field, argument }
    }
}

/// A GNQL search exposed to the model as a callable function.
///
/// Argument values are substituted into the expression verbatim; only the URL layer
/// encodes them.
#[derive(Debug, Clone)]
pub struct GnqlTool {
    name: &'static str,
    description: &'static str,
    arguments: Vec<(&'static str, String)>,
    clauses: Vec<Clause>,
    size: u32,
}

impl GnqlTool {
    pub fn new(name: &'static str, description: &'static str, size: u32) -> Self {
        Self {
            name,
            description,
            arguments: Vec::new(),
            clauses: Vec::new(),
            size,
        }
    }

    /// Declare a required string argument
    pub fn argument(mut self, name: &'static str, description: impl Into<String>) -> Self {
        self.arguments.push((name, description.into()));
        self
    }

    pub fn clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Result-size cap sent with the query
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Render the GNQL expression for these arguments
    pub fn expression(&self, params: &ToolParameters, policy: ArgumentPolicy) -> Result<String, DispatchError> {
        let mut terms = Vec::with_capacity(self.clauses.len());
        for clause in &self.clauses {
            let term = match clause {
                Clause::Fixed(term) => term.to_string(),
                Clause::Field { field, argument } => {
                    format!("{}:{}", field, params.resolve(self.name, argument, policy)?)
                }
                Clause::Argument(argument) => params.resolve(self.name, argument, policy)?,
            };
            terms.push(term);
        }
        Ok(terms.join(" "))
    }

    /// Full request URL for these arguments
    pub fn request_url(&self, base: &str, params: &ToolParameters, policy: ArgumentPolicy) -> Result<Url, DispatchError> {
        let expression = self.expression(params, policy)?;
        let mut url = endpoint(base, &["v2", "experimental", "gnql"])?;
        url.query_pairs_mut()
            .append_pair("query", &expression)
            .append_pair("size", &self.size.to_string());
        Ok(url)
    }
}

#[async_trait]
impl Tool for GnqlTool {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        self.arguments
            .iter()
            .map(|(name, description)| {
                (
                    name.to_string(),
                    ParameterDefinition {
                        param_type: "string".to_string(),
                        description: description.clone(),
                        required: true,
                    },
                )
            })
            .collect()
    }

    async fn execute(&self, params: ToolParameters, context: &ToolContext) -> Result<Value, DispatchError> {
        let url = self.request_url(&context.search_api_url, &params, context.argument_policy)?;
        fetch_json(context, self.name, url).await
    }
}
