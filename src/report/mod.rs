pub mod json;
pub mod md;

use crate::error::FairwayError;
use crate::types::plan::TrainingPlan;
use crate::types::report::HandicapReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &HandicapReport, format: OutputFormat) -> Result<String, FairwayError> {
    match format {
        OutputFormat::Json => json::report_to_json(report).map_err(FairwayError::Json),
        OutputFormat::Md => Ok(md::report_to_markdown(report)),
    }
}

pub fn render_plan(plan: &TrainingPlan, format: OutputFormat) -> Result<String, FairwayError> {
    match format {
        OutputFormat::Json => json::plan_to_json(plan).map_err(FairwayError::Json),
        OutputFormat::Md => Ok(md::plan_to_markdown(plan)),
    }
}
