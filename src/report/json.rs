use crate::types::plan::TrainingPlan;
use crate::types::report::HandicapReport;

pub fn report_to_json(report: &HandicapReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn plan_to_json(plan: &TrainingPlan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(plan)
}
