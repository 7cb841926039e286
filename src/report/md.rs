use crate::types::plan::TrainingPlan;
use crate::types::report::HandicapReport;

pub fn report_to_markdown(report: &HandicapReport) -> String {
    let mut output = String::new();
    output.push_str("# Handicap Report\n\n");
    output.push_str(&format!(
        "Handicap index: {:.1} ({})\n",
        report.handicap_index,
        report.method.label()
    ));
    output.push_str(&format!("Rounds considered: {}\n\n", report.round_count));

    output.push_str("## Rounds\n\n");
    if report.rounds.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for round in &report.rounds {
            output.push_str(&format!(
                "- {}: score {}, rating {:.1}, slope {}, differential {:.2}\n",
                round.course_name,
                round.score,
                round.course_rating,
                round.slope_rating,
                round.differential
            ));
        }
        output.push('\n');
    }

    output.push_str(&report.summary());
    output.push('\n');
    output
}

pub fn plan_to_markdown(plan: &TrainingPlan) -> String {
    let mut output = String::new();
    output.push_str("# Training Plan\n\n");
    output.push_str(&format!(
        "From {:.1} to {:.1} over {} month{}\n\n",
        plan.current_handicap,
        plan.target_handicap,
        plan.timeline_months,
        if plan.timeline_months == 1 { "" } else { "s" }
    ));

    output.push_str("## Milestones\n\n");
    for milestone in &plan.milestones {
        output.push_str(&format!(
            "- month {}: target index {:.1}, focus on {}\n",
            milestone.month,
            milestone.target_index,
            milestone.focus.label()
        ));
    }

    output
}
