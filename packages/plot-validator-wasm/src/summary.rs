use std::collections::HashMap;

use crate::models::{PerPlotResult, Rule, RuleCount, ValidationSummary};

const MAX_COMMON_FAILURES: usize = 5;

/// Roll per-plot results up into the "N of M plots valid" view, with the
/// rules that failed most often across the upload.
pub fn summarize(results: &[PerPlotResult]) -> ValidationSummary {
    let valid_plots = results.iter().filter(|result| result.is_valid).count();

    let mut counts: HashMap<Rule, usize> = HashMap::new();
    for step in results
        .iter()
        .flat_map(|result| result.steps.iter())
        .filter(|step| !step.passed)
    {
        *counts.entry(step.rule).or_default() += 1;
    }

    let mut common_failures: Vec<RuleCount> = counts
        .into_iter()
        .map(|(rule, count)| RuleCount { rule, count })
        .collect();
    common_failures.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.rule.as_str().cmp(b.rule.as_str()))
    });
    common_failures.truncate(MAX_COMMON_FAILURES);

    ValidationSummary {
        total_plots: results.len(),
        valid_plots,
        invalid_plots: results.len() - valid_plots,
        common_failures,
        invalid_plot_ids: results
            .iter()
            .filter(|result| !result.is_valid)
            .map(|result| result.plot_id.clone())
            .collect(),
    }
}
