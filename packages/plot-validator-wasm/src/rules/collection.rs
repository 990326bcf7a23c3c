use rayon::prelude::*;
use serde_json::Value;

use super::feature::check_feature;
use super::RuleContext;
use crate::console_log;
use crate::diagnostics::Diagnostics;
use crate::geojson_features::{collection_features, farmer_name, plot_id};
use crate::models::{PerPlotResult, Rule, ValidationResult};
use crate::options::ValidationOptions;

fn validate_feature(options: &ValidationOptions, feature: &Value, index: usize) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    let mut ctx = RuleContext::for_feature(options, &mut diagnostics, index);
    check_feature(&mut ctx, feature);
    diagnostics
}

/// Aggregate validation: one trace for the whole document. A root that is
/// not a non-empty FeatureCollection records exactly one failing step.
pub fn validate_collection(document: &Value, options: &ValidationOptions) -> ValidationResult {
    let mut diagnostics = Diagnostics::new();

    let Some(root) = document.as_object() else {
        diagnostics.fail(Rule::RootType, "GeoJSON root must be an object");
        return diagnostics.into_result();
    };

    match root.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => {}
        Some(other) => {
            diagnostics.fail(
                Rule::RootType,
                format!("root type must be 'FeatureCollection', found '{}'", other),
            );
            return diagnostics.into_result();
        }
        None => {
            diagnostics.fail(Rule::RootType, "root type must be 'FeatureCollection'");
            return diagnostics.into_result();
        }
    }

    let features = match root.get("features").and_then(Value::as_array) {
        Some(features) if !features.is_empty() => features,
        Some(_) => {
            diagnostics.fail(Rule::FeaturesArray, "features array must not be empty");
            return diagnostics.into_result();
        }
        None => {
            diagnostics.fail(Rule::FeaturesArray, "features must be an array");
            return diagnostics.into_result();
        }
    };

    diagnostics.pass(Rule::RootType, "root type is FeatureCollection");
    diagnostics.pass(
        Rule::FeaturesArray,
        format!("found {} feature(s)", features.len()),
    );

    // Features are independent; traces are joined back in input order
    let per_feature: Vec<Diagnostics> = features
        .par_iter()
        .enumerate()
        .map(|(index, feature)| validate_feature(options, feature, index))
        .collect();
    for feature_diagnostics in per_feature {
        diagnostics.append(feature_diagnostics);
    }

    console_log!(
        "Validated {} feature(s): {} step(s), {} error(s)",
        features.len(),
        diagnostics.step_count(),
        diagnostics.error_count()
    );

    diagnostics.into_result()
}

/// Per-plot validation: one independent result per feature. A non-conforming
/// root yields no results at all.
pub fn validate_each_feature(document: &Value, options: &ValidationOptions) -> Vec<PerPlotResult> {
    let Some(features) = collection_features(document) else {
        console_log!("Per-plot validation skipped: root is not a non-empty FeatureCollection");
        return Vec::new();
    };

    features
        .par_iter()
        .enumerate()
        .map(|(index, feature)| {
            validate_feature(options, feature, index)
                .into_plot_result(plot_id(feature, index), farmer_name(feature))
        })
        .collect()
}
