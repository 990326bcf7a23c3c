//! The rulebook, leaf-first: coordinate, ring, polygon, geometry, feature,
//! collection. Structural gates short-circuit descent into child rules;
//! quality heuristics never do.

pub mod collection;
pub mod coordinate;
pub mod feature;
pub mod geometry;
pub mod polygon;
pub mod ring;

use crate::diagnostics::Diagnostics;
use crate::models::Rule;
use crate::options::ValidationOptions;

/// Everything a rule below the collection level needs: the options, where
/// in the document it is, and the trace to record into.
pub struct RuleContext<'a> {
    pub options: &'a ValidationOptions,
    pub diagnostics: &'a mut Diagnostics,
    feature_label: String,
}

impl<'a> RuleContext<'a> {
    pub fn for_feature(
        options: &'a ValidationOptions,
        diagnostics: &'a mut Diagnostics,
        feature_index: usize,
    ) -> Self {
        Self {
            options,
            diagnostics,
            feature_label: format!("Feature {}", feature_index + 1),
        }
    }

    pub fn pass(&mut self, rule: Rule, message: impl AsRef<str>) {
        let message = format!("{}: {}", self.feature_label, message.as_ref());
        self.diagnostics.pass(rule, message);
    }

    pub fn fail(&mut self, rule: Rule, message: impl AsRef<str>) {
        let message = format!("{}: {}", self.feature_label, message.as_ref());
        self.diagnostics.fail(rule, message);
    }
}
