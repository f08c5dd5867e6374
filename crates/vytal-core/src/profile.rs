//! The user health profile snapshot and the built-in demo profile.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A single biomarker reading.
///
/// Every field is optional so caller-supplied profiles with partial data
/// still deserialize; downstream formatting renders placeholders for
/// whatever is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Biomarker {
    /// Measured value, kept as a raw JSON number so `145` renders as
    /// `145` rather than `145.0`.
    #[serde(default)]
    pub value: Option<Number>,
    /// Measurement unit, e.g. "mg/dL".
    #[serde(default)]
    pub unit: Option<String>,
    /// Status label, e.g. "high" or "borderline_high".
    #[serde(default)]
    pub status: Option<String>,
    /// Optimal range, e.g. "<100".
    #[serde(default)]
    pub optimal: Option<String>,
}

/// The user's current health goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub intensity: Option<String>,
}

/// One action in the user's active plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Health signals grouped by urgency.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Signals {
    /// Patterns that need attention now.
    #[serde(default)]
    pub attention: Vec<String>,
    /// Patterns to watch closely.
    #[serde(default)]
    pub watch: Vec<String>,
}

/// Immutable snapshot of a user's biomarkers, goal, actions, and signals.
///
/// A context is passed by value into every request and never mutated or
/// persisted. Caller-supplied contexts deserialize leniently: unknown keys
/// are ignored and missing fields default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserContext {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub chronological_age: Option<Number>,
    #[serde(default)]
    pub biological_age: Option<Number>,
    /// Overall health score out of 100.
    #[serde(default)]
    pub health_score: Option<Number>,
    /// Biomarker readings keyed by marker name, e.g. "ldl".
    #[serde(default)]
    pub biomarkers: BTreeMap<String, Biomarker>,
    #[serde(default)]
    pub goal: Option<Goal>,
    #[serde(default)]
    pub actions: Vec<ActionItem>,
    #[serde(default)]
    pub signals: Signals,
}

/// Builds the demo profile used whenever the caller supplies no context.
///
/// Returns an owned value per call; there is no shared mutable profile.
pub fn demo_profile() -> UserContext {
    serde_json::from_value(serde_json::json!({
        "name": "Ankur",
        "chronological_age": 42,
        "biological_age": 38,
        "health_score": 78,
        "biomarkers": {
            "ldl": {"value": 145, "unit": "mg/dL", "status": "high", "optimal": "<100"},
            "hdl": {"value": 42, "unit": "mg/dL", "status": "borderline_low", "optimal": ">40"},
            "triglycerides": {"value": 180, "unit": "mg/dL", "status": "borderline_high", "optimal": "<150"},
            "hsCRP": {"value": 3.2, "unit": "mg/L", "status": "high", "optimal": "<1"},
            "apoB": {"value": 128, "unit": "mg/dL", "status": "high", "optimal": "<90"},
            "glucose": {"value": 108, "unit": "mg/dL", "status": "borderline_high", "optimal": "<100"},
            "hba1c": {"value": 5.9, "unit": "%", "status": "borderline_high", "optimal": "<5.7"},
            "homocysteine": {"value": 12, "unit": "µmol/L", "status": "borderline_high", "optimal": "<10"},
        },
        "goal": {
            "category": "cardiovascular",
            "title": "Lower Cardiovascular Risk",
            "intensity": "balanced",
        },
        "actions": [
            {"id": "fiber", "name": "Add 10g Fiber Daily", "category": "nutrition"},
            {"id": "walk", "name": "10-Min Post-Meal Walk", "category": "movement"},
            {"id": "fish_oil", "name": "Fish Oil Supplement", "category": "supplement"},
            {"id": "sleep", "name": "Sleep by 10:30 PM", "category": "lifestyle"},
        ],
        "signals": {
            "attention": ["Cardiovascular Inflammation - LDL + hs-CRP pattern"],
            "watch": ["Pre-diabetic pattern - Glucose + HbA1c"],
        },
    }))
    .expect("demo profile literal is a valid UserContext")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_profile_has_expected_shape() {
        let profile = demo_profile();
        assert_eq!(profile.name.as_deref(), Some("Ankur"));
        assert_eq!(profile.biomarkers.len(), 8);
        assert_eq!(profile.actions.len(), 4);
        assert_eq!(profile.signals.attention.len(), 1);
        assert_eq!(profile.signals.watch.len(), 1);

        let ldl = profile.biomarkers.get("ldl").expect("ldl present");
        assert_eq!(ldl.value, Some(Number::from(145)));
        assert_eq!(ldl.unit.as_deref(), Some("mg/dL"));
        assert_eq!(ldl.status.as_deref(), Some("high"));
        assert_eq!(ldl.optimal.as_deref(), Some("<100"));
    }

    #[test]
    fn integer_values_serialize_without_decimal_point() {
        let profile = demo_profile();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["biomarkers"]["ldl"]["value"], serde_json::json!(145));
        assert_eq!(json["biomarkers"]["hsCRP"]["value"], serde_json::json!(3.2));
    }

    #[test]
    fn partial_context_deserializes_leniently() {
        let ctx: UserContext = serde_json::from_value(serde_json::json!({
            "name": "Maya",
            "biomarkers": {"ldl": {"value": 101}},
            "unknown_field": {"nested": true},
        }))
        .unwrap();

        assert_eq!(ctx.name.as_deref(), Some("Maya"));
        assert_eq!(ctx.chronological_age, None);
        assert!(ctx.actions.is_empty());
        let ldl = ctx.biomarkers.get("ldl").unwrap();
        assert_eq!(ldl.value, Some(Number::from(101)));
        assert_eq!(ldl.unit, None);
    }

    #[test]
    fn empty_object_is_a_valid_context() {
        let ctx: UserContext = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(ctx.biomarkers.is_empty());
        assert!(ctx.goal.is_none());
    }
}
