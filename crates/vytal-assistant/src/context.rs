//! Deterministic plain-text rendering of a user context.

use serde_json::Number;
use vytal_core::UserContext;

/// Placeholder rendered for missing values.
const PLACEHOLDER: &str = "N/A";

fn num_or_placeholder(value: &Option<Number>) -> String {
    value
        .as_ref()
        .map_or_else(|| PLACEHOLDER.to_string(), Number::to_string)
}

fn str_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}

/// Renders the profile as a flat text block for the model's context window.
///
/// Pure function: identical input yields byte-identical output. Biomarkers
/// render in map key order.
pub fn format_context(ctx: &UserContext) -> String {
    let mut out = format!(
        "User Profile:\n- Name: {}\n- Age: {} (Biological: {})\n- Health Score: {}/100\n\nKey Biomarkers:\n",
        str_or(&ctx.name, "User"),
        num_or_placeholder(&ctx.chronological_age),
        num_or_placeholder(&ctx.biological_age),
        num_or_placeholder(&ctx.health_score),
    );

    for (name, marker) in &ctx.biomarkers {
        out.push_str(&format!(
            "- {}: {} {} (Status: {}, Optimal: {})\n",
            name,
            num_or_placeholder(&marker.value),
            str_or(&marker.unit, PLACEHOLDER),
            str_or(&marker.status, PLACEHOLDER),
            str_or(&marker.optimal, PLACEHOLDER),
        ));
    }

    let goal_title = ctx
        .goal
        .as_ref()
        .and_then(|g| g.title.as_deref())
        .unwrap_or("Not set");
    out.push_str(&format!("\nCurrent Goal: {goal_title}\n\nActive Actions:\n"));

    for action in &ctx.actions {
        out.push_str(&format!(
            "- {} ({})\n",
            str_or(&action.name, PLACEHOLDER),
            str_or(&action.category, PLACEHOLDER),
        ));
    }

    out.push_str(&format!(
        "\nHealth Signals:\n- Needs Attention: {}\n- Watch Closely: {}\n",
        ctx.signals.attention.join(", "),
        ctx.signals.watch.join(", "),
    ));

    out
}

#[cfg(test)]
mod tests {
    use vytal_core::demo_profile;

    use super::*;

    #[test]
    fn renders_the_demo_profile() {
        let text = format_context(&demo_profile());

        assert!(text.contains("- Name: Ankur"));
        assert!(text.contains("- Age: 42 (Biological: 38)"));
        assert!(text.contains("- Health Score: 78/100"));
        assert!(text.contains("- ldl: 145 mg/dL (Status: high, Optimal: <100)"));
        assert!(text.contains("- hsCRP: 3.2 mg/L (Status: high, Optimal: <1)"));
        assert!(text.contains("Current Goal: Lower Cardiovascular Risk"));
        assert!(text.contains("- Add 10g Fiber Daily (nutrition)"));
        assert!(text.contains("- Needs Attention: Cardiovascular Inflammation - LDL + hs-CRP pattern"));
        assert!(text.contains("- Watch Closely: Pre-diabetic pattern - Glucose + HbA1c"));
    }

    #[test]
    fn output_is_byte_identical_across_calls() {
        let profile = demo_profile();
        assert_eq!(format_context(&profile), format_context(&profile));
    }

    #[test]
    fn missing_fields_render_placeholders() {
        let text = format_context(&UserContext::default());

        assert!(text.contains("- Name: User"));
        assert!(text.contains("- Age: N/A (Biological: N/A)"));
        assert!(text.contains("- Health Score: N/A/100"));
        assert!(text.contains("Current Goal: Not set"));
        assert!(text.contains("- Needs Attention: \n"));
    }
}
