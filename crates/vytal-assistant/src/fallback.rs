//! Canned reply templates used when no model integration is available.

use vytal_core::{Biomarker, ChatReply, UserContext};

use crate::topic::Topic;

fn value_or_na(marker: Option<&Biomarker>) -> String {
    marker
        .and_then(|m| m.value.as_ref())
        .map_or_else(|| "N/A".to_string(), ToString::to_string)
}

fn unit_or<'a>(marker: Option<&'a Biomarker>, default: &'a str) -> &'a str {
    marker.and_then(|m| m.unit.as_deref()).unwrap_or(default)
}

fn optimal_or<'a>(marker: Option<&'a Biomarker>, default: &'a str) -> &'a str {
    marker.and_then(|m| m.optimal.as_deref()).unwrap_or(default)
}

fn status_label(marker: Option<&Biomarker>) -> &'static str {
    match marker.and_then(|m| m.status.as_deref()) {
        Some("high") => "Elevated ⚠️",
        _ => "Borderline",
    }
}

/// Builds a canned reply for the message, classified the same way the live
/// path classifies it. Deterministic string construction; never fails.
pub fn fallback_reply(message: &str, ctx: &UserContext) -> ChatReply {
    match Topic::classify(message) {
        Topic::Cholesterol => cholesterol_reply(ctx),
        Topic::Inflammation => inflammation_reply(ctx),
        _ => general_reply(ctx),
    }
}

fn cholesterol_reply(ctx: &UserContext) -> ChatReply {
    let ldl = ctx.biomarkers.get("ldl");

    let response = format!(
        "Great question about LDL! Let me explain.

**Your LDL: {value} {unit}**
- Optimal: {optimal}
- Status: {status}

**What LDL is:**
LDL (Low-Density Lipoprotein) carries cholesterol to your artery walls. When there's too much, it builds up as plaque, narrowing arteries over time.

**Your action plan addresses this:**
• **Fiber** → Binds cholesterol, prevents absorption
• **Fish oil** → Reduces inflammation
• **Post-meal walks** → Improves lipid metabolism

**Expected improvement:**
With 70%+ consistency, you could see LDL drop to ~105-115 mg/dL in 90 days.",
        value = value_or_na(ldl),
        unit = unit_or(ldl, "mg/dL"),
        optimal = optimal_or(ldl, "<100"),
        status = status_label(ldl),
    );

    ChatReply {
        response,
        suggestions: vec![
            "How does fiber lower cholesterol?".to_string(),
            "What about medications?".to_string(),
            "Show me my full lipid panel".to_string(),
        ],
    }
}

fn inflammation_reply(ctx: &UserContext) -> ChatReply {
    let hscrp = ctx.biomarkers.get("hsCRP");

    let response = format!(
        "Let me explain inflammation and hs-CRP.

**Your hs-CRP: {value} {unit}**
- Optimal: {optimal}
- Status: {status}

**What inflammation is:**
Think of chronic inflammation as a slow-burning fire inside your body. A little is normal, but when it stays elevated, it damages tissues—especially blood vessels.

**Why this matters:**
1. Damages artery walls
2. Makes plaque unstable
3. Worsens insulin resistance
4. Accelerates biological aging

**Your plan targets this:**
• Fish oil → Strong anti-inflammatory
• Sleep optimization → Reduces inflammatory markers
• Post-meal walks → Reduces glucose spikes",
        value = value_or_na(hscrp),
        unit = unit_or(hscrp, "mg/L"),
        optimal = optimal_or(hscrp, "<1"),
        status = status_label(hscrp),
    );

    ChatReply {
        response,
        suggestions: vec![
            "How long until hs-CRP improves?".to_string(),
            "What foods cause inflammation?".to_string(),
            "Tell me about sleep and inflammation".to_string(),
        ],
    }
}

fn general_reply(ctx: &UserContext) -> ChatReply {
    let attention = if ctx.signals.attention.is_empty() {
        "Not specified".to_string()
    } else {
        ctx.signals.attention.join(", ")
    };

    let response = format!(
        "Hi {name}! 👋

I'm here to help you understand your health results. Based on your profile:

**Your Key Numbers:**
- Health Score: {score}/100
- Biological Age: {bio_age} (Calendar: {age})

**Areas to Focus:**
- {attention}

**Try asking me about:**
- Any specific biomarker (LDL, hs-CRP, glucose)
- Why certain actions are in your plan
- Food and nutrition guidance
- Your progress and projections

What would you like to explore?",
        name = ctx.name.as_deref().unwrap_or("there"),
        score = ctx
            .health_score
            .as_ref()
            .map_or_else(|| "N/A".to_string(), ToString::to_string),
        bio_age = ctx
            .biological_age
            .as_ref()
            .map_or_else(|| "N/A".to_string(), ToString::to_string),
        age = ctx
            .chronological_age
            .as_ref()
            .map_or_else(|| "N/A".to_string(), ToString::to_string),
    );

    ChatReply {
        response,
        suggestions: vec![
            "Explain my LDL result".to_string(),
            "Why is inflammation bad?".to_string(),
            "What foods should I eat?".to_string(),
        ],
    }
}
