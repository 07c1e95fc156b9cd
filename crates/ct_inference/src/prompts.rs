//! Fixed prompt text used by the conflict agent.

pub const CONFLICT_TRACKER_NAME: &str = "ConflictTracker";

pub const CONFLICT_TRACKER_INSTRUCTIONS: &str = "You are ConflictTracker AI, an expert in summarizing and explaining global conflict and unrest data. Respond in clear and accurate detail with facts and figures.";

const TOPIC_REPORT_TEMPLATE: &str = "
You are a geopolitical analyst.
Provide a detailed, factual, and updated report on the current conflict or situation related to: {topic}.
Include background, causes, key players, recent events, casualties (if any), and international reactions.
";

/// Prompt asking for a full situation report on `topic`.
pub fn topic_report_prompt(topic: &str) -> String {
    TOPIC_REPORT_TEMPLATE.replace("{topic}", topic)
}
