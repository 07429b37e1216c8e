const MAX_SUMMARY_BULLETS: usize = 6;
const MAX_DECISIONS: usize = 3;
const MAX_ACTION_ITEMS: usize = 3;

const DECISION_KEYWORDS: [&str; 5] = ["decide", "agreement", "approve", "plan", "confirm"];

pub const NO_DECISIONS_PLACEHOLDER: &str = "- [No clear decisions extracted.]";
pub const NO_ACTIONS_PLACEHOLDER: &str = "- [No specific action items detected.]";

/// A raw model summary reshaped into the three labeled report sections.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredSummary {
    /// Full three-section text: Summary, Key Decisions, Action Items.
    pub summary: String,
    pub decisions: String,
    pub actions: String,
}

/// Converts free prose into a bulleted digest plus decision and action item
/// candidates picked by keyword heuristics.
///
/// The heuristics operate on the already-compressed summary, not the full
/// transcript, so recall is limited to what the summary retained.
pub fn structure_summary(raw: &str) -> StructuredSummary {
    // Standalone " - " separators and en-dashes act as sentence breaks.
    let normalized = raw.replace(" - ", ". ").replace('\u{2013}', "-");
    let sentences: Vec<&str> = normalized.split(". ").collect();

    let bullets: Vec<String> = sentences
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(as_bullet)
        .take(MAX_SUMMARY_BULLETS)
        .collect();

    let bullet_summary = if bullets.is_empty() {
        format!("- {}", raw)
    } else {
        bullets.join("\n")
    };

    let decisions = select_sentences(&sentences, MAX_DECISIONS, |s| {
        DECISION_KEYWORDS.iter().any(|k| s.contains(k))
    });
    let actions = select_sentences(&sentences, MAX_ACTION_ITEMS, |s| {
        s.contains("should") || s.contains("need to")
    });

    let decisions = if decisions.is_empty() {
        NO_DECISIONS_PLACEHOLDER.to_string()
    } else {
        decisions.join("\n")
    };
    let actions = if actions.is_empty() {
        NO_ACTIONS_PLACEHOLDER.to_string()
    } else {
        actions.join("\n")
    };

    let summary = format!(
        "### Summary:\n{}\n\n### Key Decisions:\n{}\n\n### Action Items:\n{}",
        bullet_summary, decisions, actions
    );

    StructuredSummary {
        summary,
        decisions,
        actions,
    }
}

fn select_sentences<F>(sentences: &[&str], limit: usize, matches: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    sentences
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter(|s| matches(&s.to_lowercase()))
        .map(as_bullet)
        .take(limit)
        .collect()
}

fn as_bullet(sentence: &str) -> String {
    format!("- {}", sentence.trim().trim_end_matches('.'))
}
