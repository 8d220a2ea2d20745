// ── Scripted assistant ──
//
// An ordered rule table: first rule whose keyword set matches the
// lowercased input wins, with a generic fallback at the end. Responses
// interpolate live figures from the campaign snapshot but perform no
// inference of any kind.

use crate::fmt;
use crate::kpi::{self, KpiSummary};
use crate::model::Campaign;

/// A reply plus follow-up prompts the UI may offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
    pub suggestions: Vec<String>,
}

struct Rule {
    keywords: &'static [&'static str],
    respond: fn(&[Campaign]) -> String,
    suggestions: &'static [&'static str],
}

/// The scripted campaign assistant.
pub struct Assistant {
    rules: Vec<Rule>,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}

impl Assistant {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Rule {
                    keywords: &["performance", "top"],
                    respond: performance_response,
                    suggestions: &[
                        "How can I improve ROI?",
                        "Analyze budget allocation",
                        "Suggest campaign optimizations",
                    ],
                },
                Rule {
                    keywords: &["roi", "improve"],
                    respond: roi_response,
                    suggestions: &[
                        "Show me top performing campaigns",
                        "Analyze budget allocation",
                    ],
                },
                Rule {
                    keywords: &["budget", "allocation"],
                    respond: budget_response,
                    suggestions: &[
                        "Show me top performing campaigns",
                        "Suggest campaign optimizations",
                    ],
                },
                Rule {
                    keywords: &["optimize", "suggestion"],
                    respond: optimize_response,
                    suggestions: &[
                        "Show me top performing campaigns",
                        "Analyze budget allocation",
                    ],
                },
            ],
        }
    }

    /// The canned opening message shown before any user input.
    pub fn greeting(&self) -> AssistantReply {
        AssistantReply {
            text: "Hi! I can help you analyze campaign performance, budgets, \
                   and optimization opportunities. What would you like to know?"
                .into(),
            suggestions: vec![
                "Show me top performing campaigns".into(),
                "How can I improve ROI?".into(),
                "Analyze budget allocation".into(),
                "Suggest campaign optimizations".into(),
            ],
        }
    }

    /// Produce a reply for `input` against the current campaign set.
    pub fn reply(&self, input: &str, campaigns: &[Campaign]) -> AssistantReply {
        let input = input.to_lowercase();
        for rule in &self.rules {
            if rule.keywords.iter().any(|kw| input.contains(kw)) {
                return AssistantReply {
                    text: (rule.respond)(campaigns),
                    suggestions: rule.suggestions.iter().map(|&s| s.to_owned()).collect(),
                };
            }
        }
        AssistantReply {
            text: "I can help with campaign analysis, performance, budget \
                   allocation, and optimization ideas. Which of those would \
                   you like to explore?"
                .into(),
            suggestions: vec![
                "Show me top performing campaigns".into(),
                "How can I improve ROI?".into(),
                "Analyze budget allocation".into(),
            ],
        }
    }
}

// ── Response builders ────────────────────────────────────────────────

fn performance_response(campaigns: &[Campaign]) -> String {
    let top = kpi::top_by_roi(campaigns, 3);
    if top.is_empty() {
        return "There are no campaigns to analyze yet.".into();
    }
    let mut lines = vec!["Your top campaigns by ROI:".to_owned(), String::new()];
    for (rank, campaign) in top.iter().enumerate() {
        lines.push(format!(
            "{}. {} - {} ROI, {} spend",
            rank + 1,
            campaign.name,
            fmt::roi(campaign.roi),
            fmt::currency(campaign.budget),
        ));
    }
    lines.join("\n")
}

fn roi_response(campaigns: &[Campaign]) -> String {
    let summary = KpiSummary::from_campaigns(campaigns);
    format!(
        "Your portfolio averages {} ROI. Three levers to raise it:\n\n\
         - Audience refinement: narrow digital targeting to the segments \
         that already convert\n\
         - Budget reallocation: shift spend from the lowest-ROI channel \
         into the highest\n\
         - Timing: concentrate flights in the weeks that historically \
         perform best",
        fmt::roi(summary.average_roi),
    )
}

fn budget_response(campaigns: &[Campaign]) -> String {
    let summary = KpiSummary::from_campaigns(campaigns);
    let mut lines = vec![format!(
        "Total budget under management: {}",
        fmt::currency(summary.total_spend)
    )];
    let ranked = kpi::top_by_roi(campaigns, campaigns.len());
    if let Some(best) = ranked.first() {
        lines.push(format!(
            "Best performing: {} ({} ROI) - consider increasing its share",
            best.name,
            fmt::roi(best.roi)
        ));
    }
    if let Some(worst) = ranked.last() {
        if ranked.len() > 1 {
            lines.push(format!(
                "Underperforming: {} ({} ROI) - consider reducing or pausing",
                worst.name,
                fmt::roi(worst.roi)
            ));
        }
    }
    lines.join("\n")
}

fn optimize_response(campaigns: &[Campaign]) -> String {
    let ranked = kpi::top_by_roi(campaigns, campaigns.len());
    let mut lines = vec!["Optimization ideas:".to_owned(), String::new()];
    if let Some(best) = ranked.first() {
        lines.push(format!("1. Scale up {} - it leads on ROI", best.name));
    }
    if let Some(worst) = ranked.last() {
        if ranked.len() > 1 {
            lines.push(format!("2. Pause or rework {} - it trails the portfolio", worst.name));
        }
    }
    lines.push("3. Test creative variants on your mid-tier campaigns".into());
    lines.push("4. Re-check audience overlap across channels".into());
    lines.join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::{CampaignStatus, MediaType};

    fn campaign(name: &str, roi: f64, budget: f64) -> Campaign {
        Campaign {
            id: name.into(),
            name: name.into(),
            media_type: MediaType::Digital,
            channel: "ch".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
            status: CampaignStatus::Active,
            budget,
            impressions: 0,
            clicks: 0,
            reach: 0,
            roi,
        }
    }

    fn sample() -> Vec<Campaign> {
        vec![
            campaign("Summer Fashion Campaign", 3.2, 50_000.0),
            campaign("Social Media Blitz", 5.2, 35_000.0),
            campaign("Radio Morning Drive", 2.1, 25_000.0),
        ]
    }

    #[test]
    fn performance_keywords_rank_top_campaigns() {
        let assistant = Assistant::new();
        let reply = assistant.reply("Show me top performing campaigns", &sample());
        assert!(reply.text.contains("1. Social Media Blitz - 5.2x ROI"));
        assert!(reply.text.contains("$35,000"));
        assert!(!reply.suggestions.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let assistant = Assistant::new();
        let reply = assistant.reply("TOP campaigns please", &sample());
        assert!(reply.text.contains("top campaigns by ROI"));
    }

    #[test]
    fn first_matching_rule_wins() {
        // "top" (rule 1) appears before "budget" (rule 3) in the table.
        let assistant = Assistant::new();
        let reply = assistant.reply("top budget", &sample());
        assert!(reply.text.starts_with("Your top campaigns"));
    }

    #[test]
    fn budget_keywords_report_totals() {
        let assistant = Assistant::new();
        let reply = assistant.reply("analyze my budget allocation", &sample());
        assert!(reply.text.contains("$110,000"));
        assert!(reply.text.contains("Social Media Blitz"));
        assert!(reply.text.contains("Radio Morning Drive"));
    }

    #[test]
    fn unmatched_input_falls_through() {
        let assistant = Assistant::new();
        let reply = assistant.reply("what's the weather like?", &sample());
        assert!(reply.text.contains("Which of those"));
    }

    #[test]
    fn empty_campaign_set_is_handled() {
        let assistant = Assistant::new();
        let reply = assistant.reply("top campaigns", &[]);
        assert!(reply.text.contains("no campaigns"));
    }
}
