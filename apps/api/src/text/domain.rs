//! Domain classifier: picks the professional domain whose keywords a text mentions most.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    #[default]
    Tech,
    Medical,
    Business,
    Finance,
}

impl Domain {
    /// Classification order. Earlier domains win ties.
    pub const ALL: [Domain; 4] = [
        Domain::Tech,
        Domain::Medical,
        Domain::Business,
        Domain::Finance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Tech => "tech",
            Domain::Medical => "medical",
            Domain::Business => "business",
            Domain::Finance => "finance",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Domain::Tech => &[
                "software", "developer", "engineer", "programmer", "coding", "programming",
                "application", "system", "database", "server", "api", "framework", "library",
                "frontend", "backend", "fullstack", "devops", "cloud", "mobile", "web",
            ],
            Domain::Medical => &[
                "patient", "clinical", "medical", "healthcare", "hospital", "physician", "nurse",
                "doctor", "surgery", "diagnosis", "treatment", "care", "health", "medicine",
                "therapeutic", "clinic", "emergency", "pharmacy",
            ],
            Domain::Business => &[
                "sales", "marketing", "revenue", "customer", "client", "market", "brand",
                "campaign", "strategy", "business", "commercial", "account", "partner", "vendor",
                "proposal", "negotiation", "pipeline", "quota",
            ],
            Domain::Finance => &[
                "financial", "accounting", "audit", "tax", "budget", "ledger", "payroll",
                "invoice", "revenue", "expense", "profit", "loss", "balance sheet",
                "income statement", "cash flow", "investment", "portfolio", "asset",
            ],
        }
    }
}

/// Number of a domain's keywords present in the (already lowercased) text.
/// Each keyword counts once regardless of how often it occurs.
fn keyword_hits(domain: Domain, text_lower: &str) -> usize {
    domain
        .keywords()
        .iter()
        .filter(|kw| text_lower.contains(*kw))
        .count()
}

/// Detects the primary domain of a resume or job description.
///
/// Returns `Domain::Tech` when nothing matches; otherwise the domain with the
/// most keyword hits, earliest in `Domain::ALL` on a tie.
pub fn detect_domain(text: &str) -> Domain {
    let text_lower = text.to_lowercase();
    let mut best = Domain::Tech;
    let mut best_hits = 0usize;

    for domain in Domain::ALL {
        let hits = keyword_hits(domain, &text_lower);
        if hits > best_hits {
            best = domain;
            best_hits = hits;
        }
    }

    best
}
