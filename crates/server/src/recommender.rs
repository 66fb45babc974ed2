//! Skill suggestions from a curated occupation/skill matrix.
//!
//! Maps a job title to a shortlist of skills: exact match on the normalised
//! title first, then the row with the highest token overlap. Rank `i` in the
//! shortlist gets score `100 - 5*i`, mirroring how suggestion scores are
//! stored and nudged by votes elsewhere (0..=100).

/// Occupation rows: normalised job title -> ordered skill shortlist.
const OCCUPATION_MATRIX: &[(&str, &[&str])] = &[
    (
        "software engineer",
        &[
            "Rust",
            "Code Review",
            "Distributed Systems",
            "SQL",
            "CI/CD Pipelines",
            "Testing Strategy",
            "API Design",
            "Containerization",
        ],
    ),
    (
        "frontend developer",
        &[
            "TypeScript",
            "Accessibility",
            "Component Design",
            "CSS Architecture",
            "Performance Profiling",
            "API Design",
        ],
    ),
    (
        "data analyst",
        &[
            "SQL",
            "Data Visualization",
            "Statistics",
            "Python",
            "Dashboard Design",
            "Data Cleaning",
        ],
    ),
    (
        "data scientist",
        &[
            "Python",
            "Machine Learning",
            "Statistics",
            "Feature Engineering",
            "Model Evaluation",
            "SQL",
        ],
    ),
    (
        "project manager",
        &[
            "Stakeholder Management",
            "Risk Management",
            "Agile Planning",
            "Budgeting",
            "Roadmapping",
            "Facilitation",
        ],
    ),
    (
        "product manager",
        &[
            "Roadmapping",
            "User Research",
            "Prioritization",
            "Stakeholder Management",
            "Metrics Definition",
            "Competitive Analysis",
        ],
    ),
    (
        "hr specialist",
        &[
            "Interviewing",
            "Employment Law",
            "Onboarding Design",
            "Conflict Resolution",
            "Compensation Benchmarking",
        ],
    ),
    (
        "sales representative",
        &[
            "Negotiation",
            "Prospecting",
            "CRM Hygiene",
            "Presentation",
            "Objection Handling",
        ],
    ),
    (
        "marketing manager",
        &[
            "Campaign Planning",
            "Copywriting",
            "Analytics",
            "SEO",
            "Brand Strategy",
        ],
    ),
    (
        "accountant",
        &[
            "Financial Reporting",
            "Reconciliation",
            "Tax Compliance",
            "Spreadsheet Modeling",
            "Audit Preparation",
        ],
    ),
    (
        "customer support agent",
        &[
            "Active Listening",
            "De-escalation",
            "Product Knowledge",
            "Ticket Triage",
            "Written Communication",
        ],
    ),
    (
        "devops engineer",
        &[
            "Containerization",
            "Infrastructure as Code",
            "CI/CD Pipelines",
            "Observability",
            "Incident Response",
            "Cloud Cost Management",
        ],
    ),
];

/// Generic fallback shortlist used when no occupation row matches.
const GENERIC_SKILLS: &[&str] = &[
    "Communication",
    "Time Management",
    "Teamwork",
    "Presentation",
    "Problem Solving",
];

/// A recommended skill label with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedSkill {
    pub label: String,
    pub score: f32,
}

fn normalize(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn token_overlap(a: &str, b: &str) -> usize {
    let b_tokens: Vec<&str> = b.split_whitespace().collect();
    a.split_whitespace()
        .filter(|t| b_tokens.contains(t))
        .count()
}

/// Resolve the skill shortlist for a job title.
///
/// Exact normalised match wins; otherwise the occupation row sharing the most
/// title tokens (at least one). Falls back to the generic shortlist.
fn shortlist_for(job_title: &str) -> &'static [&'static str] {
    let needle = normalize(job_title);
    if needle.is_empty() {
        return GENERIC_SKILLS;
    }

    if let Some((_, skills)) = OCCUPATION_MATRIX.iter().find(|(t, _)| *t == needle) {
        return skills;
    }

    let best = OCCUPATION_MATRIX
        .iter()
        .map(|(t, skills)| (token_overlap(&needle, t), *skills))
        .max_by_key(|(overlap, _)| *overlap);

    match best {
        Some((overlap, skills)) if overlap > 0 => skills,
        _ => GENERIC_SKILLS,
    }
}

/// Recommend up to `topn` skills for a job title, ranked by score.
pub fn recommend_skills(job_title: &str, topn: usize) -> Vec<RecommendedSkill> {
    shortlist_for(job_title)
        .iter()
        .take(topn)
        .enumerate()
        .map(|(i, label)| RecommendedSkill {
            label: (*label).to_string(),
            score: (100 - 5 * i as i32) as f32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_title_match() {
        let recs = recommend_skills("Software Engineer", 3);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].label, "Rust");
        assert_eq!(recs[0].score, 100.0);
        assert_eq!(recs[1].score, 95.0);
        assert_eq!(recs[2].score, 90.0);
    }

    #[test]
    fn title_matching_ignores_case_and_spacing() {
        let a = recommend_skills("  software   ENGINEER ", 5);
        let b = recommend_skills("software engineer", 5);
        assert_eq!(a, b);
    }

    #[test]
    fn partial_title_falls_back_to_token_overlap() {
        // "Senior Software Engineer" shares two tokens with the engineer row.
        let recs = recommend_skills("Senior Software Engineer", 2);
        assert_eq!(recs[0].label, "Rust");
    }

    #[test]
    fn unknown_title_gets_generic_shortlist() {
        let recs = recommend_skills("Chief Vibes Officer", 10);
        assert_eq!(recs.len(), GENERIC_SKILLS.len());
        assert_eq!(recs[0].label, "Communication");
    }

    #[test]
    fn empty_title_gets_generic_shortlist() {
        let recs = recommend_skills("", 3);
        assert_eq!(recs[0].label, "Communication");
    }

    #[test]
    fn topn_caps_result_length() {
        assert_eq!(recommend_skills("data analyst", 2).len(), 2);
    }

    #[test]
    fn scores_stay_in_suggestion_range() {
        for rec in recommend_skills("devops engineer", 20) {
            assert!(rec.score >= 0.0 && rec.score <= 100.0);
        }
    }
}
