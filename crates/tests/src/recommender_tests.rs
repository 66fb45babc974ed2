use pretty_assertions::assert_eq;
use server::recommender::recommend_skills;

#[test]
fn known_title_yields_ranked_shortlist() {
    let recs = recommend_skills("Data Analyst", 4);
    assert_eq!(recs.len(), 4);
    assert_eq!(recs[0].label, "SQL");
    // Rank i scores 100 - 5i.
    let scores: Vec<f32> = recs.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![100.0, 95.0, 90.0, 85.0]);
}

#[test]
fn decorated_titles_still_match_by_token_overlap() {
    let plain = recommend_skills("project manager", 5);
    let senior = recommend_skills("Senior Project Manager (EMEA)", 5);
    assert_eq!(plain, senior);
}

#[test]
fn unrelated_title_falls_back_to_generic_skills() {
    let recs = recommend_skills("Zookeeper", 3);
    assert_eq!(recs[0].label, "Communication");
}

#[test]
fn scores_never_leave_suggestion_bounds() {
    for title in ["software engineer", "hr specialist", "nobody knows this"] {
        for rec in recommend_skills(title, 25) {
            assert!((0.0..=100.0).contains(&rec.score), "{title}: {rec:?}");
        }
    }
}
