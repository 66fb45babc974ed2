//! Lexicon-based sentiment scoring for feedback comments.
//!
//! Produces a compound score in [-1, 1] from a valence lexicon with negation
//! and intensifier handling, normalised the same way downstream consumers
//! expect: `sum / sqrt(sum^2 + 15)`. Scoring is pure — it never touches the
//! database. Persisting a feedback record is a separate, explicit operation.

use shared_types::SentimentResult;

/// Word valences on a roughly -4..=4 scale.
const LEXICON: &[(&str, f32)] = &[
    ("amazing", 2.8),
    ("awful", -2.8),
    ("bad", -2.5),
    ("best", 3.2),
    ("boring", -1.3),
    ("brilliant", 2.8),
    ("clear", 1.2),
    ("confident", 1.7),
    ("confusing", -1.5),
    ("dedicated", 1.8),
    ("delightful", 2.5),
    ("difficult", -1.5),
    ("disappointing", -2.2),
    ("disorganized", -1.8),
    ("dreadful", -2.8),
    ("effective", 1.8),
    ("efficient", 1.8),
    ("excellent", 2.7),
    ("exceptional", 2.7),
    ("fail", -2.5),
    ("failed", -2.5),
    ("fantastic", 2.6),
    ("friendly", 2.2),
    ("frustrating", -2.1),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("hate", -2.7),
    ("helpful", 1.8),
    ("impressive", 2.3),
    ("improved", 1.6),
    ("inadequate", -2.0),
    ("incompetent", -2.5),
    ("insightful", 2.1),
    ("inspiring", 2.3),
    ("knowledgeable", 1.9),
    ("lazy", -2.0),
    ("love", 3.2),
    ("mediocre", -0.8),
    ("motivated", 1.9),
    ("negative", -1.8),
    ("nice", 1.8),
    ("outstanding", 3.1),
    ("patient", 1.5),
    ("perfect", 2.7),
    ("poor", -2.1),
    ("positive", 2.3),
    ("productive", 1.8),
    ("professional", 1.6),
    ("reliable", 1.9),
    ("rude", -2.3),
    ("sloppy", -1.9),
    ("slow", -1.2),
    ("strong", 1.7),
    ("supportive", 2.0),
    ("terrible", -3.1),
    ("thorough", 1.6),
    ("unclear", -1.4),
    ("unhelpful", -1.9),
    ("unprepared", -1.8),
    ("unprofessional", -2.2),
    ("unreliable", -2.0),
    ("useful", 1.9),
    ("useless", -1.9),
    ("weak", -1.6),
    ("wonderful", 2.7),
    ("worst", -3.1),
];

/// Words that flip the valence of the term they precede.
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "cannot", "cant", "dont", "doesnt", "didnt", "isnt",
    "wasnt", "wont", "hardly", "barely", "without", "lacks", "lacking",
];

/// Intensifiers and dampeners applied to the following term.
const BOOSTERS: &[(&str, f32)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("especially", 0.293),
    ("extremely", 0.293),
    ("highly", 0.293),
    ("incredibly", 0.293),
    ("particularly", 0.293),
    ("really", 0.293),
    ("remarkably", 0.293),
    ("so", 0.293),
    ("totally", 0.293),
    ("truly", 0.293),
    ("very", 0.293),
    ("almost", -0.293),
    ("kinda", -0.293),
    ("kind", -0.293),
    ("marginally", -0.293),
    ("occasionally", -0.293),
    ("partly", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("sort", -0.293),
];

/// Dampening factor applied when a matched term is negated.
const NEGATION_FACTOR: f32 = -0.74;

/// Normalisation constant for the compound score.
const NORM_ALPHA: f32 = 15.0;

fn lookup(word: &str) -> Option<f32> {
    LEXICON
        .binary_search_by(|(w, _)| w.cmp(&word))
        .ok()
        .map(|i| LEXICON[i].1)
}

fn booster(word: &str) -> Option<f32> {
    BOOSTERS.iter().find(|(w, _)| *w == word).map(|(_, b)| *b)
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|t| t.trim_matches('\'').replace('\'', ""))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Compute the compound sentiment score for a comment, in [-1, 1].
///
/// Each lexicon hit contributes its valence, adjusted by boosters and flipped
/// by negations in the three preceding tokens. Trailing exclamation marks add
/// emphasis. The raw sum is squashed into [-1, 1].
pub fn compound_score(text: &str) -> f32 {
    let tokens = tokenize(text);
    let mut sum = 0.0f32;

    for (i, token) in tokens.iter().enumerate() {
        let Some(mut valence) = lookup(token) else {
            continue;
        };

        // Scan up to three preceding tokens for boosters and negations.
        let window_start = i.saturating_sub(3);
        let mut negated = false;
        for prev in &tokens[window_start..i] {
            if is_negation(prev) {
                negated = true;
            } else if let Some(b) = booster(prev) {
                valence += if valence >= 0.0 { b } else { -b };
            }
        }
        if negated {
            valence *= NEGATION_FACTOR;
        }

        sum += valence;
    }

    // Exclamation emphasis, capped at three marks.
    let bangs = text.chars().filter(|c| *c == '!').count().min(3) as f32;
    if sum > 0.0 {
        sum += bangs * 0.292;
    } else if sum < 0.0 {
        sum -= bangs * 0.292;
    }

    if sum == 0.0 {
        return 0.0;
    }
    sum / (sum * sum + NORM_ALPHA).sqrt()
}

/// Score a comment and derive its label and 1-5 scale value.
pub fn analyze(comment: &str) -> SentimentResult {
    SentimentResult::from_compound(compound_score(comment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_is_sorted_for_binary_search() {
        for pair in LEXICON.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn positive_comment_scores_positive() {
        let r = analyze("Great session, the trainer was very helpful");
        assert!(r.sentiment_score > 0.05);
        assert_eq!(r.sentiment_label, "Positive");
    }

    #[test]
    fn negative_comment_scores_negative() {
        let r = analyze("Terrible pacing and a disorganized presentation");
        assert!(r.sentiment_score < -0.05);
        assert_eq!(r.sentiment_label, "Negative");
    }

    #[test]
    fn neutral_comment_scores_zero() {
        let r = analyze("The session covered the quarterly report");
        assert_eq!(r.sentiment_score, 0.0);
        assert_eq!(r.sentiment_label, "Neutral");
        assert_eq!(r.sentiment_score_1_5, 3);
    }

    #[test]
    fn empty_comment_is_neutral() {
        assert_eq!(compound_score(""), 0.0);
    }

    #[test]
    fn negation_flips_polarity() {
        let plain = compound_score("the training was good");
        let negated = compound_score("the training was not good");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn booster_amplifies() {
        let plain = compound_score("helpful");
        let boosted = compound_score("extremely helpful");
        assert!(boosted > plain);
    }

    #[test]
    fn dampener_reduces() {
        let plain = compound_score("helpful");
        let damped = compound_score("somewhat helpful");
        assert!(damped < plain);
        assert!(damped > 0.0);
    }

    #[test]
    fn exclamation_adds_emphasis() {
        let calm = compound_score("great work");
        let excited = compound_score("great work!!!");
        assert!(excited > calm);
    }

    #[test]
    fn compound_stays_in_unit_interval() {
        let r = compound_score("best amazing outstanding excellent wonderful great love");
        assert!(r <= 1.0);
        let r = compound_score("worst terrible awful dreadful hate incompetent");
        assert!(r >= -1.0);
    }

    #[test]
    fn punctuation_and_case_are_ignored_in_matching() {
        assert!(compound_score("GREAT, really GREAT.") > 0.0);
    }
}
