use crate::models::{ScoredWord, SentimentReport, Token, Verdict};

/// Aggregate per-token polarity into a call-level verdict
///
/// Pure and deterministic. The total includes neutral tokens (they add
/// zero); the extremes break ties by first occurrence in token order. An
/// empty token stream scores NEUTRAL with zero counts.
pub fn score(tokens: &[Token]) -> SentimentReport {
    let total_score: i32 = tokens.iter().map(|t| t.polarity).sum();

    let positive_words_count = tokens.iter().filter(|t| t.polarity > 0).count();
    let negative_words_count = tokens.iter().filter(|t| t.polarity < 0).count();

    let mut most_positive: Option<&Token> = None;
    let mut most_negative: Option<&Token> = None;
    for token in tokens {
        if token.polarity > 0 && most_positive.is_none_or(|best| token.polarity > best.polarity) {
            most_positive = Some(token);
        }
        if token.polarity < 0 && most_negative.is_none_or(|best| token.polarity < best.polarity) {
            most_negative = Some(token);
        }
    }

    let sentiment = if total_score > 0 {
        Verdict::Positive
    } else if total_score < 0 {
        Verdict::Negative
    } else {
        Verdict::Neutral
    };

    SentimentReport {
        sentiment,
        score: total_score,
        positive_words_count,
        negative_words_count,
        most_positive: to_scored(most_positive),
        most_negative: to_scored(most_negative),
    }
}

fn to_scored(token: Option<&Token>) -> ScoredWord {
    token.map_or_else(ScoredWord::placeholder, |t| ScoredWord {
        word: t.lexeme.clone(),
        score: t.polarity,
    })
}
