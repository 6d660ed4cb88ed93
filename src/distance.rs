use crate::error::{AnalysisError, Result};

/// Levenshtein edit distance between two strings
///
/// Two-row dynamic programming over characters. Symmetric, zero iff the
/// inputs are equal, and satisfies the triangle inequality.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.len() < b_chars.len() {
        return levenshtein(b, a);
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut previous_row: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current_row = vec![0usize; b_chars.len() + 1];

    for (i, &c1) in a_chars.iter().enumerate() {
        current_row[0] = i + 1;
        for (j, &c2) in b_chars.iter().enumerate() {
            let insertions = previous_row[j + 1] + 1;
            let deletions = current_row[j] + 1;
            let substitutions = previous_row[j] + usize::from(c1 != c2);
            current_row[j + 1] = insertions.min(deletions).min(substitutions);
        }
        std::mem::swap(&mut previous_row, &mut current_row);
    }

    previous_row[b_chars.len()]
}

/// Hamming distance between two strings of equal length
pub fn hamming(a: &str, b: &str) -> Result<usize> {
    if a.chars().count() != b.chars().count() {
        return Err(AnalysisError::InvalidArgument(
            "hamming distance requires strings of equal length".to_string(),
        ));
    }
    Ok(a.chars().zip(b.chars()).filter(|(c1, c2)| c1 != c2).count())
}

/// Hamming distance with the shorter string right-padded to the longer's length
///
/// `pad` must be exactly one character. Not a true metric, but deterministic
/// and total over all input pairs.
pub fn hamming_with_padding(a: &str, b: &str, pad: &str) -> Result<usize> {
    let mut pad_chars = pad.chars();
    let pad_char = match (pad_chars.next(), pad_chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(AnalysisError::InvalidArgument(
                "padding must be exactly one character".to_string(),
            ));
        }
    };
    Ok(padded_hamming(a, b, pad_char))
}

/// Infallible padded Hamming distance used on the suggestion hot path
pub(crate) fn padded_hamming(a: &str, b: &str, pad: char) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let max_len = a_chars.len().max(b_chars.len());

    (0..max_len)
        .filter(|&i| {
            let c1 = a_chars.get(i).copied().unwrap_or(pad);
            let c2 = b_chars.get(i).copied().unwrap_or(pad);
            c1 != c2
        })
        .count()
}
