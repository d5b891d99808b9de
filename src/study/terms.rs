use std::collections::HashMap;

/// Most frequent lowercase words longer than `min_chars` characters.
///
/// Words are whitespace-separated and keep their punctuation, so `cell` and
/// `cell,` count separately. Equal counts keep first-seen order.
pub fn important_terms(text: &str, min_chars: usize, limit: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for word in lowered.split_whitespace() {
        if word.chars().count() <= min_chars {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            first_seen.push(word);
        }
        *count += 1;
    }

    // sort_by is stable, so ties stay in first-seen order
    first_seen.sort_by(|a, b| counts[b].cmp(&counts[a]));
    first_seen
        .into_iter()
        .take(limit)
        .map(str::to_string)
        .collect()
}
