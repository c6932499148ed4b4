use crate::config::EmptyTokenPolicy;
use std::collections::HashMap;

/// Count how often each distinct stem occurs in one document.
///
/// Stems come back in the order they first appear in `tokens`, which is the
/// order both builders visit them in. Every count is at least 1.
pub fn count_terms<S: AsRef<str>>(tokens: &[S], policy: EmptyTokenPolicy) -> Vec<(&str, u32)> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut tf_counts: Vec<(&str, u32)> = Vec::new();
    for token in tokens {
        let term = token.as_ref();
        if term.is_empty() && policy == EmptyTokenPolicy::Drop {
            continue;
        }
        match slots.get(term) {
            Some(&slot) => tf_counts[slot].1 += 1,
            None => {
                slots.insert(term, tf_counts.len());
                tf_counts.push((term, 1));
            }
        }
    }
    tf_counts
}
