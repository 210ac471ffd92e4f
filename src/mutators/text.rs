//! Case helpers shared by the mutators

/// First character uppercased, the rest lowercased ("mAX" -> "Max")
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Invert the case of every cased character ("MaX" -> "mAx")
pub fn swap_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Length in characters, the unit the length filter works in
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}
