// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slug derivation for job URLs.

/// Converts a title into a URL slug: lowercased, common Latin diacritics
/// folded to their base letter, whitespace runs collapsed to single hyphens,
/// and everything outside `[a-z0-9_-]` dropped.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.trim().chars() {
        for ch in ch.to_lowercase() {
            let ch = fold_diacritic(ch);
            if ch.is_ascii_alphanumeric() || ch == '_' {
                out.push(ch);
            } else if ch.is_whitespace() || ch == '-' {
                if !out.is_empty() && !out.ends_with('-') {
                    out.push('-');
                }
            }
        }
    }
    out
}

fn fold_diacritic(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => ch,
    }
}
