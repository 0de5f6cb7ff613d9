// src/core/tones.rs
//
// Numbered-tone pinyin to accented pinyin. Stateless and total: anything
// that does not look like numbered pinyin falls through unchanged.

/// The vowel that receives the diacritic in a multi-vowel syllable is the
/// first one found in this fixed order ("hao3" marks the a, not the o).
const VOWEL_PRIORITY: [char; 6] = ['a', 'o', 'e', 'i', 'u', 'ü'];

fn marked(vowel: char, tone: u32) -> char {
    let idx = (tone - 1) as usize;
    match vowel {
        'a' => ['ā', 'á', 'ǎ', 'à'][idx],
        'o' => ['ō', 'ó', 'ǒ', 'ò'][idx],
        'e' => ['ē', 'é', 'ě', 'è'][idx],
        'i' => ['ī', 'í', 'ǐ', 'ì'][idx],
        'u' => ['ū', 'ú', 'ǔ', 'ù'][idx],
        'ü' => ['ǖ', 'ǘ', 'ǚ', 'ǜ'][idx],
        other => other,
    }
}

fn is_pinyin_letter(c: char) -> bool {
    c.is_ascii_lowercase() || c == 'ü'
}

/// Splits a phrase into syllable tokens: a run of pinyin letters plus an
/// optional trailing tone digit 1-5. Anything else is dropped. The playback
/// layer uses the same tokens to look up per-syllable audio clips.
pub fn syllables(input: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let (start, c) = chars[i];
        if !is_pinyin_letter(c) {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j < chars.len() && is_pinyin_letter(chars[j].1) {
            j += 1;
        }
        if j < chars.len() && matches!(chars[j].1, '1'..='5') {
            j += 1;
        }
        let end = chars.get(j).map_or(input.len(), |&(pos, _)| pos);
        tokens.push(&input[start..end]);
        i = j;
    }
    tokens
}

fn convert_syllable(syllable: &str) -> String {
    let tone = match syllable.chars().last().and_then(|c| c.to_digit(10)) {
        Some(t) if (1..=5).contains(&t) => t,
        _ => return syllable.to_string(),
    };
    let base = &syllable[..syllable.len() - 1];
    if tone == 5 {
        // Neutral tone: strip the digit, no mark.
        return base.to_string();
    }
    for vowel in VOWEL_PRIORITY {
        if let Some(pos) = base.find(vowel) {
            let mut out = String::with_capacity(base.len() + 2);
            out.push_str(&base[..pos]);
            out.push(marked(vowel, tone));
            out.push_str(&base[pos + vowel.len_utf8()..]);
            return out;
        }
    }
    base.to_string()
}

/// Converts a numbered-tone phrase to accented pinyin, one space between
/// syllables. Input that yields no syllable tokens is returned as-is.
pub fn to_accented(pinyin: &str) -> String {
    let tokens = syllables(pinyin);
    if tokens.is_empty() {
        return pinyin.to_string();
    }
    tokens
        .iter()
        .map(|s| convert_syllable(s))
        .collect::<Vec<_>>()
        .join(" ")
}
