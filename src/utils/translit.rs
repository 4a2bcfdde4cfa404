//! Cyrillic to Latin transliteration for filesystem-safe names.

use crate::error::TranslitError;

/// Transliterate a project name into `[A-Za-z0-9_-]`.
///
/// Characters without a rule fail the whole call instead of being dropped,
/// so a bad name never turns into a silently wrong filename.
pub fn transliterate(input: &str) -> Result<String, TranslitError> {
    let mut out = String::with_capacity(input.len());

    for (position, ch) in input.chars().enumerate() {
        match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => out.push(ch),
            ' ' => out.push('_'),
            _ => {
                let lower = ch.to_lowercase().next().unwrap_or(ch);
                let latin = cyrillic_to_latin(lower)
                    .ok_or(TranslitError::UnsupportedCharacter { ch, position })?;
                if lower != ch {
                    out.push_str(&capitalize_first(latin));
                } else {
                    out.push_str(latin);
                }
            }
        }
    }

    if out.is_empty() {
        return Err(TranslitError::Empty);
    }
    Ok(out)
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Latin rendering of a lowercase Cyrillic letter.
fn cyrillic_to_latin(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' => "",
        'ы' => "y",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        // Ukrainian / Belarusian
        'і' => "i",
        'ї' => "yi",
        'є' => "ye",
        'ґ' => "g",
        'ў' => "u",
        _ => return None,
    };
    Some(latin)
}
