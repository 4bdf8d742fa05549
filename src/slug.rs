//! URL slug derivation from human-readable titles.
//!
//! A slug is the lowercase, hyphenated, URL-safe form of a title:
//! non-Latin characters are transliterated into Latin equivalents, runs of
//! whitespace and punctuation collapse into single hyphens, and the result
//! is truncated to [`MAX_SLUG_CHARS`] characters. Truncation may cut
//! mid-word; that is accepted behaviour, not an error.

/// Maximum length of a derived slug, in characters.
pub const MAX_SLUG_CHARS: usize = 100;

/// Derives a URL slug from a title.
///
/// The derivation is deterministic and side-effect free. Characters with no
/// Latin equivalent are dropped; a title consisting only of such characters
/// derives an empty slug, which callers must treat as unusable.
#[must_use]
pub fn slugify(title: &str) -> String {
    let transliterated = transliterate(title);
    let mut slug = String::with_capacity(transliterated.len());
    let mut pending_hyphen = false;
    for ch in transliterated.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug.chars().take(MAX_SLUG_CHARS).collect()
}

/// Maps the input to ASCII, transliterating Cyrillic and stripping Latin
/// diacritics. Unmapped non-ASCII characters are dropped.
fn transliterate(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().flat_map(char::to_lowercase).peekable();
    while let Some(ch) = chars.next() {
        // The "ый" ending transliterates as a unit rather than letterwise.
        if ch == 'ы' && chars.peek() == Some(&'й') {
            chars.next();
            output.push_str("yij");
            continue;
        }
        if ch.is_ascii() {
            output.push(ch);
            continue;
        }
        if let Some(mapped) = to_latin(ch) {
            output.push_str(mapped);
        }
    }
    output
}

/// Returns the Latin rendering of a single lowercase character, or `None`
/// when the character has no representable equivalent.
const fn to_latin(ch: char) -> Option<&'static str> {
    let mapped = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
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
        'ц' => "c",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ы' => "y",
        'ю' => "yu",
        'я' => "ya",
        // Soft and hard signs carry no sound of their own.
        'ь' | 'ъ' => "",
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => "a",
        'é' | 'è' | 'ê' | 'ë' => "e",
        'í' | 'ì' | 'î' | 'ï' => "i",
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => "o",
        'ú' | 'ù' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'ñ' => "n",
        'ç' => "c",
        'ß' => "ss",
        'æ' => "ae",
        'ø' => "o",
        'œ' => "oe",
        _ => return None,
    };
    Some(mapped)
}
