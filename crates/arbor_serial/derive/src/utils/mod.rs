//! Small helpers shared by the code generators.

use proc_macro2::TokenStream;

#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// Converts a Rust identifier into `SCREAMING_SNAKE_CASE`.
///
/// A word boundary is placed before an upper-case letter that follows a
/// lower-case letter or digit, and before the last capital of an acronym
/// followed by lower case, so `HTTPServer` becomes `HTTP_SERVER`.
pub(crate) fn screaming_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);

    for (index, &ch) in chars.iter().enumerate() {
        if ch == '_' {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if ch.is_uppercase() && index > 0 && !out.ends_with('_') {
            let prev = chars[index - 1];
            let next_is_lower = chars.get(index + 1).is_some_and(|c| c.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                out.push('_');
            }
        }

        out.extend(ch.to_uppercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::screaming_snake_case;

    #[test]
    fn splits_words() {
        assert_eq!(screaming_snake_case("North"), "NORTH");
        assert_eq!(screaming_snake_case("SouthWest"), "SOUTH_WEST");
        assert_eq!(screaming_snake_case("HTTPServer"), "HTTP_SERVER");
        assert_eq!(screaming_snake_case("Level2Boss"), "LEVEL2_BOSS");
        assert_eq!(screaming_snake_case("ALREADY_UPPER"), "ALREADY_UPPER");
    }
}
