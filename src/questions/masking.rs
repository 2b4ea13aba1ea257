/// Delete the first case-insensitive occurrence of `keyword` from `text`.
///
/// Surrounding whitespace is left untouched, so `"The Cat sat"` masked with
/// `"cat"` becomes `"The  sat"`. When the keyword does not occur literally
/// (normalization can split words on punctuation) the text is returned as is.
pub fn mask_keyword(text: &str, keyword: &str) -> String {
    if keyword.is_empty() {
        return text.to_string();
    }

    // ASCII folding keeps byte offsets aligned with `text`.
    let haystack = text.to_ascii_lowercase();
    let needle = keyword.to_ascii_lowercase();

    match haystack.find(&needle) {
        Some(start) => {
            let end = start + needle.len();
            let mut masked = String::with_capacity(text.len() - needle.len());
            masked.push_str(&text[..start]);
            masked.push_str(&text[end..]);
            masked
        }
        None => text.to_string(),
    }
}
