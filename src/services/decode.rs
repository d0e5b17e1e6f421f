//! Decoding of the text fields returned by the trivia API

use html_escape::decode_html_entities;
use percent_encoding::percent_decode_str;

use crate::models::ResponseEncoding;

/// Decode a single text field according to the encoding that was requested
pub fn decode_text(encoding: ResponseEncoding, raw: &str) -> String {
    match encoding {
        // Invalid UTF-8 sequences become U+FFFD rather than failing the whole batch
        ResponseEncoding::Url3986 => percent_decode_str(raw).decode_utf8_lossy().into_owned(),
        ResponseEncoding::Html => decode_html_entities(raw).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_url3986() {
        assert_eq!(
            decode_text(
                ResponseEncoding::Url3986,
                "Which%20planet%20is%20known%20as%20the%20%22Red%20Planet%22%3F"
            ),
            "Which planet is known as the \"Red Planet\"?"
        );
    }

    #[test]
    fn test_decode_url3986_multibyte() {
        assert_eq!(decode_text(ResponseEncoding::Url3986, "Pok%C3%A9mon"), "Pokémon");
    }

    #[test]
    fn test_decode_url3986_keeps_plus() {
        // RFC 3986 encodes spaces as %20, so a literal '+' stays a '+'
        assert_eq!(decode_text(ResponseEncoding::Url3986, "C%2B%2B"), "C++");
        assert_eq!(decode_text(ResponseEncoding::Url3986, "1+1"), "1+1");
    }

    #[test]
    fn test_decode_url3986_invalid_utf8_is_lossy() {
        assert_eq!(decode_text(ResponseEncoding::Url3986, "a%FFb"), "a\u{FFFD}b");
    }

    #[test]
    fn test_decode_html_entities() {
        assert_eq!(
            decode_text(ResponseEncoding::Html, "Who wrote &quot;Hamlet&quot;? It&#039;s &amp; more"),
            "Who wrote \"Hamlet\"? It's & more"
        );
    }
}
