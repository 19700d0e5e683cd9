use crate::arg::arg_map::ArgMap;
use crate::arg::token::Token;

#[derive(Debug, Clone, Copy)]
struct MarkerHit {
    token: Token,
    start: usize,
    end: usize,
}

/// Splits `input` at every whole-word marker of a token in `recognized`.
///
/// Text before the first marker is kept raw. Each marker captures the text up
/// to the next recognized marker (or end of input), trimmed. Marker-like words
/// that are not recognized stay inside whatever segment contains them. A token
/// given more than once keeps every occurrence; lookups see the last one.
/// A word that starts with a recognized marker but runs on past it (`/sA123`)
/// is not a marker either; it is recorded so the structural check can name it.
pub fn tokenize(input: &str, recognized: &[Token]) -> ArgMap {
    let (hits, glued) = find_markers(input, recognized);

    let preamble_end = hits.first().map_or(input.len(), |h| h.start);
    let mut map = ArgMap::new(&input[..preamble_end]);
    for (token, word) in glued {
        map.push_glued(token, word);
    }

    for (idx, hit) in hits.iter().enumerate() {
        let value_end = hits.get(idx + 1).map_or(input.len(), |next| next.start);
        map.push(hit.token, input[hit.end..value_end].trim());
    }
    map
}

fn find_markers<'a>(input: &'a str, recognized: &[Token]) -> (Vec<MarkerHit>, Vec<(Token, &'a str)>) {
    let mut hits = Vec::new();
    let mut glued = Vec::new();
    let mut word_start: Option<usize> = None;

    // A trailing sentinel space closes the last word.
    let chars = input.char_indices().chain(std::iter::once((input.len(), ' ')));
    for (i, c) in chars {
        if c.is_whitespace() {
            if let Some(start) = word_start.take() {
                let word = &input[start..i];
                if let Some(token) = Token::from_marker(word).filter(|t| recognized.contains(t)) {
                    hits.push(MarkerHit {
                        token,
                        start,
                        end: i,
                    });
                } else if let Some(token) = glued_marker(word, recognized) {
                    glued.push((token, word));
                }
            }
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    (hits, glued)
}

fn glued_marker(word: &str, recognized: &[Token]) -> Option<Token> {
    recognized
        .iter()
        .copied()
        .find(|t| word.len() > t.marker().len() && word.starts_with(t.marker()))
}
