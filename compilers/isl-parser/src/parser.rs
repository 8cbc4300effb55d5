use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, digit1, multispace0, one_of, satisfy},
    combinator::{map, opt, recognize},
    sequence::{pair, preceded},
    IResult,
};

use crate::token::Span;

/// Characters allowed after the first letter of a word.
fn is_word_tail(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '\'' | '’' | '-')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawToken<'a> {
    Word(&'a str),
    Number(&'a str),
    Punct(char),
}

fn word(input: &str) -> IResult<&str, &str> {
    recognize(pair(satisfy(char::is_alphabetic), take_while(is_word_tail)))(input)
}

fn number(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, opt(preceded(char('.'), digit1))))(input)
}

fn raw_token(input: &str) -> IResult<&str, RawToken<'_>> {
    alt((
        map(word, RawToken::Word),
        map(number, RawToken::Number),
        map(one_of(".,;:?!\"()"), RawToken::Punct),
    ))(input)
}

/// Splits English text into words, numbers and punctuation with byte spans.
/// Characters no rule accepts are skipped.
pub fn parse_with_spans(original_input: &str) -> Vec<(Span, RawToken<'_>)> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        match raw_token(input) {
            Ok((next_input, token)) => {
                let len = input.len() - next_input.len();
                let start = original_input.len() - input.len();

                result.push((Span::new(start, start + len), token));
                input = next_input;
            }
            Err(_) => {
                // Skip one char to recover
                if let Some(c) = input.chars().next() {
                    input = &input[c.len_utf8()..];
                } else {
                    break;
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_numbers_punct() {
        let tokens = parse_with_spans("I don't eat 2.5 apples, ok?");
        let raw: Vec<_> = tokens.iter().map(|(_, t)| t.clone()).collect();
        assert_eq!(
            raw,
            vec![
                RawToken::Word("I"),
                RawToken::Word("don't"),
                RawToken::Word("eat"),
                RawToken::Number("2.5"),
                RawToken::Word("apples"),
                RawToken::Punct(','),
                RawToken::Word("ok"),
                RawToken::Punct('?'),
            ]
        );
    }

    #[test]
    fn test_spans_point_into_input() {
        let input = "  héllo  wörld.";
        for (span, token) in parse_with_spans(input) {
            let text = &input[span.start..span.end];
            match token {
                RawToken::Word(w) => assert_eq!(w, text),
                RawToken::Number(n) => assert_eq!(n, text),
                RawToken::Punct(c) => assert_eq!(text.chars().next(), Some(c)),
            }
        }
    }

    #[test]
    fn test_unknown_chars_skipped() {
        let tokens = parse_with_spans("#@ cat & dog");
        let words: Vec<_> = tokens
            .into_iter()
            .filter_map(|(_, t)| match t {
                RawToken::Word(w) => Some(w),
                _ => None,
            })
            .collect();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_with_spans("").is_empty());
        assert!(parse_with_spans(" \n\t ").is_empty());
    }
}
