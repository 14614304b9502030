use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

/// Reads whitespace separated tokens, pulling in more lines as needed.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

#[derive(Debug)]
pub enum Token<T> {
    Value(T),
    Invalid(String),
    EndOfInput,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    pub fn parse<T: FromStr>(&mut self) -> std::io::Result<Token<T>> {
        Ok(match self.next_token()? {
            Some(token) => match token.parse() {
                Ok(value) => Token::Value(value),
                Err(_) => Token::Invalid(token),
            },
            None => Token::EndOfInput,
        })
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_span_lines() {
        let mut reader = TokenReader::new("1 2\n\n  3\nx".as_bytes());
        assert!(matches!(reader.parse::<i32>().unwrap(), Token::Value(1)));
        assert!(matches!(reader.parse::<i32>().unwrap(), Token::Value(2)));
        assert!(matches!(reader.parse::<i32>().unwrap(), Token::Value(3)));
        assert!(matches!(reader.parse::<i32>().unwrap(), Token::Invalid(t) if t == "x"));
        assert!(matches!(reader.parse::<i32>().unwrap(), Token::EndOfInput));
    }

    #[test]
    fn discard_drops_rest_of_line() {
        let mut reader = TokenReader::new("a b c\n4\n".as_bytes());
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("a"));
        reader.discard_line();
        assert!(matches!(reader.parse::<u8>().unwrap(), Token::Value(4)));
    }
}
