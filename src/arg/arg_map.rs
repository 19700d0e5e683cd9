use std::collections::HashMap;

use crate::arg::token::Token;
use crate::errors::{Error, Result, require_input};

/// Result of tokenizing one command line. Built once by the tokenizer and
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ArgMap {
    values: HashMap<Token, Vec<String>>,
    text_before_first_token: String,
    glued_markers: Vec<(Token, String)>,
}

impl ArgMap {
    pub(crate) fn new(text_before_first_token: &str) -> Self {
        Self {
            values: HashMap::new(),
            text_before_first_token: text_before_first_token.to_string(),
            glued_markers: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, token: Token, value: &str) {
        self.values
            .entry(token)
            .or_default()
            .push(value.to_string());
    }

    pub(crate) fn push_glued(&mut self, token: Token, word: &str) {
        self.glued_markers.push((token, word.to_string()));
    }

    /// Value of the last occurrence of `token`, `None` when it never appeared.
    pub fn value(&self, token: Token) -> Option<&str> {
        self.values
            .get(&token)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every captured value of `token`, in input order.
    pub fn all_values(&self, token: Token) -> &[String] {
        self.values
            .get(&token)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_present(&self, token: Token) -> bool {
        self.values.contains_key(&token)
    }

    pub fn text_before_first_token(&self) -> &str {
        &self.text_before_first_token
    }

    /// Words that begin with a recognized marker but have no space after it,
    /// in input order.
    pub fn glued_markers(&self) -> &[(Token, String)] {
        &self.glued_markers
    }

    /// Structural phase of a parse: every `required` token must be present
    /// and nothing but whitespace may precede the first token. Runs before
    /// any field is validated.
    pub fn check_structure(&self, required: &[Token], usage: &str) -> Result<PresentArgs<'_>> {
        if let Some((token, word)) = self.glued_markers.first() {
            return Err(Error::invalid(format!(
                "Invalid command format.\nLeave a space between {token} and its value in '{word}'.\nUsage: {usage}"
            )));
        }
        let all_present = required.iter().all(|t| self.is_present(*t));
        if !all_present || !self.text_before_first_token.trim().is_empty() {
            return Err(Error::invalid(format!(
                "Invalid command format.\nUsage: {usage}"
            )));
        }
        Ok(PresentArgs { map: self })
    }
}

/// View of an [`ArgMap`] that has passed the structural phase.
#[derive(Debug, Clone, Copy)]
pub struct PresentArgs<'a> {
    map: &'a ArgMap,
}

impl<'a> PresentArgs<'a> {
    pub fn get(&self, token: Token) -> Result<&'a str> {
        require_input(
            self.map.value(token),
            format!("Missing value for {}.", token),
        )
    }
}
