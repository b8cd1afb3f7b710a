//! Named validation and sampling methods referenced from column schemas.
//!
//! Column definitions name a method by key; the registry maps the key to a
//! function. The built-in set covers `;`-separated token sequences such as
//! peril code lists (`AA1;WTC;WEC`).

use std::collections::HashMap;

use rand::RngCore;
use rand::seq::SliceRandom;

use oed_model::{Value, ValueRange};

/// Predicate deciding whether a value is acceptable for a column range.
pub type ValidationFn = fn(Option<&ValueRange>, &Value) -> bool;

/// Generator producing one value from a column range and extra arguments.
pub type SamplingFn = fn(&ValueRange, &[String], &mut dyn RngCore) -> Value;

pub const TOKEN_SEQUENCE: &str = "token_sequence";

pub const DEFAULT_TOKEN_SEPARATOR: &str = ";";
pub const DEFAULT_SEQUENCE_LENGTH: usize = 10;

#[derive(Clone, Default)]
pub struct MethodRegistry {
    validators: HashMap<&'static str, ValidationFn>,
    samplers: HashMap<&'static str, SamplingFn>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in methods.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register_validation(TOKEN_SEQUENCE, validate_token_sequence);
        registry.register_sampling(TOKEN_SEQUENCE, sample_token_sequence);
        registry
    }

    pub fn register_validation(&mut self, name: &'static str, method: ValidationFn) {
        self.validators.insert(name, method);
    }

    pub fn register_sampling(&mut self, name: &'static str, method: SamplingFn) {
        self.samplers.insert(name, method);
    }

    pub fn validation(&self, name: &str) -> Option<ValidationFn> {
        self.validators.get(name).copied()
    }

    pub fn sampling(&self, name: &str) -> Option<SamplingFn> {
        self.samplers.get(name).copied()
    }
}

impl std::fmt::Debug for MethodRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut validators: Vec<_> = self.validators.keys().collect();
        validators.sort();
        let mut samplers: Vec<_> = self.samplers.keys().collect();
        samplers.sort();
        f.debug_struct("MethodRegistry")
            .field("validators", &validators)
            .field("samplers", &samplers)
            .finish()
    }
}

/// Whether `seq` is a `sep`-separated sequence of distinct tokens drawn
/// from `tokens`. Empty segments are ignored. Token sets containing an
/// empty token are rejected.
pub fn is_valid_token_sequence(tokens: &[&str], seq: &str, sep: &str) -> bool {
    if tokens.iter().any(|t| t.is_empty()) {
        return false;
    }
    let mut seen = Vec::new();
    for token in seq.split(sep).filter(|t| !t.is_empty()) {
        if !tokens.contains(&token) || seen.contains(&token) {
            return false;
        }
        seen.push(token);
    }
    true
}

/// Sorted, `sep`-joined sample of `min(seq_length, tokens.len())` distinct tokens.
pub fn generate_token_sequence(
    tokens: &[&str],
    seq_length: usize,
    sep: &str,
    rng: &mut dyn RngCore,
) -> String {
    let mut chosen: Vec<&str> = tokens
        .choose_multiple(rng, seq_length.min(tokens.len()))
        .copied()
        .collect();
    chosen.sort_unstable();
    chosen.join(sep)
}

fn validate_token_sequence(range: Option<&ValueRange>, value: &Value) -> bool {
    let (Some(range), Value::Str(seq)) = (range, value) else {
        return false;
    };
    if !range.int_members().is_empty() {
        return false;
    }
    is_valid_token_sequence(&range.str_members(), seq, DEFAULT_TOKEN_SEPARATOR)
}

fn sample_token_sequence(range: &ValueRange, args: &[String], rng: &mut dyn RngCore) -> Value {
    let seq_length = args
        .first()
        .and_then(|arg| arg.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_SEQUENCE_LENGTH);
    let sep = args
        .get(1)
        .map_or(DEFAULT_TOKEN_SEPARATOR, String::as_str);
    Value::Str(generate_token_sequence(
        &range.str_members(),
        seq_length,
        sep,
        rng,
    ))
}
