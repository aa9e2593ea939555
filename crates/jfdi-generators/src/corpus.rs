//! Word and sentence sources for the text generators.

use jfdi_core::Context;
use rand::Rng;

/// Supplier of random words and sentences.
///
/// Implementations draw from the context's random source so that text stays
/// reproducible under a seeded context.
pub trait Corpus: Send + Sync {
    /// A single word with no whitespace.
    fn random_word(&self, ctx: &mut Context) -> String;

    /// A sentence starting with an uppercase letter and ending in
    /// punctuation.
    fn random_sentence(&self, ctx: &mut Context) -> String;
}

const LATIN_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
    "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
    "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation",
    "ullamco", "laboris", "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis",
    "aute", "irure", "in", "reprehenderit", "voluptate", "velit", "esse", "cillum",
    "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat", "cupidatat", "non",
    "proident", "sunt", "culpa", "qui", "officia", "deserunt", "mollit", "anim", "id",
    "est", "laborum",
];

const MIN_SENTENCE_WORDS: usize = 4;
const MAX_SENTENCE_WORDS: usize = 12;

/// Built-in corpus of lorem ipsum words.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatinCorpus;

impl Corpus for LatinCorpus {
    fn random_word(&self, ctx: &mut Context) -> String {
        let idx = ctx.rng().random_range(0..LATIN_WORDS.len());
        LATIN_WORDS[idx].to_string()
    }

    fn random_sentence(&self, ctx: &mut Context) -> String {
        let count = ctx
            .rng()
            .random_range(MIN_SENTENCE_WORDS..=MAX_SENTENCE_WORDS);
        let words: Vec<String> = (0..count).map(|_| self.random_word(ctx)).collect();

        let mut sentence = capitalize(&words.join(" "));
        sentence.push('.');
        sentence
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
