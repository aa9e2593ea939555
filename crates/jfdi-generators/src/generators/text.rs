//! Text generators backed by a [`Corpus`].

use super::reserve_array;
use crate::corpus::{Corpus, LatinCorpus};
use jfdi_core::{coerce, Array, Context, Generator, GeneratorError, Term, Value};
use std::sync::Arc;

/// Text generators bound to a particular corpus.
///
/// The free functions [`word`], [`words`], [`sentence`] and [`sentences`]
/// use the default [`LatinCorpus`].
#[derive(Clone)]
pub struct Lexicon {
    corpus: Arc<dyn Corpus>,
}

impl Lexicon {
    /// Bind text generators to `corpus`.
    pub fn new(corpus: impl Corpus + 'static) -> Self {
        Self {
            corpus: Arc::new(corpus),
        }
    }

    /// Generate a single word.
    pub fn word(&self) -> Generator {
        let corpus = Arc::clone(&self.corpus);
        Generator::new(move |ctx| Ok(Value::String(corpus.random_word(ctx))))
    }

    /// Generate an array of `count` words.
    ///
    /// `count` must be a non-negative integer or a generator of one.
    pub fn words(&self, count: impl Into<Term>) -> Generator {
        let corpus = Arc::clone(&self.corpus);
        let count = count.into();
        Generator::new(move |ctx| {
            let n = resolve_count(ctx, &count, "words")?;
            let mut output = reserve_array(n, "words count")?;
            for _ in 0..n {
                output.push(corpus.random_word(ctx));
            }
            Ok(Value::Array(output))
        })
    }

    /// Generate a single sentence.
    pub fn sentence(&self) -> Generator {
        let corpus = Arc::clone(&self.corpus);
        Generator::new(move |ctx| Ok(Value::String(corpus.random_sentence(ctx))))
    }

    /// Generate an array of `count` sentences.
    ///
    /// `count` must be a non-negative integer or a generator of one.
    pub fn sentences(&self, count: impl Into<Term>) -> Generator {
        let corpus = Arc::clone(&self.corpus);
        let count = count.into();
        Generator::new(move |ctx| {
            let n = resolve_count(ctx, &count, "sentences")?;
            let mut output = reserve_array(n, "sentences count")?;
            for _ in 0..n {
                output.push(corpus.random_sentence(ctx));
            }
            Ok(Value::Array(output))
        })
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(LatinCorpus)
    }
}

fn resolve_count(ctx: &mut Context, count: &Term, what: &str) -> Result<usize, GeneratorError> {
    let n = coerce::<i64>(ctx, count).map_err(|e| e.within(format!("{what} count")))?;
    usize::try_from(n).map_err(|_| {
        GeneratorError::invalid_argument(format!("{what} count must be non-negative, got {n}"))
    })
}

/// Generate a single latin word.
pub fn word() -> Generator {
    Lexicon::default().word()
}

/// Generate an array of `count` latin words.
pub fn words(count: impl Into<Term>) -> Generator {
    Lexicon::default().words(count)
}

/// Generate a single latin sentence.
pub fn sentence() -> Generator {
    Lexicon::default().sentence()
}

/// Generate an array of `count` latin sentences.
pub fn sentences(count: impl Into<Term>) -> Generator {
    Lexicon::default().sentences(count)
}

/// Join an array of strings with a separator.
///
/// The separator is resolved first and must be a string or a generator of
/// one; `inputs` must then resolve to an array whose elements are all string
/// literals.
pub fn join(inputs: impl Into<Term>, separator: impl Into<Term>) -> Generator {
    let inputs = inputs.into();
    let separator = separator.into();
    Generator::new(move |ctx| {
        let sep = coerce::<String>(ctx, &separator).map_err(|e| e.within("join separator"))?;
        let items = coerce::<Array>(ctx, &inputs).map_err(|e| e.within("join inputs"))?;

        let parts = items
            .iter()
            .map(|term| match term.as_value() {
                Some(Value::String(s)) => Ok(s.as_str()),
                _ => Err(GeneratorError::type_mismatch(
                    "join inputs",
                    "string",
                    term.kind(),
                )),
            })
            .collect::<Result<Vec<&str>, _>>()?;
        Ok(Value::String(parts.join(&sep)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::numeric::int;
    use crate::generators::pick::pick;
    use regex::Regex;

    fn strings(value: &Value) -> Vec<String> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t.as_value().and_then(Value::as_str).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_words() {
        let mut ctx = Context::with_seed(11);
        let re = Regex::new(r"^\S+$").unwrap();

        let w = word().call(&mut ctx).unwrap();
        assert!(re.is_match(w.as_str().unwrap()));

        for i in 0..=10 {
            let xs = strings(&words(i).call(&mut ctx).unwrap());
            assert_eq!(xs.len(), i as usize);
            assert!(xs.iter().all(|x| re.is_match(x)));
        }

        let xs = strings(&words(int(3, 5).unwrap()).call(&mut ctx).unwrap());
        assert!((3..=5).contains(&xs.len()));
    }

    #[test]
    fn test_words_negative_count() {
        assert!(matches!(
            words(-2).generate(),
            Err(GeneratorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_huge_count_is_error() {
        assert!(matches!(
            words(i64::MAX).generate(),
            Err(GeneratorError::InvalidArgument(_))
        ));
        assert!(matches!(
            sentences(i64::MAX).generate(),
            Err(GeneratorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_sentences() {
        let mut ctx = Context::with_seed(11);
        let re = Regex::new(r"^[A-Z]\S*(\s*\S+)*[.!?]$").unwrap();

        let s = sentence().call(&mut ctx).unwrap();
        assert!(re.is_match(s.as_str().unwrap()));

        for i in 0..=10 {
            let xs = strings(&sentences(i).call(&mut ctx).unwrap());
            assert_eq!(xs.len(), i as usize);
            assert!(xs.iter().all(|x| re.is_match(x)));
        }

        let xs = strings(&sentences(int(3, 5).unwrap()).call(&mut ctx).unwrap());
        assert!((3..=5).contains(&xs.len()));
    }

    #[test]
    fn test_join() {
        let abc = || Array::from_iter(["a", "b", "c"]);
        let cases: Vec<(Term, Term, &str)> = vec![
            (abc().into(), " ".into(), r"^a b c$"),
            (abc().into(), pick([" ", "-"]).into(), r"^a[- ]b[- ]c$"),
            (words(3).into(), " ".into(), r"^\S+ \S+ \S+$"),
            (words(3).into(), "".into(), r"^\S+$"),
            (words(3).into(), pick([" ", "-"]).into(), r"^\S+[- ]\S+[- ]\S+$"),
            (words(0).into(), "".into(), r"^$"),
        ];

        let mut ctx = Context::with_seed(5);
        for (input, sep, pattern) in cases {
            let s = join(input, sep).call(&mut ctx).unwrap();
            let s = s.as_str().unwrap();
            assert!(Regex::new(pattern).unwrap().is_match(s), "{s:?} vs {pattern}");
        }
    }

    #[test]
    fn test_join_rejects_non_strings() {
        let err = join(Array::from_iter([1, 2]), ",").generate().unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::TypeMismatch {
                expected: "string",
                found: "int",
                ..
            }
        ));

        let err = join("abc", ",").generate().unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::TypeMismatch {
                expected: "array",
                ..
            }
        ));

        let err = join(Array::from_iter(["a"]), 1).generate().unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::TypeMismatch {
                expected: "string",
                found: "int",
                ..
            }
        ));
    }

    struct Echo;

    impl Corpus for Echo {
        fn random_word(&self, _ctx: &mut Context) -> String {
            "echo".to_string()
        }

        fn random_sentence(&self, _ctx: &mut Context) -> String {
            "Echo echo.".to_string()
        }
    }

    #[test]
    fn test_custom_corpus() {
        let lexicon = Lexicon::new(Echo);
        let s = join(lexicon.words(3), "-").generate().unwrap();
        assert_eq!(s, Value::from("echo-echo-echo"));
        assert_eq!(lexicon.sentence().generate().unwrap(), Value::from("Echo echo."));
    }
}
