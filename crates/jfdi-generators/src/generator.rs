//! Batch generator for producing many documents from one template.

use jfdi_core::{Context, Generator, GeneratorError, Value};
use tracing::{debug, trace};

/// Multiplier used to spread document indices across the seed space.
const INDEX_SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Document generator that produces deterministic documents.
///
/// Every document is generated against its own [`Context`], seeded from the
/// base seed combined with the document index. Depth never carries over from
/// one document to the next, and any document can be regenerated directly
/// from its index.
pub struct DocumentGenerator {
    /// Root generator invoked once per document
    generator: Generator,
    /// Base seed for reproducibility
    seed: u64,
    /// Index of the next document
    index: u64,
}

impl DocumentGenerator {
    /// Create a new document generator with the given root generator and seed.
    pub fn new(generator: Generator, seed: u64) -> Self {
        Self {
            generator,
            seed,
            index: 0,
        }
    }

    /// Set the starting index for document generation.
    ///
    /// Useful for resuming a run: the document at index N is the same
    /// whether it is reached sequentially or by starting at N.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Compute the context seed for a specific index.
    ///
    /// Index 0 uses the base seed unchanged.
    fn seed_for_index(&self, index: u64) -> u64 {
        self.seed.wrapping_add(index.wrapping_mul(INDEX_SEED_MIX))
    }

    /// Get the base seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the index of the next document.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the document at `index` without advancing.
    pub fn document_at(&self, index: u64) -> Result<Value, GeneratorError> {
        let mut ctx = Context::with_seed(self.seed_for_index(index));
        let document = self.generator.call(&mut ctx);
        trace!(index, depth = ctx.depth(), "Generated document");
        document
    }

    /// Generate the next document.
    pub fn next_document(&mut self) -> Result<Value, GeneratorError> {
        let document = self.document_at(self.index);
        if let Err(e) = &document {
            debug!(index = self.index, error = %e, "Document generation failed");
        }
        self.index += 1;
        document
    }

    /// Generate multiple documents.
    ///
    /// Returns an iterator that lazily generates documents.
    pub fn documents(&mut self, count: u64) -> DocumentIterator<'_> {
        DocumentIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Get a reference to the root generator.
    pub fn generator(&self) -> &Generator {
        &self.generator
    }
}

/// Iterator that lazily generates documents.
pub struct DocumentIterator<'a> {
    generator: &'a mut DocumentGenerator,
    remaining: u64,
}

impl Iterator for DocumentIterator<'_> {
    type Item = Result<Value, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_document())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DocumentIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{digits, int, max_depth_object, object};
    use jfdi_core::template;

    fn user_template() -> Generator {
        object([template! {
            "age" => int(18, 80).unwrap(),
            "phone" => digits("###-####"),
            "nested" => max_depth_object(2, [template! { "ok" => true }]),
        }])
    }

    #[test]
    fn test_generate_single_document() {
        let mut generator = DocumentGenerator::new(user_template(), 42);

        let doc = generator.next_document().unwrap();
        let doc = doc.as_object().unwrap();

        let age = doc.value("age").and_then(Value::as_i64).unwrap();
        assert!((18..=80).contains(&age));
        assert_eq!(doc.value("phone").and_then(Value::as_str).unwrap().len(), 8);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = DocumentGenerator::new(user_template(), 42);
        let mut gen2 = DocumentGenerator::new(user_template(), 42);

        for _ in 0..5 {
            assert_eq!(gen1.next_document(), gen2.next_document());
        }
    }

    #[test]
    fn test_first_document_matches_seeded_context() {
        let template = user_template();
        let mut generator = DocumentGenerator::new(template.clone(), 7);

        assert_eq!(generator.generator(), &template);

        let mut ctx = Context::with_seed(7);
        assert_eq!(generator.next_document(), template.call(&mut ctx));
    }

    #[test]
    fn test_depth_does_not_leak_between_documents() {
        let mut generator = DocumentGenerator::new(user_template(), 1);

        for doc in generator.documents(5) {
            let doc = doc.unwrap();
            let nested = doc.as_object().and_then(|o| o.value("nested")).unwrap();
            assert!(!nested.is_null());
        }
    }

    #[test]
    fn test_generate_multiple_documents() {
        let mut generator = DocumentGenerator::new(user_template(), 42);

        let docs: Vec<_> = generator.documents(10).collect();
        assert_eq!(docs.len(), 10);
        assert!(docs.iter().all(Result::is_ok));
        assert_eq!(generator.current_index(), 10);
    }

    #[test]
    fn test_with_start_index() {
        let mut sequential = DocumentGenerator::new(user_template(), 42);
        let docs: Vec<_> = sequential.documents(6).collect();

        let mut resumed = DocumentGenerator::new(user_template(), 42).with_start_index(5);
        assert_eq!(resumed.current_index(), 5);
        assert_eq!(resumed.next_document(), docs[5]);
        assert_eq!(sequential.document_at(3), docs[3]);
    }

    #[test]
    fn test_error_still_advances() {
        let mut generator = DocumentGenerator::new(object([42]), 1);

        assert!(generator.next_document().is_err());
        assert_eq!(generator.current_index(), 1);
    }
}
