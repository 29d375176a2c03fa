//! Book identifier generation

use rand::Rng;

use crate::models::book::BOOK_ID_LEN;

/// URL-safe alphabet (64 symbols), same set nanoid uses
const ALPHABET: &[u8; 64] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Source of fresh book identifiers
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random fixed-length tokens over a URL-safe alphabet
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    len: usize,
}

impl RandomIdGenerator {
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(BOOK_ID_LEN)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..self.len)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
