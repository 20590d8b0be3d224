//! Random nonce source, injectable like [`crate::time::Clock`].

/// Source of 32-bit client nonces
pub trait NonceSource: Send + Sync {
    /// Produce the next nonce
    fn next_nonce(&self) -> u32;
}

/// Thread-local RNG backed nonces
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNonce;

impl NonceSource for RandomNonce {
    fn next_nonce(&self) -> u32 {
        rand::random::<u32>()
    }
}

/// Always returns the same nonce (for tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedNonce(pub u32);

impl NonceSource for FixedNonce {
    fn next_nonce(&self) -> u32 {
        self.0
    }
}
