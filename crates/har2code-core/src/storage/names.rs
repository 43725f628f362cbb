//! File-name tokens.

use anyhow::Result;

/// Source of the token embedded in each materialized file name.
pub trait NameGenerator {
    fn next_token(&mut self) -> Result<String>;
}

/// 8 lowercase hex characters from the OS random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNames;

impl NameGenerator for RandomNames {
    fn next_token(&mut self) -> Result<String> {
        let mut buf = [0u8; 4];
        getrandom::getrandom(&mut buf)
            .map_err(|e| anyhow::anyhow!("read OS random source: {e}"))?;
        Ok(hex::encode(buf))
    }
}

/// Deterministic tokens `00000000`, `00000001`, ... for reproducible output.
#[derive(Debug, Clone, Default)]
pub struct SequentialNames {
    next: u32,
}

impl SequentialNames {
    pub fn starting_at(next: u32) -> Self {
        Self { next }
    }
}

impl NameGenerator for SequentialNames {
    fn next_token(&mut self) -> Result<String> {
        let token = format!("{:08x}", self.next);
        self.next = self.next.wrapping_add(1);
        Ok(token)
    }
}
