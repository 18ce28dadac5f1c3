use std::collections::HashMap;

use crate::error::{ErrorCode, LwmaError};
use crate::header::HeaderRecord;
use crate::lwma::next_bits;
use crate::params::LwmaParams;

/// Random access to historical headers by height.
///
/// Implementations must hand out a consistent snapshot for the duration of a
/// retarget call.
pub trait HeaderSource {
    /// Number of headers available.
    fn len(&self) -> usize;

    fn header_at(&self, height: u32) -> Option<&HeaderRecord>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Height-keyed view over a caller-supplied batch of headers.
///
/// The batch need not be sorted. When two headers claim the same height the
/// later one wins.
pub struct RetargetWindow<'a> {
    by_height: HashMap<u32, &'a HeaderRecord>,
}

impl<'a> RetargetWindow<'a> {
    pub fn new(headers: &'a [HeaderRecord]) -> Self {
        let mut by_height = HashMap::with_capacity(headers.len());
        for h in headers {
            by_height.insert(h.height, h);
        }
        Self { by_height }
    }
}

impl HeaderSource for RetargetWindow<'_> {
    fn len(&self) -> usize {
        self.by_height.len()
    }

    fn header_at(&self, height: u32) -> Option<&HeaderRecord> {
        self.by_height.get(&height).copied()
    }
}

/// Contiguous in-memory header history starting at `base_height`.
#[derive(Clone, Debug, Default)]
pub struct HeaderChain {
    base_height: u32,
    headers: Vec<HeaderRecord>,
}

impl HeaderChain {
    pub fn new(base_height: u32) -> Self {
        Self {
            base_height,
            headers: Vec::new(),
        }
    }

    pub fn tip(&self) -> Option<&HeaderRecord> {
        self.headers.last()
    }

    /// Appends the next header; its height must extend the tip by one.
    pub fn push(&mut self, header: HeaderRecord) -> Result<(), LwmaError> {
        let want = match self.tip() {
            Some(tip) => tip.height.checked_add(1).ok_or_else(|| {
                LwmaError::at_height(ErrorCode::HeaderErrLinkage, tip.height, "height overflow")
            })?,
            None => self.base_height,
        };
        if header.height != want {
            return Err(LwmaError::at_height(
                ErrorCode::HeaderErrLinkage,
                header.height,
                format!("expected height {want}, got {}", header.height),
            ));
        }
        self.headers.push(header);
        Ok(())
    }

    /// Drops every header above `height`.
    pub fn truncate_above(&mut self, height: u32) {
        if height < self.base_height {
            self.headers.clear();
            return;
        }
        let keep = (height - self.base_height) as usize + 1;
        self.headers.truncate(keep);
    }

    /// Difficulty bits for the block that would extend the tip at `timestamp`.
    pub fn next_bits(&self, timestamp: u32, params: &LwmaParams) -> Result<u32, LwmaError> {
        let height = match self.tip() {
            Some(tip) => tip.height.saturating_add(1),
            None => {
                return Err(LwmaError::new(
                    ErrorCode::RetargetErrWindowTooShort,
                    "header chain is empty",
                ))
            }
        };
        next_bits(height, timestamp, self, params)
    }
}

impl HeaderSource for HeaderChain {
    fn len(&self) -> usize {
        self.headers.len()
    }

    fn header_at(&self, height: u32) -> Option<&HeaderRecord> {
        let idx = height.checked_sub(self.base_height)? as usize;
        self.headers.get(idx)
    }
}
