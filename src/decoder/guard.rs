//! Scoped decoder lifecycle guard.

use crate::decoder::engine::Decoder;
use crate::error::Result;
use std::ops::{Deref, DerefMut};

/// Owns a decoder and guarantees `close` runs exactly once, on every exit
/// path out of the guarded scope.
///
/// The happy path calls [`close`](Self::close) explicitly so a close
/// failure is surfaced; on any other path (early return, propagated
/// error) drop closes the decoder and reports a teardown failure to
/// stderr without panicking.
pub struct DecoderGuard<D: Decoder> {
    inner: D,
    closed: bool,
}

impl<D: Decoder> DecoderGuard<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    /// Close the decoder, consuming the guard.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.inner.close()
    }
}

impl<D: Decoder> Deref for DecoderGuard<D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.inner
    }
}

impl<D: Decoder> DerefMut for DecoderGuard<D> {
    fn deref_mut(&mut self) -> &mut D {
        &mut self.inner
    }
}

impl<D: Decoder> Drop for DecoderGuard<D> {
    fn drop(&mut self) {
        if !self.closed {
            self.closed = true;
            if let Err(e) = self.inner.close() {
                eprintln!("wavdec: decoder close failed during teardown: {e}");
            }
        }
    }
}
