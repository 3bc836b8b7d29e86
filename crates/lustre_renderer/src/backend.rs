//! Data-parallel execution backends.
//!
//! A backend runs one stateless invocation per slot of an output buffer.
//! Kernels only read shared data and return the slot's value, so every
//! backend produces identical buffers.

use rayon::prelude::*;

/// Something that can run `kernel(i)` for every slot `i` of a buffer.
pub trait ComputeBackend: Send + Sync {
    /// Short name, for logs.
    fn name(&self) -> &'static str;

    /// Fill `out[i]` with `kernel(i)` for every `i`.
    ///
    /// Returns once every invocation has finished.
    fn dispatch<T, F>(&self, out: &mut [T], kernel: F)
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send;
}

/// Runs invocations one after another on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct Serial;

impl ComputeBackend for Serial {
    fn name(&self) -> &'static str {
        "serial"
    }

    fn dispatch<T, F>(&self, out: &mut [T], kernel: F)
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = kernel(i);
        }
    }
}

/// Spreads invocations over the rayon thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rayon;

impl ComputeBackend for Rayon {
    fn name(&self) -> &'static str {
        "rayon"
    }

    fn dispatch<T, F>(&self, out: &mut [T], kernel: F)
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        out.par_iter_mut()
            .enumerate()
            .for_each(|(i, slot)| *slot = kernel(i));
    }
}

/// Runtime choice between the backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    Serial,
    #[default]
    Rayon,
}

impl ComputeBackend for Backend {
    fn name(&self) -> &'static str {
        match self {
            Backend::Serial => Serial.name(),
            Backend::Rayon => Rayon.name(),
        }
    }

    fn dispatch<T, F>(&self, out: &mut [T], kernel: F)
    where
        T: Send,
        F: Fn(usize) -> T + Sync + Send,
    {
        match self {
            Backend::Serial => Serial.dispatch(out, kernel),
            Backend::Rayon => Rayon.dispatch(out, kernel),
        }
    }
}
