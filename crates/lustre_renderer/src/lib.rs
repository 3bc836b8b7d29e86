//! Lustre Renderer - dispersive mirror ray tracing
//!
//! Every surface is a tinted mirror with optional emission. A material's
//! dispersion perturbs reflected rays to give glossy and rough looks, and
//! primary rays are jittered the same way for anti-aliasing.
//!
//! Rendering runs in two data-parallel phases over a [`ComputeBackend`]:
//! one invocation per (pixel, sample) traces into an intermediate buffer,
//! then one invocation per pixel averages its samples. Invocations share
//! nothing mutable; randomness comes from precomputed [`EntropyPool`]s so
//! the output is identical across backends and runs.

mod backend;
mod buffer;
mod entropy;
mod intersect;
mod reflect;
mod renderer;
mod sampler;
mod sink;
mod trace;

pub use backend::{Backend, ComputeBackend, Rayon, Serial};
pub use buffer::ImageBuffer;
pub use entropy::{mix64, stream, EntropyError, EntropyPool, DEFAULT_POOL_LEN};
pub use intersect::{find_nearest, intersect, Hit};
pub use reflect::{disperse, reflect};
pub use renderer::{render_reference, RenderContext, RenderError, Renderer};
pub use sampler::{average, primary_ray, render_pixel, trace_sample};
pub use sink::{FrameSink, PpmSequence, RawStream};
pub use trace::{compose, trace_one};

/// Re-export the math types used in the public API
pub use lustre_math::{Line, Vec3};
