
use crate::workflow::SamplerHandle;

/// Sampler handle for workflows driven without a runtime.
#[derive(Debug)]
pub(crate) struct NoopSampler;

impl SamplerHandle for NoopSampler {
    fn cancel(self) {}
}
