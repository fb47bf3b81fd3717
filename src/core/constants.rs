//! Reference values for the BB84 experiment.

/// Constants describing the reference experiment design.
pub mod qkd_constants {
    /// Channel/detector noise floor applied to every basis-matched measurement.
    pub const DEFAULT_NOISE_PROBABILITY: f64 = 0.02;
    /// Repetitions per transmission length in the reference experiment.
    pub const DEFAULT_TRIALS: usize = 1000;
    /// Transmission lengths of the reference experiment.
    pub const DEFAULT_TRANSMISSION_LENGTHS: [usize; 3] = [10, 100, 1000];
    /// Expected sifted error rate (fraction) an intercept-resend attack adds on a noiseless channel.
    pub const INTERCEPT_RESEND_QBER: f64 = 0.25;
    /// Below this many photons an empty sift is common enough to skew averages.
    pub const SMALL_TRANSMISSION_LENGTH: usize = 4;
}
