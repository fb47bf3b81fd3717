// src/simulation/results.rs
use super::stats::mean_and_std_dev;
use std::fmt;

/// Per-trial rates for one eavesdropping condition and their summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionStatistics {
    /// Sifted error rate (percent) of every trial, in trial order.
    rates: Vec<f64>,
    mean: f64,
    std_dev: f64,
}

impl ConditionStatistics {
    /// Reduces a rate series to its mean and population standard deviation.
    pub fn from_rates(rates: Vec<f64>) -> Self {
        let (mean, std_dev) = mean_and_std_dev(&rates);
        Self { rates, mean, std_dev }
    }

    /// Raw per-trial rates.
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Mean error rate in percent.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation in percentage points.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Number of trials behind the summary.
    pub fn trials(&self) -> usize {
        self.rates.len()
    }
}

/// Outcome of running every trial for one transmission length under both
/// conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStatistics {
    transmission_length: usize,
    with_eavesdropping: ConditionStatistics,
    without_eavesdropping: ConditionStatistics,
}

impl AggregateStatistics {
    pub(crate) fn new(
        transmission_length: usize,
        with_eavesdropping: ConditionStatistics,
        without_eavesdropping: ConditionStatistics,
    ) -> Self {
        Self {
            transmission_length,
            with_eavesdropping,
            without_eavesdropping,
        }
    }

    /// Photons per trial (`n`).
    pub fn transmission_length(&self) -> usize {
        self.transmission_length
    }

    /// Statistics of the trials with an intercept-resend eavesdropper.
    pub fn with_eavesdropping(&self) -> &ConditionStatistics {
        &self.with_eavesdropping
    }

    /// Statistics of the trials over the plain noisy channel.
    pub fn without_eavesdropping(&self) -> &ConditionStatistics {
        &self.without_eavesdropping
    }

    /// Mean sifted error rate with eavesdropping, in percent.
    pub fn mean_with(&self) -> f64 {
        self.with_eavesdropping.mean()
    }

    /// Population standard deviation of the eavesdropped rates.
    pub fn std_with(&self) -> f64 {
        self.with_eavesdropping.std_dev()
    }

    /// Mean sifted error rate without eavesdropping, in percent.
    pub fn mean_without(&self) -> f64 {
        self.without_eavesdropping.mean()
    }

    /// Population standard deviation of the noise-only rates.
    pub fn std_without(&self) -> f64 {
        self.without_eavesdropping.std_dev()
    }

    /// Per-trial rates with eavesdropping, in trial order.
    pub fn raw_with(&self) -> &[f64] {
        self.with_eavesdropping.rates()
    }

    /// Per-trial rates without eavesdropping, in trial order.
    pub fn raw_without(&self) -> &[f64] {
        self.without_eavesdropping.rates()
    }
}

impl fmt::Display for AggregateStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n = {}", self.transmission_length)?;
        writeln!(
            f,
            "  With Eavesdropping    -> Avg: {:.2}%, Std: {:.2}%",
            self.mean_with(),
            self.std_with()
        )?;
        writeln!(
            f,
            "  Without Eavesdropping -> Avg: {:.2}%, Std: {:.2}%",
            self.mean_without(),
            self.std_without()
        )?;
        write!(f, "{}", "-".repeat(60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_summary_layout() {
        let stats = AggregateStatistics::new(
            10,
            ConditionStatistics::from_rates(vec![20.0, 30.0]),
            ConditionStatistics::from_rates(vec![0.0, 4.0]),
        );
        let expected = format!(
            "n = 10\n  With Eavesdropping    -> Avg: 25.00%, Std: 5.00%\n  Without Eavesdropping -> Avg: 2.00%, Std: 2.00%\n{}",
            "-".repeat(60)
        );
        assert_eq!(stats.to_string(), expected);
        assert_eq!(stats.raw_with(), &[20.0, 30.0]);
        assert_eq!(stats.without_eavesdropping().trials(), 2);
    }

    #[test]
    fn test_shortcut_accessors_follow_their_condition() {
        let stats = AggregateStatistics::new(
            4,
            ConditionStatistics::from_rates(vec![50.0]),
            ConditionStatistics::from_rates(vec![0.0, 10.0]),
        );
        assert_eq!(stats.mean_with(), stats.with_eavesdropping().mean());
        assert_eq!(stats.std_with(), 0.0);
        assert_eq!(stats.mean_without(), 5.0);
        assert_eq!(stats.std_without(), stats.without_eavesdropping().std_dev());
        assert_eq!(stats.raw_without(), &[0.0, 10.0]);
    }
}
