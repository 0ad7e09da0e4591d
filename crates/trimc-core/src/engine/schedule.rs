use super::config::ScheduleConfig;
use std::collections::BTreeSet;

/// Log-spaced measurement checkpoints of every cycle, merged into one timeline.
///
/// Entry `k` is the pair `(times[k], cycles[k])`; entries are unique and sorted by time, then
/// cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogSchedule {
    times: Vec<u64>,
    cycles: Vec<usize>,
}

impl LogSchedule {
    /// Builds the schedule: cycle `c` measures at `tw·c + floor(10^(x·log10(tau)/(n_log − 1)))`
    /// for `x` in `0..n_log`.
    pub fn new(tau: u64, waiting_time: u64, cycles: usize, log_points: usize) -> Self {
        let mut entries = BTreeSet::new();
        let exponent_step = if log_points > 1 {
            (tau as f64).log10() / (log_points - 1) as f64
        } else {
            0.0
        };
        for c in 0..cycles {
            let start = waiting_time * c as u64;
            for x in 0..log_points {
                let offset = 10f64.powf(x as f64 * exponent_step).floor() as u64;
                entries.insert((start + offset, c));
            }
        }
        let (times, cycles) = entries.into_iter().unzip();
        Self { times, cycles }
    }

    pub fn from_config(config: &ScheduleConfig) -> Self {
        Self::new(
            config.tau,
            config.waiting_time,
            config.cycles,
            config.log_points,
        )
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[u64] {
        &self.times
    }

    pub fn cycles(&self) -> &[usize] {
        &self.cycles
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.times.iter().copied().zip(self.cycles.iter().copied())
    }

    /// Index range of the entries measured at time `t`.
    pub fn entries_at(&self, t: u64) -> std::ops::Range<usize> {
        let start = self.times.partition_point(|&x| x < t);
        let end = self.times.partition_point(|&x| x <= t);
        start..end
    }
}

/// Linearly spaced snapshot times: `tw·c + floor(tau / n_lin)·k` for `k` in `1..=n_lin` and every
/// cycle `c`, sorted, duplicates kept. Empty when `lin_points` is zero.
pub fn linear_schedule(tau: u64, waiting_time: u64, cycles: usize, lin_points: usize) -> Vec<u64> {
    if lin_points == 0 {
        return Vec::new();
    }
    let spacing = tau / lin_points as u64;
    let mut times: Vec<u64> = (0..cycles as u64)
        .flat_map(|c| (1..=lin_points as u64).map(move |k| waiting_time * c + spacing * k))
        .collect();
    times.sort_unstable();
    times
}
