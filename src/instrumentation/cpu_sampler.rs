//! Process CPU usage as a percentage of wall-clock time between samples.

use std::time::{Duration, Instant};

/// How long a reported percentage is reused before sampling again.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(2);

/// Wall-clock instant paired with the process's total (user + system) CPU time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProcessTimes {
    pub wall: Instant,
    pub cpu: Duration,
}

impl ProcessTimes {
    /// Reads the current process times. CPU time is zero where it cannot be queried.
    #[must_use]
    pub fn now() -> Self {
        Self {
            wall: Instant::now(),
            cpu: process_cpu_time().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CpuSampler {
    last_wall: Option<Instant>,
    last_cpu: Duration,
}

impl CpuSampler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// CPU percentage since the previous sample. The first sample reports 0.0.
    pub fn sample(&mut self, now: ProcessTimes) -> f64 {
        let percent = match self.last_wall {
            Some(last_wall) => {
                let wall = now.wall.saturating_duration_since(last_wall).as_secs_f64();
                let cpu = now.cpu.saturating_sub(self.last_cpu).as_secs_f64();

                if wall > 0.0 { 100.0 * cpu / wall } else { 0.0 }
            }
            None => 0.0,
        };

        self.last_wall = Some(now.wall);
        self.last_cpu = now.cpu;
        percent
    }
}

/// Rate-limits a [`CpuSampler`] so the status line does not jitter on every keypress.
#[derive(Debug, Clone)]
pub struct CpuMonitor {
    sampler: CpuSampler,
    interval: Duration,
    next_update: Option<Instant>,
    percent: f64,
}

impl CpuMonitor {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            sampler: CpuSampler::new(),
            interval,
            next_update: None,
            percent: 0.0,
        }
    }

    /// Latest percentage, refreshed once `interval` has passed since the last refresh.
    pub fn poll(&mut self, now: ProcessTimes) -> f64 {
        if self.next_update.is_none_or(|next| now.wall >= next) {
            self.percent = self.sampler.sample(now);
            self.next_update = Some(now.wall + self.interval);
        }

        self.percent
    }
}

impl Default for CpuMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL)
    }
}

#[cfg(unix)]
fn process_cpu_time() -> Option<Duration> {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();

    // SAFETY: `usage` is a valid, writable `rusage` for the duration of the call.
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }

    // SAFETY: getrusage returned 0, so it filled the struct.
    let usage = unsafe { usage.assume_init() };

    Some(timeval_to_duration(usage.ru_utime) + timeval_to_duration(usage.ru_stime))
}

#[cfg(not(unix))]
fn process_cpu_time() -> Option<Duration> {
    None
}

#[cfg(unix)]
fn timeval_to_duration(tv: libc::timeval) -> Duration {
    let secs = u64::try_from(tv.tv_sec).unwrap_or(0);
    let micros = u64::try_from(tv.tv_usec).unwrap_or(0);

    Duration::from_secs(secs) + Duration::from_micros(micros)
}
