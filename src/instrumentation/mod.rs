//! Runtime measurements shown on the status line.

pub mod cpu_sampler;
