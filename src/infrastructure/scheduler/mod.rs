//! Deferred task scheduling adapters.

mod timer_queue;

pub use timer_queue::TimerQueue;
