pub mod poll_eviction;
