//! Traingate - Training Readiness & Memory Admission Controller
//!
//! Decides whether a model-training job may start, based on two independent
//! signals: the labeled dataset's size and class balance, and the host's
//! available memory versus the job's estimated footprint.
//!
//! The decision core is pure and synchronous: callers resolve the dataset
//! statistics and the memory reading first, then invoke the gate once and
//! get back a [`api::report::ReadinessReport`].

pub mod api;
pub mod constants;
pub mod logic;
