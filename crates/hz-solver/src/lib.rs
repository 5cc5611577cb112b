//! ACME DNS-01 challenge solver for Hetzner DNS
//!
//! Implements the host controller's plugin contract (name / initialize /
//! present / cleanup): `present` publishes the challenge TXT record in the
//! right provider zone, `cleanup` finds and removes it afterwards. The zone
//! is taken from per-challenge config when given, otherwise discovered by
//! probing parent domains of the controller's zone guess.
//!
//! Credentials come from a cluster secret store behind the [`SecretStore`]
//! trait; the solver itself keeps no state between calls.

pub mod config;
pub mod secrets;
pub mod solver;
pub mod types;

pub use secrets::{MemorySecretStore, SecretData, SecretStore};
pub use solver::{ChallengeSolver, HetznerSolver, CHALLENGE_TTL};
pub use types::{ChallengeRequest, ProviderConfig, SolverConfig, SolverError, SolverResult};
