//! Typed access to the CoinCap `/v2/assets` endpoint, used by the live API
//! test suite under `tests/` and by the `coincap-probe` binary.

pub mod coincap;
pub mod config;
pub mod format;
