//! Error handling for the simulator.
//! One error enum per concern, `thiserror` only, aggregated by [`SimError`].

pub mod config_error;
pub mod data_error;
pub mod edge_error;
pub mod init_error;
pub mod parameter_error;
pub mod retrieval_error;
pub mod reversal_error;
pub mod sim_error;

pub use config_error::ConfigError;
pub use data_error::DataError;
pub use edge_error::EdgeError;
pub use init_error::InitError;
pub use parameter_error::ParameterError;
pub use retrieval_error::RetrievalError;
pub use reversal_error::ReversalError;
pub use sim_error::{SimError, SimResult};
