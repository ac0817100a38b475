mod dispatch;
mod error;
mod resolve;

#[cfg(test)]
mod mock_server;

pub use dispatch::{dispatch, BatchSummary, Outcome, OutcomeSink};
pub use error::ResolveError;
pub use resolve::{Resolver, DEFAULT_TIMEOUT, MAX_RESPONSE_SIZE};
