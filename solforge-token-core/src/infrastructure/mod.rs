//! Infrastructure layer - concrete collaborators
//!
//! RPC-backed balance and broadcast plumbing, identity providers, the SPL
//! ledger client, and the notification sink.

pub mod identity;
pub mod ledger;
pub mod notify;
pub mod rpc;

pub use identity::{KeypairIdentity, NullIdentity};
pub use ledger::SplLedgerClient;
pub use notify::LogNotifier;
pub use rpc::{JsonRpcSender, RpcBalanceOracle};
