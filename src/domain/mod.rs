pub mod account;
pub mod error;
pub mod operation;
pub mod outcome;
pub mod traits;
pub mod window;

pub use account::{AccountDetail, AccountId, Balance};
pub use error::Error;
pub use operation::{Command, Operation};
pub use outcome::OperationResult;
pub use traits::{BalanceStore, DeadLetterQueue, OperationStream};
pub use window::Window;
