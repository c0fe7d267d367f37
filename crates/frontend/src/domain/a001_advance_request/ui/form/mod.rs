pub mod cash;
pub mod check;
pub mod common;
pub mod deposit;
pub mod model;
pub mod transfer;
pub mod view_model;

pub use cash::CashFormView;
pub use check::CheckFormView;
pub use deposit::DepositFormView;
pub use transfer::TransferFormView;
