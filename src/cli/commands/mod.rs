//! Command implementations

mod clone;
mod commit;
mod config;
mod push;
mod query;
mod remote;
mod stage;
mod status;

pub use clone::clone;
pub use commit::commit;
pub use config::config;
pub use push::push;
pub use query::{classify, discover, is_repo};
pub use remote::remote_url;
pub use stage::stage;
pub use status::{unpushed, unstaged};
