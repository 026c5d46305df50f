mod blacklist;
mod command;
mod common;
mod credential;
mod lookup;
mod ping;
mod report;
mod request;
mod response;
mod scan;
mod tcp;

pub use blacklist::*;
pub use command::*;
pub use credential::*;
pub use lookup::*;
pub use ping::*;
pub use report::*;
pub use request::*;
pub use response::*;
pub use scan::*;
pub use tcp::*;
