mod builder;
mod template;

pub(crate) use builder::parse_mailbox;
pub use builder::MessageBuilder;
pub use template::*;
