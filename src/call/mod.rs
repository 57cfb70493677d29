//! Operator side of a call: the current conversation, the archive of
//! finished calls, and the transports that fetch assistant replies.

mod models;
mod session;
mod transport;

pub use models::{Archive, CallStatus, Conversation, Speaker, Turn};
pub use session::{CallError, CallSession, PendingReply};
pub use transport::{HttpTransport, LocalTransport, ReplyTransport};
