///! Fixed-layout front-end/back-end command message, re-exported from `engine`
///! so the codec (and its tests) live alongside the rest of this workspace's
///! host-testable pure code.
pub use engine::command::{AlertKind, CommandError, Message, Opcode, MESSAGE_LEN};
