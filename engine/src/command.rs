///! Fixed-layout front-end/back-end command message.
///!
///! Wire shape: one big-endian `u16` opcode followed by four big-endian `i32`
///! parameters — 18 bytes total, modeled directly on the originating
///! `struct fb_command { unsigned short id; int iparam[4]; }`. Encoded by hand
///! (no `postcard`/`serde`) the same way the teacher's own `data_stream::DataBlock`
///! hand-rolls its `to_be_bytes` framing rather than going through a generic
///! serializer, since this is a fixed C-struct-shaped format, not a key-path
///! settings tree. Lives in this crate (rather than the firmware crate's
///! `net::command`, which just re-exports it) so it stays host-testable.
use core::fmt;
use num_enum::{IntoPrimitive, TryFromPrimitive};

pub const MESSAGE_LEN: usize = 18;

#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum Opcode {
    AcqStart = 0x0001,
    AcqStop = 0x0002,
    AcqCmdF2B = 0x0003,
    AcqCmdB2F = 0x0004,
    AcqAlert = 0x0005,
    B2fDataSyn = 0x1001,
    F2bDataAck = 0x1002,
    F2bResetSyn = 0x1003,
    B2fResetAck = 0x1004,
    F2bGetBufSize = 0x1005,
    B2fPutBufSize = 0x1006,
    F2bGetTotalCount = 0x1007,
    B2fPutTotalCount = 0x1008,
    F2bTrigtest = 0x1009,
}

/// `ACQ_ALERT`'s `iparam[0]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum AlertKind {
    DataLoss = 0x0001,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    Truncated,
    UnknownOpcode(u16),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Truncated => write!(f, "message shorter than {MESSAGE_LEN} bytes"),
            CommandError::UnknownOpcode(id) => write!(f, "unknown opcode 0x{id:04x}"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub opcode: Opcode,
    pub iparam: [i32; 4],
}

impl Message {
    pub const fn new(opcode: Opcode, iparam: [i32; 4]) -> Self {
        Message { opcode, iparam }
    }

    pub fn encode(&self) -> [u8; MESSAGE_LEN] {
        let mut buf = [0u8; MESSAGE_LEN];
        let id: u16 = self.opcode.into();
        buf[0..2].copy_from_slice(&id.to_be_bytes());
        for (i, p) in self.iparam.iter().enumerate() {
            let start = 2 + i * 4;
            buf[start..start + 4].copy_from_slice(&p.to_be_bytes());
        }
        buf
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, CommandError> {
        if bytes.len() < MESSAGE_LEN {
            return Err(CommandError::Truncated);
        }
        let id = u16::from_be_bytes([bytes[0], bytes[1]]);
        let opcode = Opcode::try_from(id).map_err(|_| CommandError::UnknownOpcode(id))?;
        let mut iparam = [0i32; 4];
        for (i, slot) in iparam.iter_mut().enumerate() {
            let start = 2 + i * 4;
            *slot = i32::from_be_bytes([
                bytes[start],
                bytes[start + 1],
                bytes[start + 2],
                bytes[start + 3],
            ]);
        }
        Ok(Message { opcode, iparam })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_opcodes() -> [Opcode; 13] {
        [
            Opcode::AcqStart,
            Opcode::AcqStop,
            Opcode::AcqCmdF2B,
            Opcode::AcqCmdB2F,
            Opcode::AcqAlert,
            Opcode::B2fDataSyn,
            Opcode::F2bDataAck,
            Opcode::F2bResetSyn,
            Opcode::B2fResetAck,
            Opcode::F2bGetBufSize,
            Opcode::B2fPutBufSize,
            Opcode::F2bGetTotalCount,
            Opcode::F2bTrigtest,
        ]
    }

    #[test]
    fn round_trips_every_opcode() {
        for opcode in all_opcodes() {
            let msg = Message::new(opcode, [1, -2, 3, -4]);
            let bytes = msg.encode();
            assert_eq!(bytes.len(), MESSAGE_LEN);
            assert_eq!(Message::decode(&bytes).unwrap(), msg);
        }
    }

    #[test]
    fn rejects_truncated_messages() {
        let msg = Message::new(Opcode::AcqStart, [0, 0, 0, 0]);
        let bytes = msg.encode();
        assert_eq!(
            Message::decode(&bytes[..MESSAGE_LEN - 1]),
            Err(CommandError::Truncated)
        );
    }

    #[test]
    fn rejects_unknown_opcode() {
        let mut bytes = Message::new(Opcode::AcqStart, [0, 0, 0, 0]).encode();
        bytes[0..2].copy_from_slice(&0xBEEFu16.to_be_bytes());
        assert_eq!(Message::decode(&bytes), Err(CommandError::UnknownOpcode(0xBEEF)));
    }

    #[test]
    fn alert_kind_round_trips() {
        let kind: i32 = AlertKind::DataLoss.into();
        assert_eq!(AlertKind::try_from(kind), Ok(AlertKind::DataLoss));
    }
}
