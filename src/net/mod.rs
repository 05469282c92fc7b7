///! Network- and transport-adjacent modules.
///!
///! The command channel's wire *shape* (see [`command`]) is in scope; the
///! transport it rides over (sockets, MQTT, serial) is not, matching the
///! originating front-end/back-end split where only the message struct itself
///! is shared code.
pub mod command;
