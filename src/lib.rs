//! HTTP Codec Protocol Selection
//!
//! Identifies the application protocol a peer speaks from its protocol token, and negotiates a
//! protocol upgrade from the comma separated lists exchanged by client and server.
//!
//! ```
//! use codec_proto::{CodecProtocol, Role, negotiate};
//!
//! assert_eq!(CodecProtocol::from_token("h3-29"), CodecProtocol::Http3);
//!
//! let upgrade = negotiate("spdy/3.1, http/1.1", "spdy/3.1", Role::Server).unwrap();
//! assert_eq!(upgrade.protocol(), CodecProtocol::Spdy31);
//! assert_eq!(upgrade.token(), "spdy/3.1");
//! ```
#![warn(missing_debug_implementations)]

mod log;

pub mod h2;
pub mod protocol;
pub mod token;
pub mod upgrade;

pub use protocol::{CodecProtocol, UnknownProtocol};
pub use token::Token;
pub use upgrade::{Role, Upgrade, negotiate, negotiate_shared};
