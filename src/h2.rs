//! HTTP/2 protocol identifiers.
//!
//! [httpwg](https://httpwg.org/specs/rfc9113.html#versioning)

/// Identifies HTTP/2 over TLS, `h2`.
pub const PROTOCOL_STRING: &str = "h2";

/// Identifies HTTP/2 over cleartext TCP, `h2c`.
///
/// Used as the `Upgrade` header field value when switching from HTTP/1.1.
pub const PROTOCOL_CLEARTEXT_STRING: &str = "h2c";

/// Header field that must accompany an `h2c` upgrade request.
///
/// Its value is the base64url encoded payload of a SETTINGS frame.
pub const SETTINGS_HEADER: &str = "HTTP2-Settings";

/// Client connection preface, sent right after the `101` response of an `h2c` upgrade.
pub const PREFACE: &[u8; 24] = b"PRI * HTTP/2.0\r\n\r\nSM\r\n\r\n";
