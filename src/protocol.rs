use crate::h2;

const HTTP_1_1: &str = "http/1.1";
const SPDY_3: &str = "spdy/3";
const SPDY_3_1: &str = "spdy/3.1";
const HTTP_2: &str = "http/2";
const HQ: &str = "hq";
const H3: &str = "h3";

/// Application protocol spoken by a codec.
///
/// Each protocol has exactly one canonical token, see [`CodecProtocol::as_str`]. Parsing is more
/// lenient, multiple tokens may resolve to the same protocol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CodecProtocol {
    /// `http/1.1`
    #[default]
    Http11,
    /// `spdy/3`
    Spdy3,
    /// `spdy/3.1`
    Spdy31,
    /// `http/2`, also identified as `h2` and `h2c`.
    Http2,
    /// `h3`, including versioned drafts such as `h3-29`.
    Http3,
    /// `hq`, the experimental HTTP over QUIC transport, including versioned drafts such as
    /// `hq-interop`.
    Hq,
}

impl CodecProtocol {
    /// All protocols, in declaration order.
    pub const ALL: [CodecProtocol; 6] = [
        Self::Http11,
        Self::Spdy3,
        Self::Spdy31,
        Self::Http2,
        Self::Http3,
        Self::Hq,
    ];

    /// Resolve protocol from its token.
    ///
    /// `hq` and `h3` are matched by prefix, as their tokens carry a version suffix. Every other
    /// protocol requires an exact match.
    ///
    /// This function never fails, unknown tokens resolve to [`CodecProtocol::Http11`]. Use
    /// [`CodecProtocol::is_recognized`] or [`str::parse`] to reject unknown token.
    pub fn from_token(token: &str) -> CodecProtocol {
        match token {
            HTTP_1_1 => Self::Http11,
            SPDY_3 => Self::Spdy3,
            SPDY_3_1 => Self::Spdy31,
            HTTP_2 | h2::PROTOCOL_STRING | h2::PROTOCOL_CLEARTEXT_STRING => Self::Http2,
            _ if token.starts_with(HQ) => Self::Hq,
            _ if token.starts_with(H3) => Self::Http3,
            _ => Self::Http11,
        }
    }

    /// Returns `true` if `token` exactly matches a known protocol identifier.
    ///
    /// Unlike [`CodecProtocol::from_token`], this does not accept prefixed tokens, so `h3` and
    /// `hq-interop` are not recognized while `hq` is.
    pub fn is_recognized(token: &str) -> bool {
        matches!(
            token,
            HTTP_1_1
                | SPDY_3
                | SPDY_3_1
                | HTTP_2
                | h2::PROTOCOL_STRING
                | h2::PROTOCOL_CLEARTEXT_STRING
                | HQ
        )
    }

    /// Returns the canonical token, e.g: `http/1.1`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Http11 => HTTP_1_1,
            Self::Spdy3 => SPDY_3,
            Self::Spdy31 => SPDY_3_1,
            Self::Http2 => HTTP_2,
            Self::Http3 => H3,
            Self::Hq => HQ,
        }
    }

    /// Returns `true` for any SPDY version.
    #[inline]
    pub const fn is_spdy(&self) -> bool {
        matches!(self, Self::Spdy3 | Self::Spdy31)
    }

    #[inline]
    pub const fn is_http2(&self) -> bool {
        matches!(self, Self::Http2)
    }

    #[inline]
    pub const fn is_hq(&self) -> bool {
        matches!(self, Self::Hq)
    }

    /// Returns `true` if protocol multiplex concurrent streams over a single connection.
    #[inline]
    pub const fn is_parallel(&self) -> bool {
        self.is_spdy() || self.is_http2()
    }
}

impl From<&str> for CodecProtocol {
    #[inline]
    fn from(token: &str) -> Self {
        Self::from_token(token)
    }
}

impl std::str::FromStr for CodecProtocol {
    type Err = UnknownProtocol;

    /// Strict counterpart of [`CodecProtocol::from_token`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_recognized(s) {
            Ok(Self::from_token(s))
        } else {
            Err(UnknownProtocol)
        }
    }
}

impl std::fmt::Display for CodecProtocol {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Error =====

/// Token is not an exact known protocol identifier.
pub struct UnknownProtocol;

impl std::error::Error for UnknownProtocol { }

impl std::fmt::Debug for UnknownProtocol {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown protocol")
    }
}

impl std::fmt::Display for UnknownProtocol {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown protocol")
    }
}

#[cfg(test)]
mod test {
    use super::CodecProtocol::{self, *};
    use crate::h2;

    #[test]
    fn test_canonical_roundtrip() {
        for proto in CodecProtocol::ALL {
            assert_eq!(CodecProtocol::from_token(proto.as_str()), proto, "{proto}");
        }
        assert_eq!(Http3.as_str(), "h3");
        assert_eq!(Hq.as_str(), "hq");
        assert_eq!(Http2.to_string(), "http/2");
    }

    #[test]
    fn test_from_token() {
        assert_eq!(CodecProtocol::from_token("http/1.1"), Http11);
        assert_eq!(CodecProtocol::from_token("spdy/3"), Spdy3);
        assert_eq!(CodecProtocol::from_token("spdy/3.1"), Spdy31);
        assert_eq!(CodecProtocol::from_token("http/2"), Http2);
        assert_eq!(CodecProtocol::from_token(h2::PROTOCOL_STRING), Http2);
        assert_eq!(CodecProtocol::from_token(h2::PROTOCOL_CLEARTEXT_STRING), Http2);
        assert_eq!(CodecProtocol::from_token("h3-29"), Http3);
        assert_eq!(CodecProtocol::from_token("hq-interop"), Hq);

        // exact match only
        assert_eq!(CodecProtocol::from_token("spdy/3.2"), Http11);
        assert_eq!(CodecProtocol::from_token("h2-14"), Http11);
        assert_eq!(CodecProtocol::from_token("HTTP/2"), Http11);

        // fallback
        assert_eq!(CodecProtocol::from_token("webtransport"), Http11);
        assert_eq!(CodecProtocol::from_token(""), Http11);
        assert_eq!(CodecProtocol::from("websocket"), Http11);
    }

    #[test]
    fn test_recognized() {
        for token in ["http/1.1", "spdy/3", "spdy/3.1", "http/2", "h2", "h2c", "hq"] {
            assert!(CodecProtocol::is_recognized(token), "{token}");
        }

        assert!(!CodecProtocol::is_recognized("h3"));
        assert_eq!(CodecProtocol::from_token("h3"), Http3);

        assert!(!CodecProtocol::is_recognized("hq-interop"));
        assert!(!CodecProtocol::is_recognized("webtransport"));
        assert!(!CodecProtocol::is_recognized(" http/1.1"));
        assert!(!CodecProtocol::is_recognized(""));
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!("h2c".parse::<CodecProtocol>().unwrap(), Http2);
        assert_eq!("hq".parse::<CodecProtocol>().unwrap(), Hq);
        assert!("h3".parse::<CodecProtocol>().is_err());
        assert!("webtransport".parse::<CodecProtocol>().is_err());

        let err = "h3-29".parse::<CodecProtocol>().unwrap_err();
        assert_eq!(err.to_string(), "unknown protocol");
    }

    #[test]
    fn test_family() {
        assert!(Spdy3.is_spdy());
        assert!(Spdy31.is_spdy());
        assert!(!Http2.is_spdy());

        assert!(Http2.is_http2());
        assert!(!Http3.is_http2());

        assert!(Hq.is_hq());
        assert!(!Http3.is_hq());

        for proto in CodecProtocol::ALL {
            let expected = matches!(proto, Spdy3 | Spdy31 | Http2);
            assert_eq!(proto.is_parallel(), expected, "{proto}");
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(CodecProtocol::default(), Http11);
    }
}
