//! Protocol upgrade negotiation.
//!
//! Both peers advertise a comma separated list of protocols, like NPN. The client lists what it
//! is willing to switch to, and the server answers with its selection in layer-ascending order.
//!
//! Only a single layer is supported, so the first acceptable server entry decides the upgrade.
use crate::log::{debug, warning};
use crate::{CodecProtocol, Token};


/// Side of the connection evaluating the negotiation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Evaluating the server answer to our offer.
    ///
    /// Any server entry that was not offered aborts the negotiation.
    Client,
    /// Evaluating server preferences against the client offer.
    ///
    /// Server entries that were not offered are skipped.
    Server,
}

/// Agreed upon protocol upgrade.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upgrade {
    protocol: CodecProtocol,
    token: Token,
}

impl Upgrade {
    fn new(token: Token) -> Self {
        Self { protocol: CodecProtocol::from_token(&token), token }
    }

    /// Returns the negotiated protocol.
    #[inline]
    pub const fn protocol(&self) -> CodecProtocol {
        self.protocol
    }

    /// Returns the token as selected by server, e.g: `h3-29`.
    ///
    /// This is not normalized, use [`CodecProtocol::as_str`] for the canonical token.
    #[inline]
    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Returns `true` if the token is an exactly known protocol identifier.
    ///
    /// Upgrade to foreign protocol, e.g: `websocket`, resolve to [`CodecProtocol::Http11`] and
    /// returns `false`.
    #[inline]
    pub fn is_native(&self) -> bool {
        CodecProtocol::is_recognized(&self.token)
    }

    /// Consume `Upgrade` into the selected token.
    #[inline]
    pub fn into_token(self) -> Token {
        self.token
    }

    /// Consume `Upgrade` into its parts.
    #[inline]
    pub fn into_parts(self) -> (CodecProtocol, Token) {
        (self.protocol, self.token)
    }
}

/// Split comma separated protocol list.
///
/// Empty entries are dropped, and each entry is trimmed from surrounding white space.
pub fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',')
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.trim_matches(is_lws))
}

fn is_lws(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n' | '\x0b' | '\x0c')
}

/// Negotiate protocol upgrade.
///
/// `client` is the list offered by client, `server` is the list selected by server. Returns
/// `None` if no upgrade takes place, which include either list is empty.
///
/// # Examples
///
/// ```
/// use codec_proto::{CodecProtocol, Role, negotiate};
///
/// let upgrade = negotiate("spdy/3, http/2", "http/2, extra", Role::Server).unwrap();
/// assert_eq!(upgrade.protocol(), CodecProtocol::Http2);
/// assert_eq!(upgrade.token(), "http/2");
///
/// assert!(negotiate("http/1.1", "spdy/3.1", Role::Client).is_none());
/// ```
pub fn negotiate(client: &str, server: &str, role: Role) -> Option<Upgrade> {
    let token = select(client, server, role)?;
    Some(Upgrade::new(Token::copy_from_str(token)))
}

/// Negotiate protocol upgrade, sharing the buffer of `server` list.
///
/// The returned token is a slice of `server` without copying. See [`negotiate`] for details.
pub fn negotiate_shared(client: &str, server: &Token, role: Role) -> Option<Upgrade> {
    let token = select(client, server, role)?;
    Some(Upgrade::new(server.slice_ref(token)))
}

fn select<'a>(client: &str, server: &'a str, role: Role) -> Option<&'a str> {
    if client.is_empty() || server.is_empty() {
        return None;
    }

    let offered = split_list(client).collect::<Vec<_>>();

    for selected in split_list(server) {
        if offered.contains(&selected) {
            debug!("upgrade selected {selected:?}");
            return Some(selected);
        }

        match role {
            Role::Server => {
                debug!("upgrade skip {selected:?}, not offered by client");
            }
            Role::Client => {
                warning!("server selected {selected:?}, which is not offered");
                return None;
            }
        }
    }

    None
}
