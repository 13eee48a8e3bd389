use bytes::Bytes;

/// A protocol token.
///
/// A cheaply cloneable [`Bytes`] backed str, so a negotiated token can share the buffer of the
/// header it came from.
#[derive(Clone, Default)]
pub struct Token {
    bytes: Bytes,
}

impl Token {
    /// Create new empty [`Token`].
    #[inline]
    pub const fn new() -> Token {
        Self { bytes: Bytes::new() }
    }

    /// Creates a new [`Token`] from a static str, without copying.
    #[inline]
    pub const fn from_static(string: &'static str) -> Token {
        Self { bytes: Bytes::from_static(string.as_bytes()) }
    }

    /// Creates [`Token`] by copying given str.
    #[inline]
    pub fn copy_from_str(string: &str) -> Token {
        Self { bytes: Bytes::copy_from_slice(string.as_bytes()) }
    }

    /// Converts a [`Bytes`] to a [`Token`].
    pub fn from_utf8(bytes: Bytes) -> Result<Token, std::str::Utf8Error> {
        std::str::from_utf8(&bytes)?;
        Ok(Self { bytes })
    }

    /// Returns a slice of self that is equivalent to the given `subset`.
    ///
    /// This operation is `O(1)`.
    ///
    /// # Panics
    ///
    /// Requires that the given `subset` is in fact contained within the `Token` buffer;
    /// otherwise this function will panic.
    #[inline]
    pub fn slice_ref(&self, subset: &str) -> Token {
        Self { bytes: self.bytes.slice_ref(subset.as_bytes()) }
    }

    /// Extracts a string slice containing the entire `Token`.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: all constructor validate or take a str
        unsafe { std::str::from_utf8_unchecked(&self.bytes) }
    }

    /// Converts a `Token` into a [`Bytes`].
    #[inline]
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl std::ops::Deref for Token {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Token {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for Token {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl From<String> for Token {
    #[inline]
    fn from(value: String) -> Self {
        Self { bytes: Bytes::from(value) }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.as_str(), f)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self.as_str(), f)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        str::eq(self.as_str(), other.as_str())
    }
}

impl Eq for Token { }

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        str::eq(self.as_str(), other)
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        str::eq(self.as_str(), *other)
    }
}
