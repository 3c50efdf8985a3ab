//! Plain string quoting.

/// Surrounds a string with quotes.
///
/// No escaping is done if the string already contains quotes.
///
/// # Examples
///
/// ```rust
/// use meliora::util::QuoteExt;
///
/// assert_eq!("Hello, World!".quote(), "\"Hello, World!\"");
/// assert_eq!("Hello, World!".squote(), "'Hello, World!'");
/// ```
pub trait QuoteExt {
    /// Wraps the string in double quotes.
    fn quote(&self) -> String;

    /// Wraps the string in single quotes.
    fn squote(&self) -> String;
}

impl QuoteExt for str {
    fn quote(&self) -> String {
        format!("\"{self}\"")
    }

    fn squote(&self) -> String {
        format!("'{self}'")
    }
}
