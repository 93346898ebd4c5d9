use std::fmt;

/// Formats configured tag attributes for interpolation into a tag.
///
/// Each `key="value"` pair is written with a single leading space so the
/// writer can sit directly after the `src`/`href` attribute; when no pairs
/// are configured nothing is written at all.
pub struct AttrWriter<'a> {
    props: &'a [(String, String)],
}

impl<'a> AttrWriter<'a> {
    /// Create a writer over configured attribute pairs.
    pub fn new(props: &'a [(String, String)]) -> Self {
        Self { props }
    }
}

impl fmt::Display for AttrWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.props {
            write!(f, r#" {key}="{value}""#)?;
        }
        Ok(())
    }
}
