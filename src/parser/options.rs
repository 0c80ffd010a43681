//! Configuration for the renderer.

#[cfg(feature = "bon")]
use bon::Builder;

/// The nesting limit used by [`Options::default`].
pub const DEFAULT_MAX_NESTING: usize = 64;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Umbrella options struct.
pub struct Options {
    /// The deepest the renderer will recurse into nested markup.
    ///
    /// The document itself is the first level; a paragraph inside it the
    /// second; emphasis inside the paragraph the third, and so on.  Input
    /// nesting deeper than this fails with
    /// [`RenderError::NestingTooDeep`](crate::RenderError::NestingTooDeep)
    /// instead of growing the stack.
    ///
    /// ```rust
    /// # use creole::{creole_to_html, Options, RenderError};
    /// let options = Options { max_nesting: 2 };
    /// assert_eq!(creole_to_html("plain", &options).unwrap(), "<p>plain</p>");
    /// assert!(matches!(
    ///     creole_to_html("//emphasis//", &options),
    ///     Err(RenderError::NestingTooDeep { limit: 2 })
    /// ));
    /// ```
    #[cfg_attr(feature = "bon", builder(default = DEFAULT_MAX_NESTING))]
    pub max_nesting: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}
