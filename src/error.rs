use std::io;

/// Ways a render can fail.
///
/// Markup itself never fails to render; see the crate documentation.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Writing to the output failed.  Rendering stops at the first failed
    /// write.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// The markup nests deeper than [`Options::max_nesting`](crate::Options::max_nesting).
    #[error("markup is nested more than {limit} levels deep")]
    NestingTooDeep {
        /// The limit that was exceeded.
        limit: usize,
    },
}
