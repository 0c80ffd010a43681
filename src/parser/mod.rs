mod blocks;
mod inlines;
pub mod options;

use std::fmt;
use std::io::Write;

use crate::error::RenderError;
use crate::html;
pub use crate::parser::options::Options;

/// What a recognizer did with the input at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Bytes consumed, and already rendered.  Never zero.
    pub consumed: usize,
    /// Whether a block-level construct may start right after the match.
    pub new_block: bool,
}

impl Match {
    fn block(consumed: usize) -> Option<Self> {
        debug_assert!(consumed > 0);
        Some(Match {
            consumed,
            new_block: true,
        })
    }

    fn inline(consumed: usize) -> Option<Self> {
        debug_assert!(consumed > 0);
        Some(Match {
            consumed,
            new_block: false,
        })
    }
}

type RenderResult<T> = Result<T, RenderError>;

/// Where a recognizer may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    /// Only at the start of a block.
    Block,
    /// Anywhere.
    Inline,
}

/// One entry of the recognizer table.
///
/// `attempt` is handed the input from the cursor to the end of the current
/// span.  It either declines with `Ok(None)` having written nothing, or
/// writes the HTML for exactly the bytes it reports as consumed.
struct Recognizer {
    name: &'static str,
    level: Level,
    attempt: fn(&mut Renderer<'_>, &[u8]) -> RenderResult<Option<Match>>,
}

/// The recognizers, in priority order.  At each position the first one to
/// match wins and nothing after it is tried, so this order decides every
/// ambiguous input: e.g. `//**a//**` is emphasis around `**a` because
/// emphasis is tried before bold.  Reordering changes output.
static RECOGNIZERS: [Recognizer; 9] = [
    Recognizer {
        name: "header",
        level: Level::Block,
        attempt: blocks::header,
    },
    Recognizer {
        name: "nowiki_block",
        level: Level::Block,
        attempt: blocks::nowiki_block,
    },
    Recognizer {
        name: "paragraph",
        level: Level::Block,
        attempt: blocks::paragraph,
    },
    Recognizer {
        name: "emphasis",
        level: Level::Inline,
        attempt: inlines::emphasis,
    },
    Recognizer {
        name: "bold",
        level: Level::Inline,
        attempt: inlines::bold,
    },
    Recognizer {
        name: "link",
        level: Level::Inline,
        attempt: inlines::link,
    },
    Recognizer {
        name: "raw_url",
        level: Level::Inline,
        attempt: inlines::raw_url,
    },
    Recognizer {
        name: "nowiki_inline",
        level: Level::Inline,
        attempt: inlines::nowiki_inline,
    },
    Recognizer {
        name: "replacement",
        level: Level::Inline,
        attempt: inlines::replacement,
    },
];

pub struct Renderer<'o> {
    output: &'o mut dyn Write,
    options: &'o Options,
    depth: usize,
}

impl<'o> Renderer<'o> {
    pub fn new(output: &'o mut dyn Write, options: &'o Options) -> Self {
        Renderer {
            output,
            options,
            depth: 0,
        }
    }

    /// Render all of `span`.  `block_start` says whether a block-level
    /// construct may begin at its first byte.
    pub fn process(&mut self, span: &[u8], block_start: bool) -> RenderResult<()> {
        if self.depth >= self.options.max_nesting {
            return Err(RenderError::NestingTooDeep {
                limit: self.options.max_nesting,
            });
        }

        self.depth += 1;
        self.process_span(span, block_start)?;
        self.depth -= 1;
        Ok(())
    }

    fn process_span(&mut self, span: &[u8], mut block_start: bool) -> RenderResult<()> {
        let end = span.len();
        let mut pos = 0;

        while pos < end {
            if block_start {
                while span[pos] == b'\n' {
                    pos += 1;
                    if pos == end {
                        return Ok(());
                    }
                }
            }

            let found = self.recognize(&span[pos..], block_start)?;
            let new_block = match found {
                Some(m) => {
                    pos += m.consumed;
                    m.new_block
                }
                None => {
                    html::escape(self.output, &span[pos..pos + 1])?;
                    pos += 1;
                    false
                }
            };

            if pos + 1 == end && span[pos] == b'\n' {
                // A single trailing newline renders as nothing.
                return Ok(());
            }

            block_start = (pos + 1 < end && span[pos] == b'\n' && span[pos + 1] == b'\n')
                || new_block;
        }

        Ok(())
    }

    fn recognize(&mut self, input: &[u8], block_start: bool) -> RenderResult<Option<Match>> {
        for recognizer in &RECOGNIZERS {
            if recognizer.level == Level::Block && !block_start {
                continue;
            }
            if let Some(m) = (recognizer.attempt)(self, input)? {
                tracing::trace!(
                    recognizer = recognizer.name,
                    consumed = m.consumed,
                    new_block = m.new_block,
                    depth = self.depth,
                    "matched"
                );
                return Ok(Some(m));
            }
        }
        Ok(None)
    }

    fn write(&mut self, bytes: &[u8]) -> RenderResult<()> {
        self.output.write_all(bytes)?;
        Ok(())
    }

    fn escape(&mut self, bytes: &[u8]) -> RenderResult<()> {
        html::escape(self.output, bytes)?;
        Ok(())
    }
}

impl fmt::Debug for Renderer<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Renderer")
            .field("options", &self.options)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}
