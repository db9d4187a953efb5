//! Plain-text rendering of an index for inspection.

use std::io::Write;

use anyhow::{Context, Result};

use crate::index::{RepeatIndex, StreamToken, TokenStream};

/// Tokens shown per suffix before the preview is cut off.
const PREVIEW_TOKENS: usize = 8;

/// Write the suffix-array/LCP table for `stream` to `writer`.
///
/// One row per rank: rank, suffix start position, LCP with the previous
/// rank, and a short preview of the suffix. Boundary markers render as
/// `$i`, where `i` is the occurrence index.
pub fn write_index_table<W: Write>(
    writer: &mut W,
    stream: &TokenStream<String>,
    index: &RepeatIndex,
) -> Result<()> {
    writeln!(writer, "rank\tpos\tlcp\tsuffix")?;
    let lcp = index.lcp_array().values();
    for (rank, &position) in index.suffix_array().positions().iter().enumerate() {
        writeln!(
            writer,
            "{rank}\t{position}\t{}\t{}",
            lcp[rank],
            suffix_preview(stream, position)
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Render the suffix-array/LCP table to a `String`.
pub fn render_index_table(stream: &TokenStream<String>, index: &RepeatIndex) -> Result<String> {
    let mut buffer = Vec::new();
    write_index_table(&mut buffer, stream, index)?;
    String::from_utf8(buffer).context("index table is not valid UTF-8")
}

fn suffix_preview(stream: &TokenStream<String>, position: usize) -> String {
    let mut parts = Vec::new();
    for token in stream.tokens().iter().skip(position).take(PREVIEW_TOKENS) {
        match token {
            StreamToken::Boundary(index) => parts.push(format!("${index}")),
            StreamToken::Content(text) => parts.push(text.clone()),
        }
    }
    if stream.len() > position + PREVIEW_TOKENS {
        parts.push("...".to_string());
    }
    parts.join(" ")
}
