//! Minimal collation example detecting repeated blocks across two witnesses.

use stemma::{render_index_table, RepeatIndex, Witness};

fn main() -> anyhow::Result<()> {
    let witnesses = [
        Witness::plain("w1", "the quick brown fox jumps over the lazy dog"),
        Witness::plain("w2", "the quick brown dog leaps over the lazy fox"),
    ];

    let stream = stemma::token_stream(&witnesses);
    let index = RepeatIndex::build(&stream);

    for (idx, block) in index.blocks().iter().enumerate() {
        println!(
            "block {}: positions={} ranges={}",
            idx + 1,
            block.cardinality(),
            block.ranges()
        );
    }

    println!();
    print!("{}", render_index_table(&stream, &index)?);

    Ok(())
}
