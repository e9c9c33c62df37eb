//! Async Propagation Example
//!
//! Tags each `.await` an error crosses on its way up.
//!
//! Run with: `cargo run --example async_propagation --features async`

use error_trail::prelude::*;

async fn read_sector(index: u64) -> Result<Vec<u8>, &'static str> {
    if index > 7 {
        return Err("sector out of range");
    }
    Ok(vec![0; 512])
}

async fn read_block(start: u64) -> TrailResult<Vec<u8>> {
    let mut block = Vec::with_capacity(4 * 512);
    for index in start..start + 4 {
        block.extend(read_sector(index).trail_at(here!()).await?);
    }
    Ok(block)
}

async fn load_file(first_block: u64) -> TrailResult<usize> {
    let block = read_block(first_block)
        .trail_at(here!())
        .await
        .trail_with(here!(), || format!("loading file at block {}", first_block))?;
    Ok(block.len())
}

#[tokio::main]
async fn main() {
    match load_file(2).await {
        Ok(len) => println!("read {} bytes", len),
        Err(err) => println!("{} frames:{}", err.frame_count(), err),
    }

    match load_file(6).await {
        Ok(len) => println!("read {} bytes", len),
        Err(err) => println!("{} frames:{}", err.frame_count(), err),
    }
}
