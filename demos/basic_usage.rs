// ============================================================================
// Basic Usage Example
// ============================================================================

use packed_decimal::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn main() {
    #[cfg(feature = "logging")]
    packed_decimal::utils::init_logging(tracing::Level::DEBUG);

    println!("=== Packed Decimal Example ===\n");

    // Raw words as a debugger would read them from a struct
    println!("Decoding raw words...");
    let words = [
        (0u32, 0u32, 0u32, 0u32),
        (12345, 0, 0, 0x0002_0000),
        (12345, 0, 0, 0x8002_0000),
        (100, 0, 0, 0x0003_0000),
        (u32::MAX, u32::MAX, u32::MAX, 0x001C_0000),
    ];
    for (low, mid, high, flags) in words {
        println!(
            "  low={:#010x} mid={:#010x} high={:#010x} flags={:#010x} -> {}",
            low,
            mid,
            high,
            flags,
            decode(low, mid, high, flags)
        );
    }

    // Bytes as a file inspector would read them
    println!("\nDecoding a byte buffer...");
    let value = Decimal::from_str("-98765.4321").unwrap();
    let bytes = PackedDecimal::from(value).to_le_bytes();
    let decoder = DecimalDecoder::strict();
    match decoder.decode_bytes(&bytes) {
        Ok(decoded) => println!("  {:?} -> {} ({:e})", bytes, decoded, decoded),
        Err(e) => println!("  error: {}", e),
    }

    // Out-of-range scale: strict rejects, render() still shows something
    println!("\nOut-of-range scale...");
    let bad = PackedDecimal::new(7, 0, 0, 0x001E_0000);
    match decoder.decode_packed(&bad) {
        Ok(decoded) => println!("  decoded: {}", decoded),
        Err(e) => println!("  strict: {}", e),
    }
    println!("  best-effort: {}", decoder.render(&bad));

    // Renderers from configuration
    println!("\nRenderers...");
    for style in [
        RenderStyle::Plain,
        RenderStyle::Scientific,
        RenderStyle::ScientificUpper,
    ] {
        let renderer = create_from_config(DecodeConfig::new().with_render_style(style));
        println!(
            "  {:<16} {}",
            renderer.name(),
            renderer.render_words(12345, 0, 0, 0x8002_0000)
        );
    }

    println!("\n=== Example Complete ===");
}
