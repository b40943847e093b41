//! Image module: pixel-source abstraction, borrowed views, and utilities.
//!
//! Components
//! - `traits`: the `PixelSource` abstraction the detector consumes; any pixel
//!   grid that can answer `rgb(x, y)` and `dims()` can feed the pipeline.
//! - `rgb8`: read-only `ImageRgb8<'a>` view over interleaved 8-bit RGB
//!   buffers.
//! - `gray`: owned `GrayBuffer` for 8-bit grayscale output (edge maps,
//!   rebuilt line images).
//! - `io`: helpers for loading RGB images, saving grayscale PNGs, and
//!   writing JSON reports.
//!
//! Design goals
//! - Keep hot loops simple and cache-friendly via row-major access.
//! - Make ownership explicit: views borrow external data; `GrayBuffer` owns
//!   and mutates.
//! - Container formats (BMP/PNG/JPEG decoding) stay behind `io`; the
//!   detector itself never touches files.
pub mod gray;
pub mod io;
pub mod rgb8;
pub mod traits;

pub use self::gray::GrayBuffer;
pub use self::rgb8::ImageRgb8;
pub use self::traits::PixelSource;

/// Grayscale value of a fully dark pixel.
pub const GRAYSCALE_BLACK: u8 = 0x00;
/// Grayscale value of a fully lit pixel.
pub const GRAYSCALE_WHITE: u8 = 0xFF;
