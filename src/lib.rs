//! plotdeck - page through plot frames in the terminal.
//!
//! plotdeck keeps an ordered deck of plot frames inside a single terminal
//! window and shows one at a time. Frames are paged with the arrow keys,
//! Home/End jump to either end and Delete toggles a frame-number label.
//!
//! # Features
//!
//! - Line plots, heatmap images and grids of subplots
//! - Frames created in a loop or one at a time
//! - Clamped keyboard navigation
//! - Optional "index/total" label on the visible frame
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use plotdeck::sequence::{Direction, FrameSequence};
//!
//! let mut deck = FrameSequence::new();
//! for (i, ax) in (0..3).zip(&mut deck) {
//!     ax.plot_y(&[0.0, i as f64, 1.0]);
//!     ax.set_title(format!("Line {}", i + 1));
//! }
//!
//! deck.navigate(Direction::First);
//! deck.toggle_numbering();
//! assert_eq!(deck.overlay().map(|o| o.text.as_str()), Some("1/3"));
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod demo;
pub mod error;
pub mod sequence;
pub mod ui;
pub mod util;

pub use error::{PlotDeckError, Result};
pub use sequence::{Axes, Direction, FrameSequence};
