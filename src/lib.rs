//! # Boxlayout
//!
//! A recursive box layout engine for terminal UIs.
//!
//! Describe the panel arrangement as a tree of boxes. Leaves name a window;
//! containers stack their children in a row or column. Children claim
//! either a static size or a weighted share of whatever space is left.
//! [`arrange_windows`] turns the tree and a region into a rectangle per
//! window.
//!
//! ## Features
//!
//! - **Static and weighted sizing**: fixed cells first, then proportional
//!   shares with deterministic remainder distribution
//! - **Conditional shape**: axis and children can depend on the space a box
//!   receives, for responsive layouts
//! - **Never fails**: tiny or negative regions produce hidden rectangles
//!   instead of errors
//! - **Ratatui Integration**: `Rect` conversion and a preview widget
//!
//! ## Example
//!
//! ```
//! use boxlayout::{arrange_windows, Dimensions, LayoutBox};
//!
//! let root = LayoutBox::row(vec![
//!     LayoutBox::window("status").size(1),
//!     LayoutBox::window("main").weight(1),
//! ]);
//!
//! let windows = arrange_windows(&root, 0, 0, 10, 10);
//!
//! assert_eq!(windows["status"], Dimensions::new(0, 0, 9, 0));
//! assert_eq!(windows["main"], Dimensions::new(0, 1, 9, 9));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod arrange;
mod dimensions;
mod error;
mod layout;
mod preview;

// Re-export public API
pub use arrange::{arrange_windows, LayoutCalculator, LayoutConfig, DEFAULT_MAX_DEPTH};
pub use dimensions::{Dimensions, WindowDimensions};
pub use error::{Error, Result};
pub use layout::{Axis, AxisResolver, ChildrenResolver, LayoutBox};
pub use preview::LayoutPreview;
