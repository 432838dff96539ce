//! Arranging a box tree into window rectangles.
//!
//! Static children are sized first; weighted children share what is left.

use std::collections::HashMap;

use ratatui::layout::Rect;

use crate::dimensions::{Dimensions, WindowDimensions};
use crate::error::{Error, Result};
use crate::layout::{Axis, LayoutBox};

/// Default nesting limit for [`LayoutCalculator`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for the guarded layout calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Deepest box level allowed below the root. `None` disables the check.
    pub max_depth: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl LayoutConfig {
    /// Configuration without a depth limit.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    /// Set the depth limit.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

#[derive(Clone, Copy, Debug)]
struct Region {
    x0: i32,
    y0: i32,
    width: i32,
    height: i32,
}

/// Arrange `root` in the region starting at `(x0, y0)` spanning
/// `width` x `height` cells.
///
/// Returns the rectangle of every named leaf. Never fails: negative sizes and
/// oversized static boxes produce degenerate rectangles instead. If two
/// leaves share a name, the one visited last wins.
///
/// The tree must be finite. A children resolver that keeps returning new
/// levels recurses until the stack overflows; use
/// [`LayoutCalculator::try_arrange`] to bound the depth.
#[must_use]
pub fn arrange_windows(
    root: &LayoutBox,
    x0: i32,
    y0: i32,
    width: i32,
    height: i32,
) -> WindowDimensions {
    LayoutCalculator::with_config(LayoutConfig::unbounded())
        .try_arrange(root, x0, y0, width, height)
        .unwrap_or_default()
}

/// Layout calculator with a depth guard.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutCalculator {
    config: LayoutConfig,
}

impl LayoutCalculator {
    /// Create a calculator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a custom configuration.
    #[must_use]
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Same as [`arrange_windows`], but stops at the configured depth.
    ///
    /// # Errors
    /// Returns [`Error::DepthExceeded`] if the resolved tree nests deeper
    /// than `max_depth`.
    pub fn try_arrange(
        &self,
        root: &LayoutBox,
        x0: i32,
        y0: i32,
        width: i32,
        height: i32,
    ) -> Result<WindowDimensions> {
        let mut windows = WindowDimensions::new();
        arrange_into(
            root,
            Region {
                x0,
                y0,
                width,
                height,
            },
            0,
            self.config.max_depth,
            &mut windows,
        )?;
        Ok(windows)
    }

    /// Arrange `root` in a ratatui area, omitting windows with no space.
    ///
    /// # Errors
    /// Returns [`Error::DepthExceeded`] if the resolved tree nests deeper
    /// than `max_depth`.
    pub fn arrange_rect(&self, root: &LayoutBox, area: Rect) -> Result<HashMap<String, Rect>> {
        let windows = self.try_arrange(
            root,
            i32::from(area.x),
            i32::from(area.y),
            i32::from(area.width),
            i32::from(area.height),
        )?;
        Ok(windows
            .into_iter()
            .filter_map(|(name, dims)| dims.to_rect().map(|rect| (name, rect)))
            .collect())
    }
}

fn arrange_into(
    node: &LayoutBox,
    region: Region,
    depth: usize,
    limit: Option<usize>,
    windows: &mut WindowDimensions,
) -> Result<()> {
    if let Some(limit) = limit {
        if depth > limit {
            tracing::debug!("layout depth limit {} exceeded", limit);
            return Err(Error::DepthExceeded { limit });
        }
    }

    let children = node.resolve_children(region.width, region.height);
    if children.is_empty() {
        if let Some(name) = node.window_name().filter(|name| !name.is_empty()) {
            windows.insert(
                name.to_owned(),
                Dimensions::new(
                    region.x0,
                    region.y0,
                    region.x0.saturating_add(region.width.saturating_sub(1)),
                    region.y0.saturating_add(region.height.saturating_sub(1)),
                ),
            );
        }
        return Ok(());
    }

    let axis = node.resolve_axis(region.width, region.height);
    let available = axis.divides(region.width, region.height);
    let sizes = calc_sizes(&children, available);
    tracing::trace!(?axis, available, ?sizes, depth, "arranging children");

    let mut offset: i32 = 0;
    for (child, size) in children.iter().zip(sizes) {
        let child_region = match axis {
            Axis::Column => Region {
                x0: region.x0.saturating_add(offset),
                width: size,
                ..region
            },
            Axis::Row => Region {
                y0: region.y0.saturating_add(offset),
                height: size,
                ..region
            },
        };
        arrange_into(child, child_region, depth + 1, limit, windows)?;
        offset = offset.saturating_add(size);
    }

    Ok(())
}

/// Sizes of `boxes` along the divided axis, in order.
pub(crate) fn calc_sizes(boxes: &[LayoutBox], available: i32) -> Vec<i32> {
    let weights: Vec<i32> = boxes.iter().map(LayoutBox::weight_value).collect();
    let mut budgets = normalize_weights(&weights);

    let mut total_weight: i32 = 0;
    let mut reserved: i32 = 0;
    for (b, budget) in boxes.iter().zip(budgets.iter_mut()) {
        if b.is_static() {
            reserved = reserved.saturating_add(b.static_size());
            // size wins: static boxes take no part in the remainder
            *budget = 0;
        } else {
            total_weight = total_weight.saturating_add(*budget);
        }
    }

    let dynamic_space = available.saturating_sub(reserved).max(0);
    let (unit, mut extra) = if total_weight > 0 {
        (dynamic_space / total_weight, dynamic_space % total_weight)
    } else {
        (0, 0)
    };

    let mut sizes: Vec<i32> = boxes
        .iter()
        .zip(&budgets)
        .map(|(b, budget)| {
            if b.is_static() {
                available.min(b.static_size())
            } else {
                unit.saturating_mul(*budget)
            }
        })
        .collect();

    // extra < total_weight, so every pass grants at least one cell
    while extra > 0 {
        for (size, budget) in sizes.iter_mut().zip(budgets.iter_mut()) {
            if extra == 0 {
                break;
            }
            if *budget > 0 {
                *size += 1;
                *budget -= 1;
                extra -= 1;
            }
        }
    }

    sizes
}

/// Divide weights by the greatest common divisor of the positive ones,
/// e.g. `[2, 4, 4]` becomes `[1, 2, 2]`.
pub(crate) fn normalize_weights(weights: &[i32]) -> Vec<i32> {
    let divisor = weights
        .iter()
        .copied()
        .filter(|weight| *weight > 0)
        .fold(0, gcd);
    if divisor <= 1 {
        return weights.to_vec();
    }
    weights.iter().map(|weight| weight / divisor).collect()
}

fn gcd(a: i32, b: i32) -> i32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
