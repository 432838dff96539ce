//! Box tree model for arranging windows.
//!
//! A [`LayoutBox`] is either a leaf bound to a window name or a container
//! that stacks its children along an [`Axis`]. Children claim space with a
//! static `size` or a relative `weight`; a box with `size > 0` is static
//! even if it also carries a weight.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Direction in which a container stacks its children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Children are stacked top to bottom and divide the height.
    #[default]
    Row,
    /// Children are placed left to right and divide the width.
    Column,
}

impl Axis {
    /// The dimension divided among children for a region of the given size.
    #[must_use]
    pub fn divides(self, width: i32, height: i32) -> i32 {
        match self {
            Self::Row => height,
            Self::Column => width,
        }
    }
}

/// Picks an axis from the width and height assigned to a box.
pub type AxisResolver = Arc<dyn Fn(i32, i32) -> Axis + Send + Sync>;

/// Picks the children from the width and height assigned to a box.
pub type ChildrenResolver = Arc<dyn Fn(i32, i32) -> Vec<LayoutBox> + Send + Sync>;

#[derive(Clone)]
enum AxisSource {
    Fixed(Axis),
    Computed(AxisResolver),
}

#[derive(Clone)]
enum ChildrenSource {
    Fixed(Arc<[LayoutBox]>),
    Computed(ChildrenResolver),
}

/// A node in the layout tree.
///
/// Cloning is cheap: fixed children live behind an [`Arc`] and are shared
/// between clones.
#[derive(Clone)]
pub struct LayoutBox {
    axis: AxisSource,
    children: ChildrenSource,
    window: Option<String>,
    size: i32,
    weight: i32,
}

impl Default for LayoutBox {
    fn default() -> Self {
        Self {
            axis: AxisSource::Fixed(Axis::Row),
            children: ChildrenSource::Fixed(Arc::from(Vec::new())),
            window: None,
            size: 0,
            weight: 0,
        }
    }
}

impl LayoutBox {
    /// A box with no children and no window. Arranges to nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A leaf box bound to the named window.
    #[must_use]
    pub fn window(name: impl Into<String>) -> Self {
        Self {
            window: Some(name.into()),
            ..Self::default()
        }
    }

    /// A container stacking `children` top to bottom.
    #[must_use]
    pub fn row(children: Vec<LayoutBox>) -> Self {
        Self::default().axis(Axis::Row).children(children)
    }

    /// A container placing `children` left to right.
    #[must_use]
    pub fn column(children: Vec<LayoutBox>) -> Self {
        Self::default().axis(Axis::Column).children(children)
    }

    /// Set a fixed axis, replacing any conditional axis.
    #[must_use]
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = AxisSource::Fixed(axis);
        self
    }

    /// Decide the axis from the assigned width and height at arrange time.
    #[must_use]
    pub fn conditional_axis<F>(mut self, resolve: F) -> Self
    where
        F: Fn(i32, i32) -> Axis + Send + Sync + 'static,
    {
        self.axis = AxisSource::Computed(Arc::new(resolve));
        self
    }

    /// Set fixed children, replacing any conditional children.
    #[must_use]
    pub fn children(mut self, children: Vec<LayoutBox>) -> Self {
        self.children = ChildrenSource::Fixed(Arc::from(children));
        self
    }

    /// Decide the children from the assigned width and height at arrange time.
    ///
    /// The resolver must be pure: it may run once per arrangement of this box.
    #[must_use]
    pub fn conditional_children<F>(mut self, resolve: F) -> Self
    where
        F: Fn(i32, i32) -> Vec<LayoutBox> + Send + Sync + 'static,
    {
        self.children = ChildrenSource::Computed(Arc::new(resolve));
        self
    }

    /// Set the window name. Ignored once the box resolves to any children.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.window = Some(name.into());
        self
    }

    /// Claim a static share of the parent's divided dimension.
    ///
    /// Negative values are stored as 0, which makes the box dynamic.
    #[must_use]
    pub fn size(mut self, size: i32) -> Self {
        self.size = size.max(0);
        self
    }

    /// Claim a relative share of the space left after static siblings.
    ///
    /// Negative values are stored as 0.
    #[must_use]
    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight.max(0);
        self
    }

    /// The window this box represents, if any.
    #[must_use]
    pub fn window_name(&self) -> Option<&str> {
        self.window.as_deref()
    }

    /// The static size, 0 when unset.
    #[must_use]
    pub fn static_size(&self) -> i32 {
        self.size
    }

    /// The weight, 0 when unset.
    #[must_use]
    pub fn weight_value(&self) -> i32 {
        self.weight
    }

    /// Returns true if the box claims a static size.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.size > 0
    }

    /// The axis to use when the box is assigned `width` x `height`.
    #[must_use]
    pub fn resolve_axis(&self, width: i32, height: i32) -> Axis {
        match &self.axis {
            AxisSource::Fixed(axis) => *axis,
            AxisSource::Computed(resolve) => resolve(width, height),
        }
    }

    /// The children to use when the box is assigned `width` x `height`.
    #[must_use]
    pub fn resolve_children(&self, width: i32, height: i32) -> Cow<'_, [LayoutBox]> {
        match &self.children {
            ChildrenSource::Fixed(children) => Cow::Borrowed(children),
            ChildrenSource::Computed(resolve) => Cow::Owned(resolve(width, height)),
        }
    }
}

impl fmt::Debug for LayoutBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("LayoutBox");
        match &self.axis {
            AxisSource::Fixed(axis) => s.field("axis", axis),
            AxisSource::Computed(_) => s.field("axis", &format_args!("<resolver>")),
        };
        match &self.children {
            ChildrenSource::Fixed(children) => s.field("children", children),
            ChildrenSource::Computed(_) => s.field("children", &format_args!("<resolver>")),
        };
        s.field("window", &self.window)
            .field("size", &self.size)
            .field("weight", &self.weight)
            .finish()
    }
}
