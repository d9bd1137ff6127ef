//! Text renderings of quadtrees, for debugging and for eyeballing how a set of points partitions the plane.
//!
//! Two renderings are provided:
//! - [`Quadtree::plot`] draws the points on a character grid, optionally along with the lines each node partitions its part of the plane with;
//! - [`Quadtree::sideways`] lists the nodes in pre-order, indenting each one according to its depth.
//!
//! Plotting only makes sense for non-negative integer ordinates and labels which are single characters, and requires that no two points share an `x` or a `y` ordinate, since a shared ordinate would put a point on its ancestor's partition line. The tree itself does not enforce any of this: violations are reported by `plot` as a [`PlotError`].
//!
//! [`Quadtree::plot`]: ../quadtree/struct.Quadtree.html#method.plot " "
//! [`Quadtree::sideways`]: ../quadtree/struct.Quadtree.html#method.sideways " "
//! [`PlotError`]: enum.PlotError.html " "

use core::{
    convert::{TryFrom, TryInto},
    fmt::{Debug, Display, Write},
};
use thiserror::Error;
use crate::{
    point::{Point, Quadrant},
    quadtree::{Quadtree, Node},
    storage::Storage,
};

/// The error type returned by [`Quadtree::plot`] when a point cannot be placed on the grid.
///
/// Every variant carries the label of the offending node.
///
/// [`Quadtree::plot`]: ../quadtree/struct.Quadtree.html#method.plot " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum PlotError {
    /// The requested grid is too large to be addressed.
    #[error("a grid ending at ({max_x},{max_y}) is too large to plot")]
    GridTooLarge {
        /// The largest `x` ordinate requested.
        max_x: usize,
        /// The largest `y` ordinate requested.
        max_y: usize,
    },
    /// One of the ordinates of the point is negative or does not fit into a `usize`.
    #[error("point {label:?} has an ordinate which cannot be used as a grid index")]
    UnrepresentableOrdinate {
        /// The label of the node.
        label: char,
    },
    /// The point lies beyond the right or bottom edge of the grid.
    #[error("point {label:?} at ({x},{y}) lies outside of the grid, which ends at ({max_x},{max_y})")]
    OutOfGrid {
        /// The label of the node.
        label: char,
        /// The `x` ordinate of the point.
        x: usize,
        /// The `y` ordinate of the point.
        y: usize,
        /// The largest `x` ordinate on the grid.
        max_x: usize,
        /// The largest `y` ordinate on the grid.
        max_y: usize,
    },
    /// The point lies outside of the part of the grid its ancestors partitioned out for it, which happens when it shares an ordinate with one of them.
    #[error("point {label:?} at ({x},{y}) lies on a partition line of one of its ancestors")]
    OutsideRegion {
        /// The label of the node.
        label: char,
        /// The `x` ordinate of the point.
        x: usize,
        /// The `y` ordinate of the point.
        y: usize,
    },
}

/// An inclusive rectangle of grid cells. Empty if a minimum exceeds its maximum.
#[derive(Copy, Clone, Debug)]
struct Region {
    x_min: isize,
    x_max: isize,
    y_min: isize,
    y_max: isize,
}
impl Region {
    fn contains(self, x: isize, y: isize) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
    /// The part of the region which a node at `(x, y)` hands to its child in the specified quadrant.
    fn split(self, x: isize, y: isize, quadrant: Quadrant) -> Self {
        let (x_min, x_max) = match quadrant {
            Quadrant::NorthWest | Quadrant::SouthWest => (self.x_min, x - 1),
            Quadrant::NorthEast | Quadrant::SouthEast => (x + 1, self.x_max),
        };
        let (y_min, y_max) = match quadrant {
            Quadrant::NorthWest | Quadrant::NorthEast => (self.y_min, y - 1),
            Quadrant::SouthWest | Quadrant::SouthEast => (y + 1, self.y_max),
        };
        Self { x_min, x_max, y_min, y_max }
    }
}

/// Converts the last ordinate of the grid into a region bound, as long as one cell past it is still addressable.
fn grid_bound(max: usize) -> Option<isize> {
    isize::try_from(max).ok().filter(|&max| max < isize::MAX)
}

fn grid_position<T>(point: &Point<T>, label: char) -> Result<(usize, usize), PlotError>
where T: Copy + TryInto<usize>,
{
    let unrepresentable = |_| PlotError::UnrepresentableOrdinate { label };
    let x = (*point.x()).try_into().map_err(unrepresentable)?;
    let y = (*point.y()).try_into().map_err(unrepresentable)?;
    Ok((x, y))
}

impl<T, L, K, S> Quadtree<T, L, K, S>
where
    T: Copy + TryInto<usize>,
    L: Clone + Into<char>,
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Draws the tree on a grid spanning from `(0, 0)` to `(max_x, max_y)`, framed by a border.
    ///
    /// Nodes are drawn in pre-order. Each node writes its label at its point; if `draw_lines` is set, it first draws a horizontal line of `-` through its row and a vertical line of `|` through its column, both limited to the part of the grid its ancestors partitioned out for it. Rows grow downwards.
    ///
    /// # Errors
    /// Fails with [`PlotError::GridTooLarge`] if `max_x` or `max_y` is `isize::MAX` or above. See [`PlotError`] for the ways a node can fail to be placed.
    ///
    /// [`PlotError`]: ../render/enum.PlotError.html " "
    /// [`PlotError::GridTooLarge`]: ../render/enum.PlotError.html#variant.GridTooLarge " "
    ///
    /// # Example
    /// ```rust
    /// # use quadrille::{Quadtree, Point};
    /// let mut tree = Quadtree::<u32, char>::new();
    /// tree.insert(Point::new(2, 2), 'A');
    /// tree.insert(Point::new(0, 0), 'B');
    /// tree.insert(Point::new(4, 3), 'C');
    ///
    /// let plot = tree.plot(4, 4, true).unwrap();
    /// assert_eq!(plot, "\
    /// +-----+
    /// |B-|  |
    /// || |  |
    /// |--A--|
    /// |  |-C|
    /// |  | ||
    /// +-----+
    /// ");
    /// ```
    pub fn plot(&self, max_x: usize, max_y: usize, draw_lines: bool) -> Result<String, PlotError> {
        let (grid_x, grid_y) = match (grid_bound(max_x), grid_bound(max_y)) {
            (Some(grid_x), Some(grid_y)) => (grid_x, grid_y),
            _ => return Err(PlotError::GridTooLarge { max_x, max_y }),
        };
        let mut board = vec![vec![' '; max_x + 1]; max_y + 1];
        if let Some(root) = self.root() {
            let grid = Region {
                x_min: 0,
                x_max: grid_x,
                y_min: 0,
                y_max: grid_y,
            };
            let mut stack = vec![(root, grid)];
            while let Some((node, region)) = stack.pop() {
                let label: char = node.label().clone().into();
                let (x, y) = grid_position(node.point(), label)?;
                if x > max_x || y > max_y {
                    return Err(PlotError::OutOfGrid { label, x, y, max_x, max_y });
                }
                let (ix, iy) = (x as isize, y as isize);
                if !region.contains(ix, iy) {
                    return Err(PlotError::OutsideRegion { label, x, y });
                }
                if draw_lines {
                    for column in region.x_min..=region.x_max {
                        board[y][column as usize] = '-';
                    }
                    for row in region.y_min..=region.y_max {
                        board[row as usize][x] = '|';
                    }
                }
                board[y][x] = label;
                // Reversed so that the north-west child is popped first
                let children = node.children();
                for quadrant in Quadrant::ALL.iter().rev() {
                    if let Some(child) = &children[quadrant.index()] {
                        stack.push((child.clone(), region.split(ix, iy, *quadrant)));
                    }
                }
            }
        }

        let border = format!("+{}+\n", "-".repeat(max_x + 1));
        let mut plot = String::with_capacity(border.len() * (max_y + 3));
        plot.push_str(&border);
        for row in &board {
            plot.push('|');
            plot.extend(row.iter());
            plot.push_str("|\n");
        }
        plot.push_str(&border);
        event!(debug, nodes = self.len(), max_x, max_y, draw_lines, "plotted quadtree");
        Ok(plot)
    }
}

impl<T, L, K, S> Quadtree<T, L, K, S>
where
    T: Display,
    L: Display,
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Lists the nodes in pre-order, one per line, as the label followed by the point, indented by two spaces per level of depth.
    ///
    /// # Example
    /// ```rust
    /// # use quadrille::{Quadtree, Point};
    /// let mut tree = Quadtree::<i32, char>::new();
    /// tree.insert(Point::new(5, 5), 'A');
    /// tree.insert(Point::new(2, 2), 'B');
    /// tree.insert(Point::new(1, 1), 'C');
    /// tree.insert(Point::new(8, 8), 'D');
    ///
    /// assert_eq!(tree.sideways(), "\
    /// A (5,5)
    ///   B (2,2)
    ///     C (1,1)
    ///   D (8,8)
    /// ");
    /// ```
    pub fn sideways(&self) -> String {
        let mut listing = String::new();
        let mut stack: Vec<_> = self.root().map(|root| (root, 0_usize)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            // Writing into a String cannot fail
            let _ = writeln!(
                listing,
                "{:indent$}{} {}",
                "",
                node.label(),
                node.point(),
                indent = depth * 2,
            );
            // Reversed so that the north-west child is listed first
            for child in node.existing_children().iter().rev() {
                stack.push((child.clone(), depth + 1));
            }
        }
        listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Quadtree<u8, char> {
        let mut tree = Quadtree::new();
        tree.insert(Point::new(5, 5), 'A');
        tree.insert(Point::new(2, 8), 'B');
        tree.insert(Point::new(8, 8), 'C');
        tree.insert(Point::new(2, 2), 'D');
        tree.insert(Point::new(8, 2), 'E');
        tree
    }

    #[test]
    fn plot_without_lines() {
        let plot = scenario().plot(9, 9, false).expect("all points fit");
        let expected = "\
+----------+
|          |
|          |
|  D     E |
|          |
|          |
|     A    |
|          |
|          |
|  B     C |
|          |
+----------+
";
        assert_eq!(plot, expected);
    }
    #[test]
    fn plot_with_lines() {
        let plot = scenario().plot(9, 9, true).expect("all points fit");
        let expected = "\
+----------+
|  |  |  | |
|  |  |  | |
|--D--|--E-|
|  |  |  | |
|  |  |  | |
|-----A----|
|  |  |  | |
|  |  |  | |
|--B--|--C-|
|  |  |  | |
+----------+
";
        assert_eq!(plot, expected);
    }
    #[test]
    fn empty_plot() {
        let tree = Quadtree::<u8, char>::new();
        assert_eq!(tree.plot(1, 0, true), Ok("+--+\n|  |\n+--+\n".to_string()));
    }
    #[test]
    fn out_of_grid() {
        // E is the first node past the right edge in pre-order
        let error = scenario().plot(7, 9, false).unwrap_err();
        assert_eq!(
            error,
            PlotError::OutOfGrid { label: 'E', x: 8, y: 2, max_x: 7, max_y: 9 },
        );
    }
    #[test]
    fn negative_ordinate() {
        let mut tree = Quadtree::<i32, char>::new();
        tree.insert(Point::new(3, 3), 'A');
        tree.insert(Point::new(-1, 1), 'B');
        assert_eq!(
            tree.plot(5, 5, true),
            Err(PlotError::UnrepresentableOrdinate { label: 'B' }),
        );
    }
    #[test]
    fn shared_ordinate() {
        let mut tree = Quadtree::<u8, char>::new();
        tree.insert(Point::new(2, 2), 'A');
        // Same column as the root: routed north-east, but the north-east region starts at x = 3
        tree.insert(Point::new(2, 0), 'B');
        assert_eq!(
            tree.plot(4, 4, false),
            Err(PlotError::OutsideRegion { label: 'B', x: 2, y: 0 }),
        );
    }
    #[test]
    fn byte_labels() {
        let mut tree = Quadtree::<usize, u8>::new();
        tree.insert(Point::new(1, 0), b'x');
        tree.insert(Point::new(0, 1), b'y');
        assert_eq!(tree.plot(1, 1, false), Ok("+--+\n| x|\n|y |\n+--+\n".to_string()));
    }
    #[test]
    fn sideways_listing() {
        let expected = "\
A (5,5)
  D (2,2)
  E (8,2)
  B (2,8)
  C (8,8)
";
        assert_eq!(scenario().sideways(), expected);
        assert_eq!(Quadtree::<u8, char>::new().sideways(), "");
    }
    #[test]
    fn grid_too_large() {
        let tree = scenario();
        assert_eq!(
            tree.plot(usize::MAX, 9, false),
            Err(PlotError::GridTooLarge { max_x: usize::MAX, max_y: 9 }),
        );
        let edge = isize::MAX as usize;
        assert_eq!(
            Quadtree::<u8, char>::new().plot(3, edge, true),
            Err(PlotError::GridTooLarge { max_x: 3, max_y: edge }),
        );
    }
    #[test]
    fn sideways_nested() {
        let mut tree = Quadtree::<u8, char>::new();
        for &(x, y, label) in &[(50, 50, 'A'), (25, 25, 'B'), (10, 10, 'C'), (30, 30, 'D'), (75, 75, 'E')] {
            tree.insert(Point::new(x, y), label);
        }
        let expected = "\
A (50,50)
  B (25,25)
    C (10,10)
    D (30,30)
  E (75,75)
";
        assert_eq!(tree.sideways(), expected);
    }
    #[test]
    fn sideways_chain() {
        let tree: Quadtree<u32, u32> = (0..2_000).map(|i| (Point::new(i, i), i)).collect();
        let listing = tree.sideways();
        assert_eq!(listing.lines().count(), 2_000);
        let last = listing.lines().last().expect("tree is not empty");
        assert_eq!(last, format!("{:indent$}1999 (1999,1999)", "", indent = 2 * 1_999));
    }
    #[test]
    fn error_messages() {
        let error = PlotError::OutOfGrid { label: 'C', x: 8, y: 8, max_x: 7, max_y: 9 };
        assert_eq!(
            error.to_string(),
            "point 'C' at (8,8) lies outside of the grid, which ends at (7,9)",
        );
    }
}
