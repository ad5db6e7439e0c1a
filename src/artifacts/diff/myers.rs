//! Myers' shortest-edit-script search
//!
//! Implements the classic O(ND) greedy algorithm: for increasing edit
//! distance `d`, track the furthest-reached `x` on every diagonal
//! `k = x - y`, extending each candidate through runs of equal elements
//! before recording it. The first `d` whose frontier reaches `(N, M)` is the
//! true minimal insert/delete distance, so the reconstructed script is
//! shortest, not merely valid.
//!
//! The per-`d` frontier history is kept in a flat triangular arena indexed
//! by `(d, k)` instead of snapshotting a working array on every iteration:
//! row `d` holds exactly the `d + 1` diagonals writable at that distance, so
//! backtracking reads the same values the forward pass produced without any
//! per-step cloning. Space is O(D²) for edit distance D, which stays small
//! for the near-identical scan logs this engine is fed.
//!
//! Debug logging of the search is enabled with the `debug_diff` feature
//! flag (`cargo build --features debug_diff`).

use crate::artifacts::diff::edit::Edit;
use derive_new::new;

/// Macro for debug logging that is enabled with the debug_diff feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("frontier settled at d={}", d);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(any(feature = "debug_diff"))]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Frontier history of the forward search.
///
/// Rows are laid out back to back in one buffer: row `d` starts at
/// `d * (d + 1) / 2` and stores one furthest-`x` value per diagonal
/// `k in (-d..=d).step_by(2)`, at slot `(k + d) / 2` within the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    ends: Vec<isize>,
    distance: usize,
}

impl Trace {
    fn with_row_hint(width: usize) -> Self {
        Trace {
            ends: Vec::with_capacity(width + 1),
            distance: 0,
        }
    }

    fn slot(d: usize, k: isize) -> usize {
        d * (d + 1) / 2 + ((k + d as isize) / 2) as usize
    }

    fn get(&self, d: usize, k: isize) -> isize {
        self.ends[Self::slot(d, k)]
    }

    fn push(&mut self, x: isize) {
        self.ends.push(x);
    }

    /// Minimal number of insert/delete steps between the two sequences.
    pub fn distance(&self) -> usize {
        self.distance
    }
}

pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditPath;
    type EditScript;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self) -> Self::EditPath;
    fn diff(&self) -> Self::EditScript;
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> MyersDiff<'d, T> {
    /// Minimal number of insert/delete steps between the two inputs.
    pub fn edit_distance(&self) -> usize {
        self.compute_shortest_edit().distance()
    }
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    type Trace = Trace;
    type EditPath = Vec<(isize, isize, isize, isize)>;
    type EditScript = Vec<Edit<T>>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);

        let mut trace = Trace::with_row_hint(self.a.len() + self.b.len());

        for d in 0..=(n + m) {
            for k in (-d..=d).step_by(2) {
                let mut x = if d == 0 {
                    0
                } else if k == -d {
                    // we could have only come from k+1, thus an insertion
                    trace.get(d as usize - 1, k + 1)
                } else if k == d {
                    // we could have only come from k-1, thus a deletion
                    trace.get(d as usize - 1, k - 1) + 1
                } else {
                    // we could have come from either k-1 (deletion) or k+1 (insertion)
                    let x_del = trace.get(d as usize - 1, k - 1) + 1;
                    let x_ins = trace.get(d as usize - 1, k + 1);
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                trace.push(x);

                if x >= n && y >= m {
                    debug_log!("edit search settled at d={} on diagonal k={}", d, k);
                    trace.distance = d as usize;
                    return trace;
                }
            }
        }

        trace.distance = (n + m) as usize;
        trace
    }

    fn backtrack(&self) -> Self::EditPath {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit();
        debug_log!(
            "backtracking from ({}, {}) across {} edit steps",
            x,
            y,
            trace.distance()
        );

        for d in (0..=trace.distance()).rev() {
            if d == 0 {
                // whatever remains is the initial snake on diagonal 0
                while x > 0 && y > 0 {
                    edit_path.push((x - 1, y - 1, x, y));
                    x -= 1;
                    y -= 1;
                }
                continue;
            }

            let k = x - y;

            let prev_k = if k == -(d as isize) {
                k + 1
            } else if k == d as isize {
                k - 1
            } else {
                let k_del = k - 1;
                let k_ins = k + 1;
                if trace.get(d - 1, k_del) + 1 > trace.get(d - 1, k_ins) {
                    k_del
                } else {
                    k_ins
                }
            };

            let prev_x = trace.get(d - 1, prev_k);
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            edit_path.push((prev_x, prev_y, x, y));

            (x, y) = (prev_x, prev_y);
        }

        edit_path
    }

    fn diff(&self) -> Self::EditScript {
        let mut diff = Vec::new();

        for (prev_x, prev_y, x, y) in self.backtrack() {
            let edit = if x == prev_x {
                // Insert: only y increased
                Edit::Insert {
                    index_b: y as usize,
                    value: self.b[prev_y as usize].clone(),
                }
            } else if y == prev_y {
                // Delete: only x increased
                Edit::Delete {
                    index_a: x as usize,
                    value: self.a[prev_x as usize].clone(),
                }
            } else {
                // Equal: both increased (diagonal move)
                Edit::Equal {
                    index_a: x as usize,
                    index_b: y as usize,
                    value: self.a[prev_x as usize].clone(),
                }
            };

            diff.push(edit);
        }

        diff.reverse();
        diff
    }
}
