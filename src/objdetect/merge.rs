use std::collections::BTreeMap;

use crate::core::types::{Detection, Rect};

/// Flat `u32` parent array with iterative `find` + path compression. No
/// rank tracking (the candidate sets a single `detect()` call produces are
/// small enough that the extra bookkeeping isn't worth it).
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<u32>,
}

impl DisjointSet {
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { parent: (0..n as u32).collect() }
    }

    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] as usize != root {
            root = self.parent[root] as usize;
        }

        let mut cur = i;
        while self.parent[cur] as usize != root {
            let next = self.parent[cur] as usize;
            self.parent[cur] = root as u32;
            cur = next;
        }

        root
    }

    pub fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[ra] = rb as u32;
        }
    }
}

/// Cluster overlapping candidate rectangles via union-find and return one
/// averaged rectangle per cluster.
///
/// The merge criterion is the source algorithm's asymmetric test: for
/// ordered pair `(i, j)` with overlap area `overlap` and areas `a1, a2`,
/// union iff `overlap / (a1 * (a1/a2)) >= regions_overlap` AND
/// `overlap / (a2 * (a1/a2)) >= regions_overlap`. This is unusual (the
/// second term simplifies to `overlap * a2 / a1^2`), but is kept verbatim
/// for behavioural fidelity rather than replaced with the more obvious
/// symmetric `overlap / min(a1, a2) >= regions_overlap`.
#[must_use]
pub fn merge_rectangles(rects: &[Rect], regions_overlap: f64) -> Vec<Detection> {
    let n = rects.len();
    if n == 0 {
        return Vec::new();
    }

    let mut dsu = DisjointSet::new(n);

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }

            let Some(inter) = rects[i].intersection(&rects[j]) else { continue };

            let overlap = inter.area() as f64;
            let a1 = rects[i].area() as f64;
            let a2 = rects[j].area() as f64;
            if a1 <= 0.0 || a2 <= 0.0 {
                continue;
            }

            let ratio = a1 / a2;
            let cond1 = overlap / (a1 * ratio) >= regions_overlap;
            let cond2 = overlap / (a2 * ratio) >= regions_overlap;

            if cond1 && cond2 {
                dsu.union(i, j);
            }
        }
    }

    let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for idx in 0..n {
        let root = dsu.find(idx);
        groups.entry(root).or_default().push(idx);
    }

    groups
        .into_values()
        .map(|members| {
            let total = members.len() as u32;
            let count = f64::from(total);

            let (mut sx, mut sy, mut sw, mut sh) = (0i64, 0i64, 0i64, 0i64);
            for &m in &members {
                sx += i64::from(rects[m].x);
                sy += i64::from(rects[m].y);
                sw += i64::from(rects[m].width);
                sh += i64::from(rects[m].height);
            }

            let round = |sum: i64| -> i32 { ((sum as f64 / count) + 0.5).floor() as i32 };
            Detection::new(round(sx), round(sy), round(sw), round(sh), total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_set_union_and_find() {
        let mut dsu = DisjointSet::new(5);
        dsu.union(0, 1);
        dsu.union(1, 2);
        assert_eq!(dsu.find(0), dsu.find(2));
        assert_ne!(dsu.find(0), dsu.find(3));
        dsu.union(3, 4);
        assert_ne!(dsu.find(0), dsu.find(3));
        assert_eq!(dsu.find(3), dsu.find(4));
    }

    #[test]
    fn test_merge_overlapping_rects_averages() {
        let rects = vec![Rect::new(0, 0, 10, 10), Rect::new(1, 1, 10, 10)];
        let merged = merge_rectangles(&rects, 0.5);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].total, 2);
    }

    #[test]
    fn test_merge_disjoint_rects_stay_separate() {
        let rects = vec![Rect::new(0, 0, 10, 10), Rect::new(1000, 1000, 10, 10)];
        let merged = merge_rectangles(&rects, 0.5);
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|d| d.total == 1));
    }

    #[test]
    fn test_merge_idempotence() {
        let rects = vec![Rect::new(0, 0, 10, 10), Rect::new(1, 1, 10, 10), Rect::new(500, 500, 20, 20)];
        let merged = merge_rectangles(&rects, 0.5);
        let merged_rects: Vec<Rect> = merged.iter().map(Detection::rect).collect();
        let merged_again = merge_rectangles(&merged_rects, 0.5);

        assert_eq!(merged.len(), merged_again.len());
        assert!(merged_again.iter().all(|d| d.total == 1));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(merge_rectangles(&[], 0.5).is_empty());
    }
}
