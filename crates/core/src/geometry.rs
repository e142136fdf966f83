//! Vertical guide-line geometry for the timeline.
//!
//! Pure arithmetic over already-measured layout values. Measurement itself is
//! a collaborator concern; this module must be re-run whenever item count,
//! order, completion state, or the container layout changes.

/// One vertical overlay line, in container-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    pub top: f64,
    pub height: f64,
}

/// The dashed "full path" line and the solid "progress" line.
///
/// Either line is absent when it would be degenerate, so callers can render
/// unconditionally from whatever is present.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GuideLineGeometry {
    /// Spans the first item's dot center to the last item's dot center.
    pub dashed: Option<GuideLine>,
    /// Spans the first item's dot center to the dot center of the last
    /// completed item (maximum index, not maximum count).
    pub progress: Option<GuideLine>,
}

impl GuideLineGeometry {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dashed.is_none() && self.progress.is_none()
    }
}

/// Computes guide-line geometry from measured item offsets.
///
/// `item_tops` are the items' top offsets relative to a shared container;
/// `dot_center_offset` is the fixed offset of each item's dot center within
/// its own box; `completed` parallels `item_tops`. Degenerate input (fewer
/// than two items, zero heights from a not-yet-populated layout) yields absent
/// lines rather than an error.
#[must_use]
pub fn guide_lines(item_tops: &[f64], completed: &[bool], dot_center_offset: f64) -> GuideLineGeometry {
    let Some((&first_top, rest)) = item_tops.split_first() else {
        return GuideLineGeometry::default();
    };
    let Some(&last_top) = rest.last() else {
        return GuideLineGeometry::default();
    };

    let line_start = first_top + dot_center_offset;
    let line_end = last_top + dot_center_offset;

    let dashed_height = line_end - line_start;
    let dashed = (dashed_height > 0.0).then_some(GuideLine {
        top: line_start,
        height: dashed_height,
    });

    let last_completed = item_tops
        .iter()
        .zip(completed)
        .enumerate()
        .filter(|(_, (_, done))| **done)
        .map(|(index, (top, _))| (index, *top))
        .next_back();

    let progress = last_completed.and_then(|(_, top)| {
        let height = top + dot_center_offset - line_start;
        (height > 0.0).then_some(GuideLine {
            top: line_start,
            height,
        })
    });

    GuideLineGeometry { dashed, progress }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOT: f64 = 22.0;

    #[test]
    fn fewer_than_two_items_yields_no_lines() {
        assert!(guide_lines(&[], &[], DOT).is_empty());
        assert!(guide_lines(&[10.0], &[true], DOT).is_empty());
    }

    #[test]
    fn dashed_line_spans_first_to_last_dot_center() {
        let geometry = guide_lines(&[0.0, 80.0, 160.0], &[false, false, false], DOT);

        let dashed = geometry.dashed.unwrap();
        assert_eq!(dashed.top, DOT);
        assert_eq!(dashed.height, 160.0);
    }

    #[test]
    fn no_completed_items_yields_no_progress_line() {
        let geometry = guide_lines(&[0.0, 80.0], &[false, false], DOT);
        assert!(geometry.progress.is_none());
        assert!(geometry.dashed.is_some());
    }

    #[test]
    fn progress_ends_at_the_last_completed_index_not_the_first() {
        let tops = [0.0, 80.0, 160.0, 240.0];
        let completed = [false, true, false, true];

        let geometry = guide_lines(&tops, &completed, DOT);

        let progress = geometry.progress.unwrap();
        assert_eq!(progress.top, DOT);
        // Ends at item 3's measured position, not item 1's.
        assert_eq!(progress.height, 240.0);
    }

    #[test]
    fn completion_only_at_the_first_item_is_a_degenerate_progress_line() {
        let geometry = guide_lines(&[0.0, 80.0], &[true, false], DOT);
        assert!(geometry.progress.is_none());
    }

    #[test]
    fn unpopulated_layout_measures_to_no_lines() {
        // Before the DOM is populated every offset reads as zero.
        let geometry = guide_lines(&[0.0, 0.0, 0.0], &[true, true, true], DOT);
        assert!(geometry.is_empty());
    }

    #[test]
    fn mismatched_flag_list_is_tolerated() {
        let geometry = guide_lines(&[0.0, 80.0, 160.0], &[false, true], DOT);
        assert_eq!(geometry.progress.unwrap().height, 80.0);
    }
}
