// Subtract opening and extension gaps from a wall rectangle. The single
// place that understands horizontal-vs-vertical axis selection.

use crate::domain::direction::CardinalDirection;
use crate::geometry::{merge_spans, Rect, Span, EPSILON};

/// Partition `rect` minus the union of `gaps` (each a span along the
/// wall's long axis, in the same coordinate space as `rect`) into ordered
/// sub-rectangles. Segments shorter than `EPSILON` are dropped.
pub fn slice_segments(rect: &Rect, direction: CardinalDirection, gaps: &[Span]) -> Vec<Rect> {
    let (origin, length) =
        if direction.is_horizontal() { (rect.x, rect.width) } else { (rect.y, rect.height) };

    let merged_gaps = merge_spans(gaps.to_vec());

    let mut free_spans = Vec::new();
    let mut cursor = origin;
    for gap in &merged_gaps {
        if gap.start > cursor {
            free_spans.push(Span::new(cursor, gap.start.min(origin + length)));
        }
        cursor = cursor.max(gap.end);
    }
    if cursor < origin + length {
        free_spans.push(Span::new(cursor, origin + length));
    }

    free_spans
        .into_iter()
        .filter(|span| span.len() > EPSILON)
        .map(|span| {
            if direction.is_horizontal() {
                Rect::new(span.start, rect.y, span.len(), rect.height)
            } else {
                Rect::new(rect.x, span.start, rect.width, span.len())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_gaps_returns_whole_rect() {
        let rect = Rect::new(0.0, 0.0, 10.0, 0.5);
        let segments = slice_segments(&rect, CardinalDirection::South, &[]);
        assert_eq!(segments.len(), 1);
        assert!((segments[0].width - 10.0).abs() < EPSILON);
    }

    #[test]
    fn single_gap_splits_into_two_segments() {
        let rect = Rect::new(0.0, 0.0, 10.0, 0.5);
        let segments = slice_segments(&rect, CardinalDirection::South, &[Span::new(4.0, 7.0)]);
        assert_eq!(segments.len(), 2);
        assert!((segments[0].width - 4.0).abs() < EPSILON);
        assert!((segments[1].x - 7.0).abs() < EPSILON);
        assert!((segments[1].width - 3.0).abs() < EPSILON);
    }

    #[test]
    fn gap_covering_entire_wall_leaves_no_segments() {
        let rect = Rect::new(0.0, 0.0, 10.0, 0.5);
        let segments = slice_segments(&rect, CardinalDirection::South, &[Span::new(-1.0, 11.0)]);
        assert!(segments.is_empty());
    }

    #[test]
    fn vertical_wall_slices_along_y() {
        let rect = Rect::new(0.0, 0.0, 0.5, 10.0);
        let segments = slice_segments(&rect, CardinalDirection::East, &[Span::new(2.0, 5.0)]);
        assert_eq!(segments.len(), 2);
        assert!((segments[0].height - 2.0).abs() < EPSILON);
        assert!((segments[1].y - 5.0).abs() < EPSILON);
    }
}
