//! Point capture over the displayed image.

use digitizer_traits::{PixelPoint, Pointer, PointerEvent};

use crate::error::DigitizerError;

/// Collect clicks in order until `Finish`, or until `limit` points are held.
///
/// `Undo` drops the most recent point (no-op when empty). Zero points is a
/// valid result.
pub fn capture_points<P: Pointer + ?Sized>(
    pointer: &mut P,
    limit: Option<usize>,
) -> Result<Vec<PixelPoint>, DigitizerError> {
    let mut points = Vec::new();
    if limit == Some(0) {
        return Ok(points);
    }
    loop {
        match pointer.next_event()? {
            PointerEvent::Add(p) => {
                points.push(p);
                tracing::trace!(x = p.x, y = p.y, n = points.len(), "point added");
                if limit.is_some_and(|n| points.len() >= n) {
                    break;
                }
            }
            PointerEvent::Undo => {
                if let Some(p) = points.pop() {
                    tracing::trace!(x = p.x, y = p.y, n = points.len(), "point removed");
                }
            }
            PointerEvent::Finish => break,
        }
    }
    tracing::debug!(points = points.len(), ?limit, "capture finished");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::ScriptedUi;

    #[test]
    fn undo_removes_most_recent() {
        let mut ui = ScriptedUi::new()
            .click(1.0, 1.0)
            .click(2.0, 2.0)
            .undo()
            .click(3.0, 3.0)
            .finish();
        let pts = capture_points(&mut ui, None).unwrap();
        assert_eq!(pts, vec![PixelPoint::new(1.0, 1.0), PixelPoint::new(3.0, 3.0)]);
    }

    #[test]
    fn undo_on_empty_is_noop() {
        let mut ui = ScriptedUi::new().undo().undo().finish();
        assert!(capture_points(&mut ui, None).unwrap().is_empty());
    }

    #[test]
    fn limit_stops_without_finish() {
        let mut ui = ScriptedUi::new().click(1.0, 2.0).click(3.0, 4.0).click(5.0, 6.0);
        let pts = capture_points(&mut ui, Some(2)).unwrap();
        assert_eq!(pts.len(), 2);
        // third click still queued
        assert_eq!(ui.pending_events(), 1);
    }

    #[test]
    fn finish_before_limit_returns_fewer() {
        let mut ui = ScriptedUi::new().click(1.0, 2.0).finish();
        assert_eq!(capture_points(&mut ui, Some(2)).unwrap().len(), 1);
    }
}
