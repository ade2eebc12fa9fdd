use std::collections::HashMap;

use crate::core::types::Detection;
use crate::error::{Error, Result};
use crate::objdetect::cascade::Cascade;
use crate::objdetect::detector::{detect, DetectionParams};

/// One detection from a named cascade, as handed to an [`ObjectTracker`]
/// callback.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackEvent {
    pub cascade_name: String,
    pub detections: Vec<Detection>,
}

/// A thin driver collaborator, not part of the detection core: it wraps one
/// or more named cascades and, given a frame, calls [`detect`] once per
/// cascade with its stored [`DetectionParams`], invoking a caller-supplied
/// callback with each cascade's detections. `ObjectTracker` never touches a
/// frame source itself (no webcam, no file I/O); it is handed pixels by its
/// caller.
pub struct ObjectTracker<'a> {
    cascades: HashMap<String, (&'a [f64], DetectionParams)>,
}

impl<'a> ObjectTracker<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { cascades: HashMap::new() }
    }

    /// Register a named cascade with its own detection parameters.
    pub fn register(&mut self, name: impl Into<String>, cascade: &'a [f64], params: DetectionParams) {
        self.cascades.insert(name.into(), (cascade, params));
    }

    /// Run every registered cascade against one frame, invoking `on_event`
    /// once per cascade with its detections.
    pub fn track(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        mut on_event: impl FnMut(&TrackEvent),
    ) -> Result<()> {
        for (name, (data, params)) in &self.cascades {
            let cascade = Cascade::new(data)?;
            let detections = detect(pixels, width, height, &cascade, params)?;
            on_event(&TrackEvent { cascade_name: name.clone(), detections });
        }
        Ok(())
    }

    /// Run only the named cascade and return its detections directly,
    /// without going through the callback. Returns
    /// [`Error::InvalidParameter`] if no cascade was registered under `name`.
    pub fn detect_named(&self, name: &str, pixels: &[u8], width: u32, height: u32) -> Result<Vec<Detection>> {
        let (data, params) = self
            .cascades
            .get(name)
            .ok_or_else(|| Error::InvalidParameter(format!("no cascade registered under name {name:?}")))?;
        let cascade = Cascade::new(data)?;
        detect(pixels, width, height, &cascade, params)
    }
}

impl<'a> Default for ObjectTracker<'a> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objdetect::cascades;

    #[test]
    fn test_unknown_cascade_name_is_invalid_parameter() {
        let tracker = ObjectTracker::new();
        let pixels = vec![0u8; 4 * 16 * 16];
        let err = tracker.detect_named("face", &pixels, 16, 16).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_track_invokes_callback_per_cascade() {
        let mut tracker = ObjectTracker::new();
        tracker.register("face", cascades::FACE, DetectionParams::default());

        let pixels = vec![128u8; 4 * 64 * 64];
        let mut events = Vec::new();
        tracker.track(&pixels, 64, 64, |event| events.push(event.cascade_name.clone())).unwrap();

        assert_eq!(events, vec!["face".to_string()]);
    }
}
