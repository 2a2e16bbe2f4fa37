//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the seam between batch orchestration and
//! pixel work. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend): pure Rust via the
//! `image` crate, statically linked. Tests use the recording
//! [`MockBackend`](tests::MockBackend) so batch logic runs without decoding
//! a single pixel.

use super::params::ConvertParams;
use thiserror::Error;

/// What went wrong inside a backend, split along the engine's taxonomy:
/// everything up to and including pixel work is a decode problem, everything
/// from encoding onward is a write problem.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("write failed: {0}")]
    Write(String),
}

/// Trait for image conversion backends.
pub trait ImageBackend: Sync {
    /// Execute one conversion as described by `params`.
    ///
    /// On success the output file exists, is a PNG, and has exactly
    /// `params.width`×`params.height` pixels.
    fn convert(&self, params: &ConvertParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock backend that records conversions without executing them.
    ///
    /// Sources whose path contains a configured marker fail with a decode
    /// error, so batch tests can exercise failure isolation.
    #[derive(Default)]
    pub struct MockBackend {
        pub operations: Mutex<Vec<ConvertParams>>,
        fail_marker: Option<String>,
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Fail any conversion whose source path contains `marker`.
        pub fn failing_on(marker: &str) -> Self {
            Self {
                operations: Mutex::new(Vec::new()),
                fail_marker: Some(marker.to_string()),
            }
        }

        pub fn recorded(&self) -> Vec<ConvertParams> {
            self.operations.lock().unwrap().clone()
        }
    }

    impl ImageBackend for MockBackend {
        fn convert(&self, params: &ConvertParams) -> Result<(), BackendError> {
            self.operations.lock().unwrap().push(params.clone());
            if let Some(marker) = &self.fail_marker {
                if params.source.to_string_lossy().contains(marker.as_str()) {
                    return Err(BackendError::Decode(format!(
                        "mock refused {}",
                        params.source.display()
                    )));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn mock_records_convert_params() {
        use crate::imaging::FitMode;

        let backend = MockBackend::new();
        backend
            .convert(&ConvertParams {
                source: "/in/photo.jpg".into(),
                output: "/out/photo_cover.png".into(),
                width: 140,
                height: 200,
                fit: FitMode::Letterbox,
            })
            .unwrap();

        let ops = backend.recorded();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].width, 140);
        assert_eq!(ops[0].height, 200);
        assert_eq!(ops[0].fit, FitMode::Letterbox);
    }

    #[test]
    fn mock_fails_on_marked_source() {
        use crate::imaging::FitMode;

        let backend = MockBackend::failing_on("corrupt");
        let result = backend.convert(&ConvertParams {
            source: "/in/corrupt.png".into(),
            output: "/out/corrupt_cover.png".into(),
            width: 140,
            height: 200,
            fit: FitMode::Stretch,
        });

        assert!(matches!(result, Err(BackendError::Decode(_))));
        // the attempt is still recorded
        assert_eq!(backend.recorded().len(), 1);
    }
}
