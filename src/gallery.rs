//! Expression portrait gallery.
//!
//! Maps each [`Expression`] to its static portrait file. A missing file is
//! never fatal: resolution degrades to a labelled placeholder the shell
//! can render instead.

use crate::config::GalleryConfig;
use crate::knowledge::Expression;
use std::path::PathBuf;
use tracing::warn;

/// What the shell should render for an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryImage {
    /// Portrait file present on disk.
    File(PathBuf),
    /// Portrait missing; render a grey placeholder with this label.
    Placeholder { label: String },
}

/// Resolves expressions to portrait paths under a configured directory.
#[derive(Debug, Clone)]
pub struct ExpressionGallery {
    dir: PathBuf,
}

impl ExpressionGallery {
    #[must_use]
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            dir: config.dir.clone(),
        }
    }

    /// The expected portrait filename for an expression.
    #[must_use]
    pub fn filename(expression: Expression) -> String {
        format!("bourguiba_{}.jpg", expression.as_str())
    }

    /// Resolve an expression to its portrait, or a placeholder when the
    /// file is absent.
    #[must_use]
    pub fn resolve(&self, expression: Expression) -> GalleryImage {
        let path = self.dir.join(Self::filename(expression));
        if path.is_file() {
            GalleryImage::File(path)
        } else {
            warn!(expression = %expression, path = %path.display(), "portrait missing, using placeholder");
            GalleryImage::Placeholder {
                label: expression.as_str().to_owned(),
            }
        }
    }

    /// Resolve the whole gallery, one entry per expression.
    #[must_use]
    pub fn resolve_all(&self) -> Vec<(Expression, GalleryImage)> {
        Expression::ALL
            .iter()
            .map(|&e| (e, self.resolve(e)))
            .collect()
    }
}
