//! Image resolution with placeholder fallback.
//!
//! Every card image is probed once through an [`ImageLoader`]. If the probe
//! fails, the card shows the placeholder URL for its kind instead. The outcome
//! is cached per path: a failed image is never retried and never reported.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::MediaConfig;
use crate::content::CardKind;

pub const PROJECT_PLACEHOLDER: &str =
    "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=600&h=400&fit=crop&q=80";

pub const ACHIEVEMENT_PLACEHOLDER: &str =
    "https://images.unsplash.com/photo-1552664730-d307ca884978?w=400&h=250&fit=crop&q=80";

// =============================================================================
// LOADERS
// =============================================================================

/// Probes whether an image reference can be loaded.
pub trait ImageLoader {
    fn load(&self, path: &str) -> io::Result<()>;
}

/// Resolves site-absolute paths (`/images/...`) under an asset root.
#[derive(Debug, Clone)]
pub struct FsImageLoader {
    root: PathBuf,
}

impl FsImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn full_path(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &str) -> io::Result<()> {
        let metadata = fs::metadata(self.full_path(path))?;
        if metadata.is_file() && metadata.len() > 0 {
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::InvalidData, "not a readable image file"))
        }
    }
}

// =============================================================================
// RESOLVER
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub project: String,
    pub achievement: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            project: PROJECT_PLACEHOLDER.to_string(),
            achievement: ACHIEVEMENT_PLACEHOLDER.to_string(),
        }
    }
}

impl Placeholders {
    pub fn for_kind(&self, kind: CardKind) -> &str {
        match kind {
            CardKind::Project => &self.project,
            CardKind::Achievement => &self.achievement,
        }
    }
}

/// What an image element ends up displaying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedImage {
    Primary(String),
    Placeholder(String),
}

impl ResolvedImage {
    pub fn src(&self) -> &str {
        match self {
            Self::Primary(src) | Self::Placeholder(src) => src,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

pub struct ImageResolver {
    loader: Box<dyn ImageLoader>,
    placeholders: Placeholders,
    outcomes: RefCell<HashMap<String, bool>>,
}

impl ImageResolver {
    pub fn new(loader: impl ImageLoader + 'static, placeholders: Placeholders) -> Self {
        Self {
            loader: Box::new(loader),
            placeholders,
            outcomes: RefCell::new(HashMap::new()),
        }
    }

    /// Filesystem loader rooted at the configured asset directory.
    pub fn from_config(media: &MediaConfig) -> Self {
        let placeholders = Placeholders {
            project: media.project_placeholder.clone(),
            achievement: media.achievement_placeholder.clone(),
        };
        Self::new(FsImageLoader::new(&media.asset_root), placeholders)
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Primary path if it loads, otherwise the placeholder for `kind`.
    pub fn resolve(&self, path: &str, kind: CardKind) -> ResolvedImage {
        let cached = self.outcomes.borrow().get(path).copied();
        let loaded = match cached {
            Some(loaded) => loaded,
            None => {
                let loaded = self.loader.load(path).is_ok();
                self.outcomes.borrow_mut().insert(path.to_string(), loaded);
                loaded
            }
        };

        if loaded {
            ResolvedImage::Primary(path.to_string())
        } else {
            ResolvedImage::Placeholder(self.placeholders.for_kind(kind).to_string())
        }
    }
}

impl std::fmt::Debug for ImageResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageResolver")
            .field("placeholders", &self.placeholders)
            .field("probed", &self.outcomes.borrow().len())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
