use super::{UsesStep, ACTION_DOWNLOAD, ACTION_UPLOAD};

/// A named build output shared between jobs.
///
/// Not a document node itself: it only produces the upload and download
/// steps that move the files between jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    name: String,
    path: String,
}

impl Artifact {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn as_upload(&self) -> UsesStep {
        self.bind(ACTION_UPLOAD)
    }

    pub fn as_download(&self) -> UsesStep {
        self.bind(ACTION_DOWNLOAD)
    }

    fn bind(&self, action: &str) -> UsesStep {
        UsesStep::new(action)
            .with_arg("name", self.name.as_str())
            .with_arg("path", self.path.as_str())
    }
}
