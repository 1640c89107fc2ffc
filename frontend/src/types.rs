//! Browser-side types shared by components and services.

use dropzone::FileLike;
use web_sys::{File, FileList};

/// A file taken from a drop or from the file input.
#[derive(Clone, Debug)]
pub struct PickedFile(File);

impl PickedFile {
    pub fn as_file(&self) -> &File {
        &self.0
    }

    /// Copies the entries of a live `FileList`.
    pub fn from_list(list: FileList) -> Vec<PickedFile> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(PickedFile)
            .collect()
    }
}

impl FileLike for PickedFile {
    fn name(&self) -> String {
        self.0.name()
    }
}
