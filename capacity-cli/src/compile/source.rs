//! Where report grids come from

use crate::compile::types::{IngestError, SourceGrid};

/// A report document that can be read into a [`SourceGrid`]
///
/// Implementations decide how the document is acquired (a file on disk, an
/// uploaded buffer, a grid built in memory). Reading may fail; the failure
/// only affects this one source.
pub trait GridSource {
    /// Name used in diagnostics
    fn name(&self) -> &str;

    /// Read the first rows of the document
    fn read_grid(&self) -> Result<SourceGrid, IngestError>;
}

impl GridSource for SourceGrid {
    fn name(&self) -> &str {
        self.source()
    }

    fn read_grid(&self) -> Result<SourceGrid, IngestError> {
        Ok(self.clone())
    }
}

impl<T: GridSource + ?Sized> GridSource for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read_grid(&self) -> Result<SourceGrid, IngestError> {
        (**self).read_grid()
    }
}

impl<T: GridSource + ?Sized> GridSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read_grid(&self) -> Result<SourceGrid, IngestError> {
        (**self).read_grid()
    }
}
