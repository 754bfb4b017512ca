use crate::error::Error;

/// Record-oriented writer.
pub trait WriterTrait {
    type Item;

    fn write_single(&mut self, val: &Self::Item) -> Result<(), Error>;

    fn write(&mut self, vals: &[Self::Item]) -> Result<(), Error> {
        for val in vals {
            self.write_single(val)?;
        }
        Ok(())
    }

    /// Flush underlying handles.
    fn flush(&mut self) -> Result<(), Error>;
}
