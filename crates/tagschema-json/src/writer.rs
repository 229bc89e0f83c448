use crate::value;
use tagschema_core::{sql, Error, Result};

use std::io::{BufWriter, Write};
use tracing::{debug, warn};

const DEFAULT_ROWS_FIELD: &str = "rows";
const DEFAULT_BUFFER_CAPACITY: usize = 256 * 1024;

/// Options for a [`JsonWriter`].
#[derive(Debug, Clone)]
pub struct Builder {
    /// Name of the top-level array field holding the rows
    rows_field: String,

    /// Capacity of the write buffer, in bytes
    buffer_capacity: usize,
}

/// Writes rows as a single JSON document, streaming one row at a time.
///
/// The opening `{"rows": [` is written on creation and the closing `]}` only
/// by [`finish`](JsonWriter::finish). Until then the output is not valid
/// JSON. Once any write fails the writer is poisoned: every further call
/// fails with an incomplete write error and the closing token is never
/// written, so a truncated export can't pass for a complete one.
#[derive(Debug)]
pub struct JsonWriter<W: Write> {
    /// `None` once the writer has been finished or abandoned.
    wr: Option<BufWriter<W>>,

    columns: Vec<sql::Column>,

    rows_written: usize,

    failed: bool,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows_field(&mut self, name: &str) -> &mut Self {
        self.rows_field = name.to_string();
        self
    }

    pub fn buffer_capacity(&mut self, capacity: usize) -> &mut Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Starts a document on `wr` for rows described by `columns`.
    pub fn build<W: Write>(&self, wr: W, columns: Vec<sql::Column>) -> Result<JsonWriter<W>> {
        let field = serde_json::to_string(&self.rows_field).map_err(anyhow::Error::from)?;

        let mut wr = BufWriter::with_capacity(self.buffer_capacity, wr);
        write!(wr, "{{{field}: [")?;

        Ok(JsonWriter {
            wr: Some(wr),
            columns,
            rows_written: 0,
            failed: false,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            rows_field: DEFAULT_ROWS_FIELD.to_string(),
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl<W: Write> JsonWriter<W> {
    /// Starts a document with the default options.
    pub fn new(wr: W, columns: Vec<sql::Column>) -> Result<JsonWriter<W>> {
        Builder::default().build(wr, columns)
    }

    pub fn columns(&self) -> &[sql::Column] {
        &self.columns
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Appends a row to the document.
    ///
    /// A value that cannot be represented in JSON fails without writing
    /// anything, and the writer stays usable. An I/O failure poisons the
    /// writer.
    pub fn write_row(&mut self, row: &[sql::Value]) -> Result<()> {
        if self.failed {
            return Err(Error::incomplete_write(self.rows_written));
        }

        let object = value::row_object(&self.columns, row)?;

        let Some(wr) = self.wr.as_mut() else {
            return Err(Error::incomplete_write(self.rows_written));
        };

        let res = (|| -> Result<()> {
            if self.rows_written != 0 {
                wr.write_all(b",")?;
            }
            serde_json::to_writer(&mut *wr, &object).map_err(anyhow::Error::from)?;
            Ok(())
        })();

        match res {
            Ok(()) => {
                self.rows_written += 1;
                Ok(())
            }
            Err(err) => {
                self.failed = true;
                if let Some(wr) = self.wr.take() {
                    discard(wr);
                }
                warn!(rows_written = self.rows_written, error = %err, "json export write failed");
                Err(err.context(Error::incomplete_write(self.rows_written)))
            }
        }
    }

    /// Flushes every row, writes the closing token and returns the
    /// underlying writer.
    ///
    /// Fails without writing the closing token if an earlier write failed or
    /// the rows cannot be flushed.
    pub fn finish(mut self) -> Result<W> {
        let rows_written = self.rows_written;

        let Some(mut wr) = self.wr.take() else {
            return Err(Error::incomplete_write(rows_written));
        };

        if self.failed {
            discard(wr);
            return Err(Error::incomplete_write(rows_written));
        }

        if let Err(err) = wr.flush() {
            discard(wr);
            return Err(close_failed(rows_written, err));
        }

        if let Err(err) = wr.write_all(b"]}") {
            discard(wr);
            return Err(close_failed(rows_written, err));
        }

        match wr.into_inner() {
            Ok(inner) => {
                debug!(rows_written, "finished json export");
                Ok(inner)
            }
            Err(err) => {
                let (err, wr) = err.into_parts();
                discard(wr);
                Err(close_failed(rows_written, err))
            }
        }
    }

    /// Stops the export without writing the closing token.
    ///
    /// Whatever was written so far is flushed as is. The returned error
    /// reports the output as incomplete.
    pub fn abandon(mut self) -> Error {
        self.wr.take();
        warn!(rows_written = self.rows_written, "json export abandoned");
        Error::incomplete_write(self.rows_written)
    }
}

/// Drops a buffered writer without flushing what it still holds.
fn discard<W: Write>(wr: BufWriter<W>) {
    let (_inner, _unflushed) = wr.into_parts();
}

fn close_failed(rows_written: usize, err: std::io::Error) -> Error {
    warn!(rows_written, error = %err, "json export failed to close");
    Error::from(err).context(Error::incomplete_write(rows_written))
}

impl<W: Write> Drop for JsonWriter<W> {
    fn drop(&mut self) {
        if self.wr.is_some() {
            warn!(
                rows_written = self.rows_written,
                "json export dropped without being finished; output is incomplete"
            );
        }
    }
}
