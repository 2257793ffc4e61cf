//! Data structures: rows of string fields and the dataset holding them.

use csv::ByteRecord;
use std::ops::Index;
use std::slice::Iter;

/// A single record: the fields of one input line, exactly as split.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    /// Creates a row from its fields.
    pub fn new(fields: Vec<String>) -> Self {
        Row { fields }
    }
    /// Number of fields in the row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
    /// Returns the field at the given position, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|f| &**f)
    }
    /// Returns a reference to all fields.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
    /// An iterator over the fields.
    pub fn iter(&self) -> Iter<String> {
        self.fields.iter()
    }
}

impl From<Vec<String>> for Row {
    fn from(fields: Vec<String>) -> Self {
        Row::new(fields)
    }
}

impl From<&[&str]> for Row {
    fn from(fields: &[&str]) -> Self {
        Row::new(fields.iter().map(|f| f.to_string()).collect())
    }
}

/// Invalid UTF-8 is replaced by `U+FFFD`.
impl From<&ByteRecord> for Row {
    fn from(record: &ByteRecord) -> Self {
        Row::new(
            record
                .iter()
                .map(|f| String::from_utf8_lossy(f).into_owned())
                .collect(),
        )
    }
}

impl Index<usize> for Row {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.fields[index]
    }
}

/// An ordered collection of rows, in the order they were read.
///
/// Rows may differ in their number of fields; nothing is enforced on insert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn empty() -> Self {
        Dataset { rows: vec![] }
    }

    /// Creates a dataset from a vector of rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Dataset { rows }
    }

    /// Number of rows in the dataset.
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a row to the end of the dataset.
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Returns a reference to a row, if present.
    pub fn get_row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }
    /// Returns the value at (row, column), if both exist.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Returns the first `n` rows, or all rows if there are fewer.
    pub fn head(&self, n: usize) -> &[Row] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// An iterator over rows.
    pub fn iter_rows(&self) -> Iter<Row> {
        self.rows.iter()
    }

    /// Number of fields of the shortest row. `None` for an empty dataset.
    pub fn min_fields(&self) -> Option<usize> {
        self.rows.iter().map(Row::len).min()
    }
    /// Number of fields of the longest row. `None` for an empty dataset.
    pub fn max_fields(&self) -> Option<usize> {
        self.rows.iter().map(Row::len).max()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Row;
    type IntoIter = Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod test {
    use crate::data::{Dataset, Row};
    use csv::ByteRecord;

    fn iris_rows() -> Vec<Row> {
        vec![
            Row::from(&["5.1", "3.5", "1.4", "0.2", "Iris-setosa"][..]),
            Row::from(&["4.9", "3.0", "1.4", "0.2", "Iris-setosa"][..]),
            Row::from(&["4.7", "3.2"][..]),
        ]
    }

    #[test]
    fn create_dataset_from_rows() {
        let ds = Dataset::from_rows(iris_rows());

        assert_eq!(ds.nrows(), 3);
        assert!(!ds.is_empty());
        assert_eq!(ds.get(1, 1), Some("3.0"));
        assert_eq!(ds.get(2, 4), None);
        assert_eq!(ds.get(3, 0), None);
        assert_eq!(&ds.get_row(0).unwrap()[4], "Iris-setosa");
    }

    #[test]
    fn add_rows() {
        let mut ds = Dataset::empty();
        assert!(ds.is_empty());
        assert_eq!(ds.min_fields(), None);

        for row in iris_rows() {
            ds.push_row(row);
        }

        assert_eq!(ds.nrows(), 3);
        assert_eq!(ds.min_fields(), Some(2));
        assert_eq!(ds.max_fields(), Some(5));
        assert_eq!(ds.get_row(2).unwrap().fields(), &["4.7", "3.2"]);
    }

    #[test]
    fn head() {
        let ds = Dataset::from_rows(iris_rows());

        assert_eq!(ds.head(2).len(), 2);
        assert_eq!(ds.head(10).len(), 3);
        assert!(ds.head(0).is_empty());
        assert_eq!(ds.head(1)[0].get(0), Some("5.1"));
    }

    #[test]
    fn iter_rows() {
        let ds = Dataset::from_rows(iris_rows());

        let lengths: Vec<_> = ds.iter_rows().map(|r| r.len()).collect();
        assert_eq!(lengths, vec![5, 5, 2]);

        let mut cnt = 0;
        for _row in &ds {
            cnt += 1;
        }
        assert_eq!(cnt, ds.nrows());
    }

    #[test]
    fn row_from_byte_record() {
        let record = ByteRecord::from(vec![&b"5.1"[..], &b""[..], &b"Iris-\xffsetosa"[..]]);
        let row = Row::from(&record);

        assert_eq!(row.len(), 3);
        assert_eq!(row.get(1), Some(""));
        assert_eq!(row.get(2), Some("Iris-\u{fffd}setosa"));
    }
}
