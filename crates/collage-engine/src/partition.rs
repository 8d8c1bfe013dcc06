//! Row partitioning: sort images by height and split them into rows.

use image::DynamicImage;
use tracing::debug;

use crate::error::{CollageError, Result};

/// Images grouped into rows. Every row holds at least one image.
#[derive(Debug, Clone)]
pub struct ImagesMatrix {
    rows: Vec<Vec<DynamicImage>>,
    max_columns: usize,
}

impl ImagesMatrix {
    pub fn rows(&self) -> &[Vec<DynamicImage>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn max_columns(&self) -> usize {
        self.max_columns
    }

    /// Number of images in each row, top to bottom.
    pub fn row_lengths(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }
}

/// Split `images` into `number_of_rows` rows after sorting them tallest first.
///
/// Each row gets `len / number_of_rows` images; when that does not divide
/// evenly the earliest rows take one extra. Equal heights keep their input
/// order.
pub fn partition(mut images: Vec<DynamicImage>, number_of_rows: usize) -> Result<ImagesMatrix> {
    if number_of_rows == 0 {
        return Err(CollageError::InvalidRowCount { rows: 0 });
    }
    if images.is_empty() {
        return Err(CollageError::EmptyInput);
    }
    let total = images.len();
    if number_of_rows > total {
        return Err(CollageError::TooManyRows {
            rows: number_of_rows,
            images: total,
        });
    }

    images.sort_by(|a, b| b.height().cmp(&a.height()));

    let base_columns = total / number_of_rows;
    let remainder = total % number_of_rows;

    let mut rows = Vec::with_capacity(number_of_rows);
    let mut max_columns = 0;
    let mut remaining = images.into_iter();
    let mut assigned = 0;

    for idx in 0..number_of_rows {
        let mut columns_in_row = base_columns;
        if remainder > 0 && (number_of_rows - idx) * base_columns < total - assigned {
            columns_in_row += 1;
        }
        max_columns = max_columns.max(columns_in_row);

        let row: Vec<DynamicImage> = remaining.by_ref().take(columns_in_row).collect();
        assigned += row.len();
        rows.push(row);
    }

    debug!(
        total,
        number_of_rows,
        max_columns,
        "Partitioned images into rows"
    );

    Ok(ImagesMatrix { rows, max_columns })
}
