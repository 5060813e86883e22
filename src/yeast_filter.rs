//! Sorting and filtering rules for the yeast list.

use std::cmp::Ordering;

use regex::Regex;
use tracing::warn;

use crate::error::SchemaError;
use crate::locale::Locale;
use crate::units::{Amount, PhysicalQuantity, string_to_si};

/// Columns of the yeast list, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YeastColumn {
    Name,
    Type,
    Lab,
    ProductId,
    Form,
    Amount,
    Inventory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Tabular data the adapter reads from.
pub trait RowSource {
    fn row_count(&self) -> usize;

    /// Display text of a cell.
    fn cell(&self, row: usize, column: YeastColumn) -> &str;

    /// Whether the row should be shown at all.
    fn display(&self, row: usize) -> bool;
}

/// Orders and filters the rows of a [`RowSource`].
pub struct YeastSortFilter<S> {
    source: S,
    filter: bool,
    pattern: Option<Regex>,
    sort_order: SortOrder,
    locale: Locale,
}

impl<S: RowSource> YeastSortFilter<S> {
    pub fn new(source: S, filter: bool) -> Self {
        Self {
            source,
            filter,
            pattern: None,
            sort_order: SortOrder::default(),
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    pub fn set_filter_enabled(&mut self, filter: bool) {
        self.filter = filter;
    }

    /// Set the name filter. An empty pattern matches every row.
    pub fn set_filter_pattern(&mut self, pattern: &str) -> Result<(), SchemaError> {
        self.pattern = if pattern.is_empty() {
            None
        } else {
            Some(Regex::new(pattern).map_err(|e| SchemaError::InvalidPattern(e.to_string()))?)
        };
        Ok(())
    }

    /// Whether `left_row` sorts before `right_row` in `column`.
    ///
    /// Under ascending order an empty inventory never sorts first, so
    /// stocked yeasts stay at the top of the list.
    pub fn less_than(&self, left_row: usize, right_row: usize, column: YeastColumn) -> bool {
        let left = self.source.cell(left_row, column);
        let right = self.source.cell(right_row, column);

        match column {
            YeastColumn::Inventory => {
                let left = self.volume(left);
                if left.is_zero() && self.sort_order == SortOrder::Ascending {
                    return false;
                }
                left.cmp_quantity(&self.volume(right)) == Ordering::Less
            }
            _ => self.compare(left_row, right_row, column) == Ordering::Less,
        }
    }

    /// Total order behind [`less_than`](Self::less_than).
    pub fn compare(&self, left_row: usize, right_row: usize, column: YeastColumn) -> Ordering {
        let left = self.source.cell(left_row, column);
        let right = self.source.cell(right_row, column);

        match column {
            YeastColumn::Inventory => {
                let left = self.volume(left);
                let right = self.volume(right);
                if self.sort_order == SortOrder::Ascending {
                    match (left.is_zero(), right.is_zero()) {
                        (true, false) => return Ordering::Greater,
                        (false, true) => return Ordering::Less,
                        _ => {}
                    }
                }
                left.cmp_quantity(&right)
            }
            YeastColumn::Amount => self.volume(left).cmp_quantity(&self.volume(right)),
            YeastColumn::ProductId => {
                let left = self.locale.to_double_or_zero(left, "YeastSortFilter::compare");
                let right = self.locale.to_double_or_zero(right, "YeastSortFilter::compare");
                left.total_cmp(&right)
            }
            _ => left.cmp(right),
        }
    }

    /// Indexes of the accepted rows, ordered by `column`.
    pub fn sort_rows(&mut self, column: YeastColumn, order: SortOrder) -> Vec<usize> {
        self.sort_order = order;

        let mut rows: Vec<usize> = (0..self.source.row_count())
            .filter(|row| self.filter_accepts_row(*row))
            .collect();
        rows.sort_by(|a, b| match order {
            SortOrder::Ascending => self.compare(*a, *b, column),
            SortOrder::Descending => self.compare(*b, *a, column),
        });
        rows
    }

    /// A row passes when filtering is off, or when its name matches the
    /// pattern and the row is marked for display.
    pub fn filter_accepts_row(&self, row: usize) -> bool {
        if !self.filter {
            return true;
        }
        let name = self.source.cell(row, YeastColumn::Name);
        let matches = self.pattern.as_ref().is_none_or(|p| p.is_match(name));
        matches && self.source.display(row)
    }

    fn volume(&self, text: &str) -> Amount {
        string_to_si(text, PhysicalQuantity::Volume, &self.locale).unwrap_or_else(|e| {
            warn!("treating {:?} as zero: {}", text, e);
            Amount::zero(PhysicalQuantity::Volume)
        })
    }
}
