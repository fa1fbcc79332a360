use super::*;

pub(crate) struct ChartRow {
  pub(crate) date: String,
  pub(crate) replies: u64,
  pub(crate) root_comments: u64,
}

impl ChartRow {
  pub(crate) fn total(&self) -> u64 {
    self.root_comments.saturating_add(self.replies)
  }
}

#[derive(Default)]
pub(crate) struct ChartView {
  pub(crate) offset: usize,
  pub(crate) reply_sizes: Vec<u64>,
  pub(crate) rows: Vec<ChartRow>,
  pub(crate) selected: usize,
}

impl ChartView {
  pub(crate) fn is_empty(&self) -> bool {
    self.rows.is_empty() && self.reply_sizes.is_empty()
  }

  pub(crate) fn max_total(&self) -> u64 {
    self.rows.iter().map(ChartRow::total).max().unwrap_or(0)
  }

  pub(crate) fn new(
    days: BTreeMap<String, DayCounts>,
    reply_sizes: Vec<u64>,
  ) -> Self {
    let rows = days
      .into_iter()
      .map(|(date, counts)| ChartRow {
        date,
        replies: counts.replies,
        root_comments: counts.root_comments,
      })
      .collect();

    Self {
      offset: 0,
      reply_sizes,
      rows,
      selected: 0,
    }
  }

  pub(crate) fn select_next(&mut self) {
    if !self.rows.is_empty() {
      self.selected =
        self.selected.saturating_add(1).min(self.rows.len() - 1);
    }
  }

  pub(crate) fn select_previous(&mut self) {
    self.selected = self.selected.saturating_sub(1);
  }

  pub(crate) fn summary(&self) -> Option<String> {
    if self.reply_sizes.is_empty() {
      return None;
    }

    let count = u64::try_from(self.reply_sizes.len()).unwrap_or(u64::MAX);
    let largest = self.reply_sizes.iter().copied().max().unwrap_or(0);
    let total: u64 = self.reply_sizes.iter().sum();
    let tenths = total.saturating_mul(10) / count.max(1);

    Some(format!(
      "{count} reply trees, largest {largest}, average {}.{}",
      tenths / 10,
      tenths % 10
    ))
  }
}
