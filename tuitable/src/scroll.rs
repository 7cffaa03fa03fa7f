//! Horizontal scrolling over columns, with frozen leading columns.

/// One rendered column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Real column, by index into the column list.
    Column(usize),
    /// `<` marker for columns scrolled off to the left.
    OverflowLeft,
    /// `>` marker for columns cut off on the right, with its width.
    OverflowRight(usize),
}

impl Slot {
    pub fn width(&self, widths: &[usize]) -> usize {
        match *self {
            Slot::Column(i) => widths.get(i).copied().unwrap_or(1),
            Slot::OverflowLeft => 1,
            Slot::OverflowRight(w) => w,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HorizontalScroller {
    frozen: usize,
    offset: usize,
    max_offset: usize,
    /// Total table width limit, borders included. 0 is unlimited.
    max_total_width: usize,
}

impl HorizontalScroller {
    pub fn new(max_total_width: usize, frozen: usize) -> Self {
        Self {
            frozen,
            max_total_width,
            ..Self::default()
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    pub fn frozen(&self) -> usize {
        self.frozen
    }

    pub fn max_total_width(&self) -> usize {
        self.max_total_width
    }

    pub fn set_frozen(&mut self, frozen: usize) {
        self.frozen = frozen;
    }

    pub fn set_max_total_width(&mut self, width: usize) {
        self.max_total_width = width;
    }

    /// Recompute how far the view may scroll for the given column widths.
    pub fn recalculate(&mut self, widths: &[usize]) {
        self.max_offset = self.compute_max_offset(widths);
        self.offset = self.offset.min(self.max_offset);
        log::trace!(
            "horizontal scroll offset {} of max {}",
            self.offset,
            self.max_offset
        );
    }

    fn compute_max_offset(&self, widths: &[usize]) -> usize {
        if self.max_total_width == 0 || self.frozen >= widths.len() {
            return 0;
        }

        let full: usize = widths.iter().sum::<usize>() + widths.len() + 1;
        if full <= self.max_total_width {
            return 0;
        }

        // left border plus the `<` marker and its divider
        let mut visible = 3;
        for w in &widths[..self.frozen] {
            visible += w + 1;
        }

        let mut max_offset = 0;
        for i in (self.frozen..widths.len()).rev() {
            if visible > self.max_total_width {
                break;
            }
            visible += widths[i] + 1;
            if visible <= self.max_total_width {
                max_offset = i - self.frozen;
            }
        }
        max_offset
    }

    pub fn scroll_right(&mut self) {
        if self.offset < self.max_offset {
            self.offset += 1;
            log::debug!("scrolled right to offset {}", self.offset);
        }
    }

    pub fn scroll_left(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
            log::debug!("scrolled left to offset {}", self.offset);
        }
    }

    /// The slots to render, left to right.
    pub fn slots(&self, widths: &[usize]) -> Vec<Slot> {
        let mut slots = Vec::with_capacity(widths.len() + 2);
        let mut total = 0;
        let last = widths.len().saturating_sub(1);

        for (i, &width) in widths.iter().enumerate() {
            if self.offset > 0 && i == self.frozen {
                total += 1 + if slots.is_empty() { 2 } else { 1 };
                slots.push(Slot::OverflowLeft);
            }

            if i >= self.frozen && i < self.frozen + self.offset {
                continue;
            }

            let cost = width + if slots.is_empty() { 2 } else { 1 };

            if self.max_total_width != 0 {
                let target = if i == last {
                    self.max_total_width
                } else {
                    self.max_total_width.saturating_sub(2)
                };

                if total + cost > target {
                    let edge = if slots.is_empty() { 2 } else { 1 };
                    let overflow = self.max_total_width.saturating_sub(total + edge).max(1);
                    slots.push(Slot::OverflowRight(overflow));
                    break;
                }
                total += cost;
            }

            slots.push(Slot::Column(i));
        }

        slots
    }
}
