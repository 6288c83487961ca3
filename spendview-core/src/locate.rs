//! Maps a pointer position on the stacked bar to the category beneath it.
//!
//! The bar maps the domain `[0, total]` linearly onto `[0, plot_width]`.
//! Each category covers the interval between the running sum before it and
//! the running sum after it, in list order.

use spendview_state::Category;

/// A pointer interaction with the bar, captured together with the plot geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The pointer position, in the same coordinate space as `plot_origin`.
    pub offset_x: f64,
    /// Where the plotted area starts.
    pub plot_origin: f64,
    /// The width of the plotted area.
    pub plot_width: f64,
}
impl PointerEvent {
    /// The pointer position relative to the start of the plotted area.
    pub fn plot_offset(&self) -> f64 {
        self.offset_x - self.plot_origin
    }
}

/// The result of locating a pointer on the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateOutcome {
    /// The pointer lies within the category at this index.
    Selected(usize),
    /// The pointer lies outside the plotted area.
    OutsidePlot,
    /// The geometry or the converted value was not a usable number.
    InvalidGeometry,
    /// No category's interval contains the pointer.
    Unmatched,
}
impl LocateOutcome {
    pub fn selected(self) -> Option<usize> {
        match self {
            LocateOutcome::Selected(index) => Some(index),
            _ => None,
        }
    }
}

/// A linear mapping between plot offsets and amounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain_max: f64,
    pub plot_width: f64,
}
impl LinearScale {
    pub fn new(domain_max: f64, plot_width: f64) -> Self {
        Self {
            domain_max,
            plot_width,
        }
    }

    /// The amount at `offset`. Returns 0 for a zero-width plot.
    pub fn value_at(&self, offset: f64) -> f64 {
        if self.plot_width == 0.0 {
            return 0.0;
        }
        offset / self.plot_width * self.domain_max
    }

    /// The plot offset of `value`. Returns 0 for an empty domain.
    pub fn offset_of(&self, value: f64) -> f64 {
        if self.domain_max == 0.0 {
            return 0.0;
        }
        value / self.domain_max * self.plot_width
    }
}

/// Finds the category under the pointer.
///
/// `pixel_to_value` converts a plot-local offset into an amount. The first
/// category whose running sum, truncated to a whole number, is at least that
/// amount is selected. Running sums are kept as `f64`; truncation only
/// happens at the comparison.
pub fn locate(
    categories: &[Category],
    event: &PointerEvent,
    pixel_to_value: impl Fn(f64) -> f64,
) -> LocateOutcome {
    let offset = event.plot_offset();
    if !offset.is_finite() || !event.plot_width.is_finite() || event.plot_width < 0.0 {
        return LocateOutcome::InvalidGeometry;
    }
    if offset < 0.0 || offset > event.plot_width {
        return LocateOutcome::OutsidePlot;
    }

    let value = pixel_to_value(offset);
    if !value.is_finite() {
        return LocateOutcome::InvalidGeometry;
    }

    let mut accumulated = 0.0;
    for (index, category) in categories.iter().enumerate() {
        accumulated += category.amount;
        if value <= accumulated.floor() {
            return LocateOutcome::Selected(index);
        }
    }
    LocateOutcome::Unmatched
}

/// Locates the pointer and calls `on_selected` if it lies on a category.
///
/// Returns whether `on_selected` was called.
pub fn select_category(
    categories: &[Category],
    event: &PointerEvent,
    pixel_to_value: impl Fn(f64) -> f64,
    on_selected: impl FnOnce(&Category),
) -> bool {
    let outcome = locate(categories, event, pixel_to_value);
    tracing::debug!(?event, ?outcome, "located pointer on bar");
    match outcome.selected().and_then(|index| categories.get(index)) {
        Some(category) => {
            on_selected(category);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::aggregate;
    use spendview_state::CategoryColor;

    fn category(id: &str, amount: f64) -> Category {
        Category::new(id, id, CategoryColor::default(), amount)
    }

    fn tap(offset_x: f64, plot_width: f64) -> PointerEvent {
        PointerEvent {
            offset_x,
            plot_origin: 0.0,
            plot_width,
        }
    }

    fn selected_id(
        categories: &[Category],
        event: &PointerEvent,
        pixel_to_value: impl Fn(f64) -> f64,
    ) -> Option<String> {
        let mut selected = None;
        select_category(categories, event, pixel_to_value, |c| {
            selected = Some(c.id.to_string())
        });
        selected
    }

    #[test]
    fn test_two_equal_categories() {
        let categories = [category("a", 1250.0), category("b", 1250.0)];
        let to_value = |px: f64| px * 10.0;

        assert_eq!(selected_id(&categories, &tap(50.0, 250.0), to_value).as_deref(), Some("a"));
        assert_eq!(selected_id(&categories, &tap(200.0, 250.0), to_value).as_deref(), Some("b"));
        // The boundary belongs to the earlier category.
        assert_eq!(selected_id(&categories, &tap(125.0, 250.0), to_value).as_deref(), Some("a"));
        assert_eq!(selected_id(&categories, &tap(250.0, 250.0), to_value).as_deref(), Some("b"));
    }

    #[test]
    fn test_plot_origin_is_subtracted() {
        let categories = [category("a", 1250.0), category("b", 1250.0)];
        let event = PointerEvent {
            offset_x: 230.0,
            plot_origin: 30.0,
            plot_width: 250.0,
        };
        assert_eq!(event.plot_offset(), 200.0);
        assert_eq!(locate(&categories, &event, |px| px * 10.0), LocateOutcome::Selected(1));
    }

    #[test]
    fn test_outside_plot_never_selects() {
        let categories = [category("a", 1250.0), category("b", 1250.0)];
        let called = Cell::new(false);
        for offset in [-5.0, 255.0] {
            let fired = select_category(&categories, &tap(offset, 250.0), |px| px * 10.0, |_| {
                called.set(true)
            });
            assert!(!fired);
            assert_eq!(
                locate(&categories, &tap(offset, 250.0), |px| px * 10.0),
                LocateOutcome::OutsidePlot
            );
        }
        assert!(!called.get());
    }

    #[test]
    fn test_empty_list_never_selects() {
        for offset in [0.0, 10.0, 100.0] {
            assert_eq!(locate(&[], &tap(offset, 100.0), |px| px), LocateOutcome::Unmatched);
        }
    }

    #[test]
    fn test_zero_width_category_is_skipped() {
        let categories = [category("a", 0.0), category("b", 100.0)];
        let scale = LinearScale::new(aggregate::total(&categories), 100.0);
        for offset in [0.5, 1.0, 50.0, 99.0, 100.0] {
            assert_eq!(
                selected_id(&categories, &tap(offset, 100.0), |px| scale.value_at(px)).as_deref(),
                Some("b"),
                "offset {offset}"
            );
        }
    }

    #[test]
    fn test_zero_width_category_tie() {
        // A value of exactly zero ties with the empty first interval.
        let categories = [category("a", 0.0), category("b", 100.0)];
        assert_eq!(locate(&categories, &tap(0.0, 100.0), |px| px), LocateOutcome::Selected(0));
    }

    #[test]
    fn test_running_sum_is_truncated() {
        // Running sums are 10.7 and 21.4; compared as 10 and 21.
        let categories = [category("a", 10.7), category("b", 10.7)];
        let to_value = |px: f64| px;
        assert_eq!(locate(&categories, &tap(10.0, 30.0), to_value), LocateOutcome::Selected(0));
        assert_eq!(locate(&categories, &tap(10.5, 30.0), to_value), LocateOutcome::Selected(1));
        assert_eq!(locate(&categories, &tap(21.0, 30.0), to_value), LocateOutcome::Selected(1));
        // Past the truncated total there is nothing to select.
        assert_eq!(locate(&categories, &tap(21.2, 30.0), to_value), LocateOutcome::Unmatched);
    }

    #[test]
    fn test_truncation_does_not_compound() {
        // Ten amounts of 0.3 sum to 3.0 (within rounding); truncating each step would sum to 0.
        let categories: Vec<_> = (0..10).map(|i| category(&format!("c{i}"), 0.3)).collect();
        let outcome = locate(&categories, &tap(2.0, 3.0), |px| px);
        assert!(matches!(outcome, LocateOutcome::Selected(i) if i >= 6));
    }

    #[test]
    fn test_invalid_geometry() {
        let categories = [category("a", 100.0)];
        assert_eq!(
            locate(&categories, &tap(10.0, -1.0), |px| px),
            LocateOutcome::InvalidGeometry
        );
        assert_eq!(
            locate(&categories, &tap(10.0, f64::INFINITY), |px| px),
            LocateOutcome::InvalidGeometry
        );
        assert_eq!(
            locate(&categories, &tap(f64::NAN, 100.0), |px| px),
            LocateOutcome::InvalidGeometry
        );
        assert_eq!(
            locate(&categories, &tap(10.0, 100.0), |_| f64::NAN),
            LocateOutcome::InvalidGeometry
        );
        assert!(!select_category(&categories, &tap(10.0, 100.0), |_| f64::INFINITY, |_| {
            panic!("should not select");
        }));
    }

    #[test]
    fn test_selection_is_idempotent() {
        let categories = vec![category("a", 300.0), category("b", 200.0), category("c", 500.0)];
        let snapshot = categories.clone();
        let scale = LinearScale::new(aggregate::total(&categories), 80.0);
        for offset in [0.0, 12.5, 40.0, 79.9] {
            let event = tap(offset, 80.0);
            let first = locate(&categories, &event, |px| scale.value_at(px));
            let second = locate(&categories, &event, |px| scale.value_at(px));
            assert_eq!(first, second);
        }
        assert_eq!(categories, snapshot);
    }

    #[test]
    fn test_callback_fires_once() {
        let categories = [category("a", 100.0)];
        let calls = Cell::new(0);
        assert!(select_category(&categories, &tap(50.0, 100.0), |px| px, |_| {
            calls.set(calls.get() + 1)
        }));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new(2500.0, 250.0);
        assert_eq!(scale.value_at(50.0), 500.0);
        assert_eq!(scale.offset_of(2000.0), 200.0);
        assert_eq!(LinearScale::new(0.0, 250.0).offset_of(10.0), 0.0);
        assert_eq!(LinearScale::new(100.0, 0.0).value_at(10.0), 0.0);
    }
}
