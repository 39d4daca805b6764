use crate::catalog::ProductRecord;

/// Number of catalog records the featured carousel holds.
pub const CAROUSEL_LIMIT: usize = 10;

/// Single-item-visible window over the head of the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarouselState {
    items: Vec<ProductRecord>,
    current_index: usize,
}

impl CarouselState {
    /// Takes the first [`CAROUSEL_LIMIT`] records; index starts at 0.
    pub fn from_catalog(catalog: &[ProductRecord]) -> Self {
        let window = catalog.len().min(CAROUSEL_LIMIT);
        Self {
            items: catalog[..window].to_vec(),
            current_index: 0,
        }
    }

    pub fn items(&self) -> &[ProductRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&ProductRecord> {
        self.items.get(self.current_index)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        !self.items.is_empty() && index == self.current_index
    }

    /// Steps forward with wraparound. No-op on an empty carousel.
    pub fn next(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % len;
    }

    /// Steps backward with wraparound. No-op on an empty carousel.
    pub fn previous(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + len - 1) % len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog(len: usize) -> Vec<ProductRecord> {
        (0..len)
            .map(|i| ProductRecord::new("", format!("item-{i}"), "", i as f64, None))
            .collect()
    }

    #[test]
    fn window_is_bounded_to_first_ten() {
        let state = CarouselState::from_catalog(&catalog(14));
        assert_eq!(state.len(), CAROUSEL_LIMIT);
        assert_eq!(state.items()[9].name, "item-9");
        assert_eq!(state.current().unwrap().name, "item-0");
    }

    #[test]
    fn only_the_current_item_is_visible() {
        let mut state = CarouselState::from_catalog(&catalog(4));
        state.next();
        let visible: Vec<usize> = (0..state.len()).filter(|&i| state.is_visible(i)).collect();
        assert_eq!(visible, vec![1]);
    }

    #[test]
    fn empty_carousel_steps_are_noops() {
        let mut state = CarouselState::from_catalog(&[]);
        state.next();
        state.previous();
        assert_eq!(state.current_index(), 0);
        assert!(state.current().is_none());
        assert!(!state.is_visible(0));
    }

    #[test]
    fn single_item_stays_at_zero() {
        let mut state = CarouselState::from_catalog(&catalog(1));
        state.next();
        assert_eq!(state.current_index(), 0);
        state.previous();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut state = CarouselState::from_catalog(&catalog(6));
        state.previous();
        assert_eq!(state.current_index(), 5);
    }

    proptest! {
        #[test]
        fn n_steps_forward_return_to_start(len in 1usize..=CAROUSEL_LIMIT) {
            let mut state = CarouselState::from_catalog(&catalog(len));
            for _ in 0..len {
                state.next();
            }
            prop_assert_eq!(state.current_index(), 0);
        }

        #[test]
        fn previous_then_next_is_identity(len in 1usize..=CAROUSEL_LIMIT, start in 0usize..CAROUSEL_LIMIT) {
            let mut state = CarouselState::from_catalog(&catalog(len));
            for _ in 0..(start % len) {
                state.next();
            }
            let before = state.current_index();
            state.previous();
            state.next();
            prop_assert_eq!(state.current_index(), before);
        }
    }
}
