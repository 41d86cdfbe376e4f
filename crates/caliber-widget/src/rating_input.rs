use caliber_core::models::rating::Rating;

/// Star picker state: a committed rating plus a transient hover preview.
///
/// `0` means nothing is committed. The preview only affects what is highlighted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RatingInput {
    committed: u8,
    hover: Option<u8>,
}

impl RatingInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn in_range(k: u8) -> bool {
        (Rating::MIN..=Rating::MAX).contains(&k)
    }

    /// Click on star `k`: commit it. Out-of-range controls are ignored.
    pub fn activate(&mut self, k: u8) -> bool {
        if !Self::in_range(k) {
            return false;
        }
        self.committed = k;
        true
    }

    /// Pointer entered star `k`: preview it without committing.
    pub fn pointer_enter(&mut self, k: u8) {
        if Self::in_range(k) {
            self.hover = Some(k);
        }
    }

    /// Pointer left the star container: fall back to the committed value.
    pub fn pointer_leave(&mut self) {
        self.hover = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn committed(&self) -> u8 {
        self.committed
    }

    /// The rating currently shown: hover value while hovering, else the committed one.
    pub fn displayed(&self) -> u8 {
        self.hover.unwrap_or(self.committed)
    }

    pub fn is_active(&self, k: u8) -> bool {
        Self::in_range(k) && k <= self.displayed()
    }

    /// Highlight state for stars 1 through 5.
    pub fn highlights(&self) -> [bool; 5] {
        let mut out = [false; 5];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.is_active(i as u8 + 1);
        }
        out
    }
}
