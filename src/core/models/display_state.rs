/// Per-render display flags for a card. Built fresh on every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardDisplayState {
    pub active: bool,
}

impl CardDisplayState {
    pub fn new(active: bool) -> Self {
        Self { active }
    }
}

impl From<Option<bool>> for CardDisplayState {
    fn from(active: Option<bool>) -> Self {
        Self::new(active.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_flag_is_inactive() {
        assert_eq!(CardDisplayState::from(None), CardDisplayState::default());
        assert_eq!(CardDisplayState::from(Some(false)), CardDisplayState::default());
        assert!(CardDisplayState::from(Some(true)).active);
    }
}
