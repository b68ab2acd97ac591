/// Receives title/message banners from the engine.
pub trait OverlayPresenter {
    fn show(&mut self, title: &str, message: &str);
    fn hide(&mut self);
}

/// Retains the banner currently on screen so the renderer can draw it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    current: Option<(String, String)>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn title(&self) -> Option<&str> {
        self.current.as_ref().map(|(title, _)| title.as_str())
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, message)| message.as_str())
    }
}

impl OverlayPresenter for Overlay {
    fn show(&mut self, title: &str, message: &str) {
        self.current = Some((title.to_string(), message.to_string()));
    }

    fn hide(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_and_hide_clears() {
        let mut overlay = Overlay::new();
        assert!(!overlay.is_visible());

        overlay.show("Snake Game", "Press Space to start");
        overlay.show("Game Over!", "Score: 30");
        assert_eq!(overlay.title(), Some("Game Over!"));
        assert_eq!(overlay.message(), Some("Score: 30"));

        overlay.hide();
        assert!(!overlay.is_visible());
        assert_eq!(overlay.title(), None);
    }
}
