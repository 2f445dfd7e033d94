use async_graphql::Enum;

/// Page layout of the reader. Purely view state, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Enum)]
pub enum ReadingMode {
    #[default]
    Vertical,
    Horizontal,
    Single,
}

/// Result of turning a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTurn {
    /// At a boundary with no adjacent chapter, nothing moves.
    Stay,
    Page(i64),
    PrevChapter,
    NextChapter,
}

/// Reader position within one chapter. Pages are 1-based; turning past a
/// boundary crosses into the adjacent chapter when one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderState {
    pub mode: ReadingMode,
    pub page: i64,
    pub total_pages: i64,
    pub has_prev_chapter: bool,
    pub has_next_chapter: bool,
}

impl ReaderState {
    pub fn open(
        mode: ReadingMode,
        page: i64,
        total_pages: i64,
        has_prev_chapter: bool,
        has_next_chapter: bool,
    ) -> Self {
        Self {
            mode,
            page: page.clamp(1, total_pages.max(1)),
            total_pages,
            has_prev_chapter,
            has_next_chapter,
        }
    }

    /// Switch layout without touching the page index.
    pub fn set_mode(&mut self, mode: ReadingMode) {
        self.mode = mode;
    }

    pub fn turn_next(&mut self) -> PageTurn {
        if self.page < self.total_pages {
            self.page += 1;
            PageTurn::Page(self.page)
        } else if self.has_next_chapter {
            PageTurn::NextChapter
        } else {
            PageTurn::Stay
        }
    }

    pub fn turn_prev(&mut self) -> PageTurn {
        if self.page > 1 {
            self.page -= 1;
            PageTurn::Page(self.page)
        } else if self.has_prev_chapter {
            PageTurn::PrevChapter
        } else {
            PageTurn::Stay
        }
    }

    pub fn prev_enabled(&self) -> bool {
        self.page > 1 || self.has_prev_chapter
    }

    pub fn next_enabled(&self) -> bool {
        self.page < self.total_pages || self.has_next_chapter
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_open_clamps_page() {
        let state = ReaderState::open(ReadingMode::Vertical, 99, 10, false, false);
        assert_eq!(state.page, 10);

        let state = ReaderState::open(ReadingMode::Vertical, -4, 10, false, false);
        assert_eq!(state.page, 1);

        let state = ReaderState::open(ReadingMode::Vertical, 3, 0, false, false);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_turn_within_chapter() {
        let mut state = ReaderState::open(ReadingMode::Single, 1, 3, false, false);

        assert_eq!(state.turn_next(), PageTurn::Page(2));
        assert_eq!(state.turn_next(), PageTurn::Page(3));
        assert_eq!(state.turn_prev(), PageTurn::Page(2));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_first_page_without_prev_chapter_stays() {
        let mut state = ReaderState::open(ReadingMode::Single, 1, 5, false, true);

        assert_eq!(state.turn_prev(), PageTurn::Stay);
        assert_eq!(state.page, 1);
        assert!(!state.prev_enabled());
    }

    #[test]
    fn test_last_page_crosses_to_next_chapter() {
        let mut state = ReaderState::open(ReadingMode::Horizontal, 5, 5, true, true);

        assert_eq!(state.turn_next(), PageTurn::NextChapter);
        assert_eq!(state.page, 5);
        assert!(state.next_enabled());
    }

    #[test]
    fn test_last_page_without_next_chapter_stays() {
        let mut state = ReaderState::open(ReadingMode::Horizontal, 5, 5, true, false);

        assert_eq!(state.turn_next(), PageTurn::Stay);
        assert!(!state.next_enabled());
    }

    #[test]
    fn test_first_page_crosses_to_prev_chapter() {
        let mut state = ReaderState::open(ReadingMode::Single, 1, 5, true, false);

        assert_eq!(state.turn_prev(), PageTurn::PrevChapter);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_set_mode_keeps_page() {
        let mut state = ReaderState::open(ReadingMode::Vertical, 4, 10, false, false);

        state.set_mode(ReadingMode::Single);
        assert_eq!(state.page, 4);

        state.set_mode(ReadingMode::Horizontal);
        assert_eq!(state.page, 4);
        assert_eq!(state.mode, ReadingMode::Horizontal);
    }
}
