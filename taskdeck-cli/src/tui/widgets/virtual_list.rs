//! Cursor navigation over a variable-length list
//!
//! The task view renders a filtered projection of its data, so the
//! navigable length changes with the display mode. This trait keeps the
//! cursor arithmetic in one place.

pub trait VirtualList {
    /// Total number of navigable rows
    fn virtual_len(&self) -> usize;

    /// Current cursor position
    fn cursor(&self) -> usize;

    /// Set the cursor to a specific position
    fn set_cursor(&mut self, pos: usize);

    /// Move the cursor up one row, wrapping to the bottom at the top.
    ///
    /// Returns false on an empty list.
    fn move_up(&mut self) -> bool {
        let len = self.virtual_len();
        if len == 0 {
            return false;
        }
        let current = self.cursor();
        if current > 0 {
            self.set_cursor(current - 1);
        } else {
            self.set_cursor(len - 1);
        }
        true
    }

    /// Move the cursor down one row, wrapping to the top at the bottom.
    ///
    /// Returns false on an empty list.
    fn move_down(&mut self) -> bool {
        let len = self.virtual_len();
        if len == 0 {
            return false;
        }
        let current = self.cursor();
        if current + 1 < len {
            self.set_cursor(current + 1);
        } else {
            self.set_cursor(0);
        }
        true
    }

    fn goto_top(&mut self) {
        self.set_cursor(0);
    }

    fn goto_bottom(&mut self) {
        self.set_cursor(self.virtual_len().saturating_sub(1));
    }

    /// First visible row for a viewport of the given height, keeping the
    /// cursor centered where possible.
    fn scroll_offset(&self, viewport_height: usize) -> usize {
        let cursor = self.cursor();
        let len = self.virtual_len();
        if len <= viewport_height || viewport_height == 0 {
            0
        } else if cursor < viewport_height / 2 {
            0
        } else if cursor >= len - viewport_height / 2 {
            len - viewport_height
        } else {
            cursor - viewport_height / 2
        }
    }

    /// Pull the cursor back into range after the list shrinks.
    fn clamp_cursor(&mut self) {
        let max = self.virtual_len().saturating_sub(1);
        if self.cursor() > max {
            self.set_cursor(max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockList {
        len: usize,
        cursor: usize,
    }

    impl VirtualList for MockList {
        fn virtual_len(&self) -> usize {
            self.len
        }

        fn cursor(&self) -> usize {
            self.cursor
        }

        fn set_cursor(&mut self, pos: usize) {
            self.cursor = pos;
        }
    }

    #[test]
    fn test_move_wraps_both_ways() {
        let mut list = MockList { len: 3, cursor: 0 };
        assert!(list.move_up());
        assert_eq!(list.cursor(), 2);
        assert!(list.move_down());
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn test_move_on_empty_list() {
        let mut list = MockList { len: 0, cursor: 0 };
        assert!(!list.move_up());
        assert!(!list.move_down());
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn test_goto_top_bottom() {
        let mut list = MockList { len: 5, cursor: 2 };
        list.goto_bottom();
        assert_eq!(list.cursor(), 4);
        list.goto_top();
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn test_scroll_offset_centers_cursor() {
        let list = MockList {
            len: 100,
            cursor: 50,
        };
        assert_eq!(list.scroll_offset(20), 40);

        let list = MockList { len: 100, cursor: 3 };
        assert_eq!(list.scroll_offset(20), 0);

        let list = MockList {
            len: 100,
            cursor: 97,
        };
        assert_eq!(list.scroll_offset(20), 80);

        let list = MockList { len: 5, cursor: 3 };
        assert_eq!(list.scroll_offset(20), 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut list = MockList { len: 10, cursor: 9 };
        list.len = 4;
        list.clamp_cursor();
        assert_eq!(list.cursor(), 3);
    }
}
