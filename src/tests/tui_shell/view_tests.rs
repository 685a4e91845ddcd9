    use super::*;

    #[test]
    fn cursor_stays_in_bounds() {
        let mut view = HotelsView::default();
        view.move_up();
        assert_eq!(view.cursor, 0);
        view.move_down(3);
        view.move_down(3);
        view.move_down(3);
        assert_eq!(view.cursor, 2);
        view.clamp(1);
        assert_eq!(view.cursor, 0);
        view.page(25, true);
        assert_eq!(view.cursor, 10);
        view.page(25, true);
        view.page(25, true);
        assert_eq!(view.cursor, 24);
    }

    #[test]
    fn window_follows_cursor() {
        let mut view = HotelsView::default();
        view.cursor = 12;
        assert_eq!(view.window(5), 8);
        view.offset = 8;
        view.cursor = 9;
        assert_eq!(view.window(5), 8);
        view.cursor = 3;
        assert_eq!(view.window(5), 3);
    }
