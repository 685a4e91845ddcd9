    use super::*;

    #[test]
    fn log_timestamps_show_wall_clock() {
        assert_eq!(fmt_ts_ui("2026-03-01T09:05:07Z"), "09:05:07");
        assert_eq!(fmt_ts_ui("not a time"), "not a time");
    }

    #[test]
    fn now_is_rfc3339() {
        let ts = now_ts();
        assert!(OffsetDateTime::parse(&ts, &Rfc3339).is_ok(), "{}", ts);
    }
