//! STOMP frame parser robustness
//!
//! The parser sits directly on untrusted broker input, so whatever
//! arrives it must reject cleanly rather than panic, and header
//! escaping must never corrupt a value.

use proptest::prelude::*;

use traodoido::realtime::stomp::{Command, Frame};

proptest! {
    /// Arbitrary input never panics the parser
    #[test]
    fn parser_never_panics(input in any::<String>()) {
        let _ = Frame::parse(&input);
    }

    /// Header values containing protocol specials survive an
    /// encode/parse cycle intact
    #[test]
    fn header_escaping_preserves_values(value in "[a-zA-Z0-9:\\\\\\n ]{0,40}") {
        let frame = Frame::new(Command::Message).header("message", value.clone());
        let parsed = Frame::parse(&frame.encode()).unwrap();
        prop_assert_eq!(parsed.get_header("message"), Some(value.as_str()));
    }

    /// A MESSAGE frame with an arbitrary NUL-free body keeps the body
    /// byte-for-byte
    #[test]
    fn message_body_is_untouched(body in "[^\\x00]{0,200}") {
        let frame = Frame::new(Command::Message)
            .header("destination", "/user/queue/notification")
            .body(body.clone());
        let parsed = Frame::parse(&frame.encode()).unwrap();
        prop_assert_eq!(parsed.body, body);
    }
}
