use super::*;

#[test]
fn redir_mode_from_sign() {
    assert_eq!(RedirMode::from_sign("<"), Some(RedirMode::Read));
    assert_eq!(RedirMode::from_sign(">"), Some(RedirMode::Write));
    assert_eq!(RedirMode::from_sign(">>"), Some(RedirMode::Append));
    assert_eq!(RedirMode::from_sign("<>"), Some(RedirMode::ReadWrite));
    assert_eq!(RedirMode::from_sign(">>>"), None);
    assert_eq!(RedirMode::from_sign("><"), None);
    assert_eq!(RedirMode::from_sign(""), None);
}

#[test]
fn redir_mode_sign_inverts_from_sign() {
    for mode in [
        RedirMode::Read,
        RedirMode::Write,
        RedirMode::Append,
        RedirMode::ReadWrite,
    ] {
        assert_eq!(RedirMode::from_sign(mode.sign()), Some(mode));
    }
}

#[test]
fn tag_matches_variant() {
    assert_eq!(NodeKind::Sep.tag(), NodeTag::Sep);
    assert_eq!(NodeKind::Chunk(Chunk::default()).name(), "Chunk");
    assert_eq!(NodeKind::MapPair(MapPair::default()).tag(), NodeTag::MapPair);
}

#[test]
fn accessors_only_match_their_variant() {
    let kind = NodeKind::Primary(Primary {
        value: b"abc".to_vec(),
        ..Primary::default()
    });
    assert!(kind.as_primary().is_some());
    assert!(kind.as_compound().is_none());
    assert!(NodeKind::Sep.as_primary().is_none());
}

#[test]
fn value_lossy_replaces_invalid_bytes() {
    let primary = Primary {
        value: vec![b'a', 0xff, b'b'],
        ..Primary::default()
    };
    assert_eq!(primary.value_lossy(), "a\u{fffd}b");
}

#[test]
fn defaults() {
    assert_eq!(ExprCtx::default(), ExprCtx::Normal);
    assert_eq!(PrimaryType::default(), PrimaryType::Bareword);
    assert_eq!(PrimaryType::ExceptionCapture.to_string(), "ExceptionCapture");
}
