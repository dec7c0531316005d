use super::*;

#[test]
fn server_side_message_is_descriptive() {
    assert!(SERVER_SIDE_MESSAGE.contains("browser"));
}

#[test]
fn transport_is_a_shareable_unit_value() {
    let transport = GlooTransport;
    let copy = transport;
    assert_eq!(format!("{copy:?}"), format!("{transport:?}"));
}
